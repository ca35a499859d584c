//! Request and response bodies of the REST API

use serde::{Deserialize, Serialize};
use shared::{CallerId, CallerStatus, LeadId, LeadStage, NewLead};

/// Success envelope: `{"status":"ok","data":...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

/// Liveness report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub server_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRequest {
    pub stage: LeadStage,
    #[serde(default)]
    pub changed_by: Option<CallerId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRequest {
    pub caller_id: CallerId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerStatusRequest {
    pub status: CallerStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub leads: Vec<NewLead>,
}

/// Merge the listed leads into `keepId`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequest {
    pub keep_id: LeadId,
    pub merge_ids: Vec<LeadId>,
}
