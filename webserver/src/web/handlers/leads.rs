//! Lead endpoints: capture, import, pipeline moves, assignment and call log

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use engine::{
    ActivityStore, CallLog, CallerDirectory, CreatedLead, ImportSummary, LeadStore, SettingsStore,
};
use shared::{Activity, Lead, LeadId, NewLead};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::types::{ApiResponse, AssigneeRequest, ImportRequest, StageRequest};
use crate::web::extract::{ApiJson, ApiPath};

/// GET /api/leads
pub async fn list_leads<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
) -> WebServerResult<Json<ApiResponse<Vec<Lead>>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let leads = state.service.list_leads().await?;
    Ok(Json(ApiResponse::ok(leads)))
}

/// POST /api/leads
pub async fn create_lead<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiJson(request): ApiJson<NewLead>,
) -> WebServerResult<(StatusCode, Json<ApiResponse<CreatedLead>>)>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let created = state.service.create_lead(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// POST /api/leads/import
pub async fn import_leads<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiJson(request): ApiJson<ImportRequest>,
) -> WebServerResult<Json<ApiResponse<ImportSummary>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    if request.leads.is_empty() {
        return Err(WebServerError::invalid_request("no leads to import"));
    }

    let summary = state.service.import_leads(request.leads).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/leads/:id
pub async fn get_lead<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiPath(lead_id): ApiPath<LeadId>,
) -> WebServerResult<Json<ApiResponse<Lead>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let lead = state.service.get_lead(lead_id).await?;
    Ok(Json(ApiResponse::ok(lead)))
}

/// PUT /api/leads/:id/stage
pub async fn update_stage<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiPath(lead_id): ApiPath<LeadId>,
    ApiJson(request): ApiJson<StageRequest>,
) -> WebServerResult<Json<ApiResponse<Lead>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let lead = state
        .service
        .update_stage(lead_id, request.stage, request.changed_by)
        .await?;
    Ok(Json(ApiResponse::ok(lead)))
}

/// PUT /api/leads/:id/assignee
pub async fn assign_lead<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiPath(lead_id): ApiPath<LeadId>,
    ApiJson(request): ApiJson<AssigneeRequest>,
) -> WebServerResult<Json<ApiResponse<Lead>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let lead = state.service.assign_lead(lead_id, request.caller_id).await?;
    Ok(Json(ApiResponse::ok(lead)))
}

/// GET /api/leads/:id/activities
pub async fn lead_activities<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiPath(lead_id): ApiPath<LeadId>,
) -> WebServerResult<Json<ApiResponse<Vec<Activity>>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let activities = state.service.lead_activities(lead_id).await?;
    Ok(Json(ApiResponse::ok(activities)))
}

/// POST /api/leads/:id/calls
pub async fn log_call<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiPath(lead_id): ApiPath<LeadId>,
    ApiJson(call): ApiJson<CallLog>,
) -> WebServerResult<(StatusCode, Json<ApiResponse<Activity>>)>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let entry = state.service.log_call(lead_id, call).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(entry))))
}
