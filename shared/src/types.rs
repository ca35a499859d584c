//! Core CRM records and identifiers
//!
//! Every record that crosses the API boundary serialises with camelCase
//! field names, which is what the browser client expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

/// Global service identity - set once at startup
static SERVICE_ID: OnceLock<ServiceId> = OnceLock::new();

/// Identifies which binary is emitting log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    /// REST API server
    WebServer,
    /// Offline duplicate report tool
    Cli,
    /// Library code running without an initialised binary
    Test,
}

impl ServiceId {
    /// Initialize the global service id for the REST server
    pub fn init_webserver() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::WebServer)
    }

    /// Initialize the global service id for the CLI
    pub fn init_cli() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::Cli)
    }

    /// Get the global service id, `Test` when no binary initialised it
    pub fn current() -> &'static ServiceId {
        SERVICE_ID.get().unwrap_or(&ServiceId::Test)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceId::WebServer => write!(f, "webserver"),
            ServiceId::Cli => write!(f, "crm-dedupe"),
            ServiceId::Test => write!(f, "test"),
        }
    }
}

/// Store-assigned caller identifier. Ascending order is creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(pub u64);

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store-assigned lead identifier. Ascending order is creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub u64);

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for activity log entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a CRM user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Caller,
    Admin,
}

/// Whether a user currently takes part in the rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerStatus {
    Active,
    Inactive,
}

impl fmt::Display for CallerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallerStatus::Active => write!(f, "active"),
            CallerStatus::Inactive => write!(f, "inactive"),
        }
    }
}


/// A sales caller (or admin) from the caller directory
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caller {
    pub id: CallerId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: CallerStatus,
}

impl Caller {
    /// Only active callers with the caller role receive leads
    pub fn is_assignable(&self) -> bool {
        self.status == CallerStatus::Active && self.role == Role::Caller
    }
}

/// Payload for registering a new caller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCaller {
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default = "default_status")]
    pub status: CallerStatus,
}

fn default_role() -> Role {
    Role::Caller
}

fn default_status() -> CallerStatus {
    CallerStatus::Active
}

/// Singleton settings document driving auto-assignment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSettings {
    pub auto_assign: bool,
    pub round_robin: bool,
    #[serde(default)]
    pub last_assigned_caller_id: Option<CallerId>,
}

impl Default for AssignmentSettings {
    fn default() -> Self {
        Self {
            auto_assign: true,
            round_robin: true,
            last_assigned_caller_id: None,
        }
    }
}

/// The caller chosen for a lead
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    pub caller_id: CallerId,
    pub caller_name: String,
    pub caller_email: String,
}

impl From<&Caller> for AssignmentResult {
    fn from(caller: &Caller) -> Self {
        Self {
            caller_id: caller.id,
            caller_name: caller.name.clone(),
            caller_email: caller.email.clone(),
        }
    }
}

/// Pipeline stage of a lead
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStage {
    #[default]
    New,
    Contacted,
    Interested,
    SiteVisit,
    Negotiation,
    Won,
    Lost,
}

impl LeadStage {
    pub const ALL: [LeadStage; 7] = [
        LeadStage::New,
        LeadStage::Contacted,
        LeadStage::Interested,
        LeadStage::SiteVisit,
        LeadStage::Negotiation,
        LeadStage::Won,
        LeadStage::Lost,
    ];
}

impl fmt::Display for LeadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeadStage::New => "new",
            LeadStage::Contacted => "contacted",
            LeadStage::Interested => "interested",
            LeadStage::SiteVisit => "site_visit",
            LeadStage::Negotiation => "negotiation",
            LeadStage::Won => "won",
            LeadStage::Lost => "lost",
        };
        write!(f, "{label}")
    }
}

/// A sales lead. Contact fields are optional because imported rows can
/// have empty cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub stage: LeadStage,
    #[serde(default)]
    pub assigned_to: Option<CallerId>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Payload for capturing or importing a lead
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Kind of entry in a lead's activity log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Call,
    Note,
    StageChange,
    Assignment,
    Merge,
}

/// Result of a logged call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome {
    Connected,
    NoAnswer,
    Busy,
    CallbackRequested,
    NotInterested,
}

/// Activity log entry attached to a lead
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub lead_id: LeadId,
    pub caller_id: Option<CallerId>,
    pub kind: ActivityKind,
    pub description: String,
    pub outcome: Option<CallOutcome>,
    pub duration_seconds: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Activity to be recorded; the store stamps id and time
#[derive(Clone, Debug, PartialEq)]
pub struct NewActivity {
    pub lead_id: LeadId,
    pub caller_id: Option<CallerId>,
    pub kind: ActivityKind,
    pub description: String,
    pub outcome: Option<CallOutcome>,
    pub duration_seconds: Option<u32>,
}

impl NewActivity {
    pub fn new(lead_id: LeadId, kind: ActivityKind, description: impl Into<String>) -> Self {
        Self {
            lead_id,
            caller_id: None,
            kind,
            description: description.into(),
            outcome: None,
            duration_seconds: None,
        }
    }

    pub fn by_caller(mut self, caller_id: CallerId) -> Self {
        self.caller_id = Some(caller_id);
        self
    }
}
