//! Store trait definitions with mockall annotations for testing
//!
//! The lead service only talks to storage through these traits, so request
//! handling can be exercised against mocks or the in-memory stores.

use shared::{
    Activity, AssignmentSettings, Caller, CallerId, CallerStatus, Lead, LeadId, NewActivity,
    NewCaller, NewLead,
};
use crate::error::EngineResult;

/// Caller directory abstraction
#[mockall::automock]
#[async_trait::async_trait]
pub trait CallerDirectory: Send + Sync {
    /// Register a caller; the directory assigns the id
    async fn create_caller(&self, caller: NewCaller) -> EngineResult<Caller>;

    /// Look up one caller
    async fn get_caller(&self, caller_id: CallerId) -> EngineResult<Option<Caller>>;

    /// Every caller, ascending id
    async fn list_callers(&self) -> EngineResult<Vec<Caller>>;

    /// Rotation pool: active callers with the caller role, ascending id
    async fn active_callers(&self) -> EngineResult<Vec<Caller>>;

    /// Activate or deactivate a caller
    async fn set_status(&self, caller_id: CallerId, status: CallerStatus) -> EngineResult<Caller>;
}

/// Singleton assignment settings document
///
/// `load` and `save` are independent operations; there is no
/// compare-and-swap between them.
#[mockall::automock]
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> EngineResult<AssignmentSettings>;

    async fn save(&self, settings: AssignmentSettings) -> EngineResult<()>;
}

/// Lead collection abstraction
#[mockall::automock]
#[async_trait::async_trait]
pub trait LeadStore: Send + Sync {
    /// Insert a new lead, optionally already assigned
    async fn insert_lead(&self, lead: NewLead, assigned_to: Option<CallerId>) -> EngineResult<Lead>;

    async fn get_lead(&self, lead_id: LeadId) -> EngineResult<Option<Lead>>;

    /// Every lead, ascending id
    async fn list_leads(&self) -> EngineResult<Vec<Lead>>;

    /// Replace a stored lead; fails if it does not exist
    async fn update_lead(&self, lead: Lead) -> EngineResult<Lead>;

    /// Delete leads, returning how many existed
    async fn delete_leads(&self, lead_ids: &[LeadId]) -> EngineResult<usize>;
}

/// Activity / call log abstraction
#[mockall::automock]
#[async_trait::async_trait]
pub trait ActivityStore: Send + Sync {
    async fn record(&self, activity: NewActivity) -> EngineResult<Activity>;

    /// Activities of one lead, oldest first
    async fn list_for_lead(&self, lead_id: LeadId) -> EngineResult<Vec<Activity>>;

    /// Move every activity of `from` onto `to`, returning how many moved
    async fn reassign_lead(&self, from: &[LeadId], to: LeadId) -> EngineResult<usize>;
}
