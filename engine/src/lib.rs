//! CRM engine: lead assignment, duplicate detection and lead handling
//!
//! Pure decision logic lives in [`core`]; storage sits behind the traits in
//! [`traits`] with in-memory implementations in [`services`]; [`LeadService`]
//! composes them into the operations the REST layer exposes.

pub mod core;
pub mod error;
pub mod lead_service;
pub mod services;
pub mod state;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    eligible_callers, find_duplicates, matching_rule, select_assignee, AssignmentDecision,
    DuplicateGroup, DuplicateReason, MatchRule, PipelineSummary,
};
pub use error::{EngineError, EngineResult};
pub use lead_service::{
    CallLog, CreatedLead, ImportRowError, ImportSummary, InMemoryLeadService, LeadService,
    MergeOutcome, SettingsUpdate,
};
pub use state::CrmState;
pub use traits::{ActivityStore, CallerDirectory, LeadStore, SettingsStore};
