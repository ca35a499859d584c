//! Lead service
//!
//! Request-level operations over the caller directory, settings document,
//! lead collection and activity log. Store access goes through the traits in
//! [`crate::traits`] so every path can be exercised with mocks.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use shared::{
    crm_debug, crm_info, crm_warn, Activity, ActivityKind, AssignmentResult, AssignmentSettings,
    CallOutcome, Caller, CallerId, CallerStatus, Lead, LeadId, LeadStage, NewActivity, NewCaller,
    NewLead, ServiceId,
};

use crate::core::{find_duplicates, select_assignee, DuplicateGroup, PipelineSummary};
use crate::error::{EngineError, EngineResult};
use crate::services::{RealActivityStore, RealCallerDirectory, RealLeadStore, RealSettingsStore};
use crate::state::CrmState;
use crate::traits::{ActivityStore, CallerDirectory, LeadStore, SettingsStore};

/// A freshly created lead and who it went to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLead {
    pub lead: Lead,
    pub assignment: Option<AssignmentResult>,
}

/// Row that could not be imported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRowError {
    /// Zero-based position in the submitted batch
    pub row: usize,
    pub message: String,
}

/// Outcome of a bulk import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: usize,
    pub assigned: usize,
    pub lead_ids: Vec<LeadId>,
    pub skipped: Vec<ImportRowError>,
}

/// A call to add to a lead's log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLog {
    pub caller_id: CallerId,
    pub outcome: CallOutcome,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
}

/// Partial update of the assignment flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default)]
    pub auto_assign: Option<bool>,
    #[serde(default)]
    pub round_robin: Option<bool>,
    /// Clear `lastAssignedCallerId` so rotation restarts at the first caller
    #[serde(default)]
    pub reset_cursor: bool,
}

/// Result of merging a duplicate group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    pub keep_id: LeadId,
    pub merged_ids: Vec<LeadId>,
    pub deleted: usize,
    pub activities_reassigned: usize,
}

/// Lead service over injected stores
pub struct LeadService<C, S, L, A>
where
    C: CallerDirectory,
    S: SettingsStore,
    L: LeadStore,
    A: ActivityStore,
{
    callers: C,
    settings: S,
    leads: L,
    activities: A,
}

/// Lead service wired to the in-memory stores
pub type InMemoryLeadService =
    LeadService<RealCallerDirectory, RealSettingsStore, RealLeadStore, RealActivityStore>;

impl InMemoryLeadService {
    /// Build a service whose stores all share `state`
    pub fn in_memory(state: Arc<CrmState>) -> Self {
        Self::new(
            RealCallerDirectory::new(state.clone()),
            RealSettingsStore::new(state.clone()),
            RealLeadStore::new(state.clone()),
            RealActivityStore::new(state),
        )
    }
}

impl<C, S, L, A> LeadService<C, S, L, A>
where
    C: CallerDirectory,
    S: SettingsStore,
    L: LeadStore,
    A: ActivityStore,
{
    /// Create a new lead service with dependency injection
    pub fn new(callers: C, settings: S, leads: L, activities: A) -> Self {
        Self {
            callers,
            settings,
            leads,
            activities,
        }
    }

    pub fn callers(&self) -> &C {
        &self.callers
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn leads(&self) -> &L {
        &self.leads
    }

    // Lead capture

    /// Capture one lead, auto-assigning it when enabled
    pub async fn create_lead(&self, new_lead: NewLead) -> EngineResult<CreatedLead> {
        validate_new_lead(&new_lead)?;

        let assignment = self.auto_assign().await;
        let lead = self
            .leads
            .insert_lead(new_lead, assignment.as_ref().map(|a| a.caller_id))
            .await?;

        match &assignment {
            Some(assignee) => {
                let note = NewActivity::new(
                    lead.id,
                    ActivityKind::Assignment,
                    format!("Auto-assigned to {}", assignee.caller_name),
                )
                .by_caller(assignee.caller_id);
                self.record_best_effort(note).await;
                crm_info!(ServiceId::current(), "📥 Lead {} assigned to caller {}", lead.id, assignee.caller_id);
            }
            None => {
                crm_info!(ServiceId::current(), "📥 Lead {} captured unassigned", lead.id);
            }
        }

        Ok(CreatedLead { lead, assignment })
    }

    /// Import rows in order. Rows failing validation are skipped and reported;
    /// any store failure aborts the import.
    pub async fn import_leads(&self, rows: Vec<NewLead>) -> EngineResult<ImportSummary> {
        let mut summary = ImportSummary::default();

        for (row, new_lead) in rows.into_iter().enumerate() {
            match self.create_lead(new_lead).await {
                Ok(created) => {
                    summary.imported += 1;
                    if created.assignment.is_some() {
                        summary.assigned += 1;
                    }
                    summary.lead_ids.push(created.lead.id);
                }
                Err(e @ EngineError::ValidationError { .. }) => {
                    summary.skipped.push(ImportRowError {
                        row,
                        message: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        crm_info!(
            ServiceId::current(),
            "📦 Imported {} leads ({} assigned, {} skipped)",
            summary.imported,
            summary.assigned,
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Best-effort auto-assignment. Read failures leave the lead unassigned;
    /// a failed cursor write does not undo the pick.
    async fn auto_assign(&self) -> Option<AssignmentResult> {
        let active = match self.callers.active_callers().await {
            Ok(active) => active,
            Err(e) => {
                crm_warn!(ServiceId::current(), "⚠️ Auto-assign skipped, caller directory unavailable: {}", e);
                return None;
            }
        };

        let mut settings = match self.settings.load().await {
            Ok(settings) => settings,
            Err(e) => {
                crm_warn!(ServiceId::current(), "⚠️ Auto-assign skipped, settings unavailable: {}", e);
                return None;
            }
        };

        let decision = select_assignee(&active, &settings)?;

        // Plain read-modify-write: concurrent creations may reuse or skip a slot
        if decision.apply_to(&mut settings) {
            if let Err(e) = self.settings.save(settings).await {
                crm_warn!(ServiceId::current(), "⚠️ Failed to persist rotation cursor: {}", e);
            }
        }

        Some(decision.assignee)
    }

    // Lead maintenance

    pub async fn list_leads(&self) -> EngineResult<Vec<Lead>> {
        self.leads.list_leads().await
    }

    pub async fn get_lead(&self, lead_id: LeadId) -> EngineResult<Lead> {
        self.leads
            .get_lead(lead_id)
            .await?
            .ok_or(EngineError::LeadNotFound { lead_id })
    }

    /// Move a lead through the pipeline
    pub async fn update_stage(
        &self,
        lead_id: LeadId,
        stage: LeadStage,
        changed_by: Option<CallerId>,
    ) -> EngineResult<Lead> {
        let mut lead = self.get_lead(lead_id).await?;
        if lead.stage == stage {
            return Ok(lead);
        }

        let previous = lead.stage;
        lead.stage = stage;
        let lead = self.leads.update_lead(lead).await?;

        let mut note = NewActivity::new(
            lead_id,
            ActivityKind::StageChange,
            format!("Stage changed from {previous} to {stage}"),
        );
        note.caller_id = changed_by;
        self.record_best_effort(note).await;

        Ok(lead)
    }

    /// Manually hand a lead to a caller. The rotation cursor is not touched.
    pub async fn assign_lead(&self, lead_id: LeadId, caller_id: CallerId) -> EngineResult<Lead> {
        let caller = self.require_caller(caller_id).await?;
        if !caller.is_assignable() {
            return Err(EngineError::CallerUnavailable { caller_id });
        }

        let mut lead = self.get_lead(lead_id).await?;
        lead.assigned_to = Some(caller_id);
        let lead = self.leads.update_lead(lead).await?;

        let note = NewActivity::new(
            lead_id,
            ActivityKind::Assignment,
            format!("Manually assigned to {}", caller.name),
        )
        .by_caller(caller_id);
        self.record_best_effort(note).await;

        Ok(lead)
    }

    /// Append a call to a lead's log
    pub async fn log_call(&self, lead_id: LeadId, call: CallLog) -> EngineResult<Activity> {
        self.get_lead(lead_id).await?;
        self.require_caller(call.caller_id).await?;

        let description = match call.notes.as_deref().map(str::trim) {
            Some(notes) if !notes.is_empty() => notes.to_string(),
            _ => format!("Call logged: {}", outcome_label(call.outcome)),
        };

        let mut entry = NewActivity::new(lead_id, ActivityKind::Call, description).by_caller(call.caller_id);
        entry.outcome = Some(call.outcome);
        entry.duration_seconds = call.duration_seconds;

        self.activities.record(entry).await
    }

    pub async fn lead_activities(&self, lead_id: LeadId) -> EngineResult<Vec<Activity>> {
        self.get_lead(lead_id).await?;
        self.activities.list_for_lead(lead_id).await
    }

    // Duplicates

    /// Group every stored lead, in ascending id order
    pub async fn find_duplicates(&self) -> EngineResult<Vec<DuplicateGroup>> {
        let leads = self.leads.list_leads().await?;
        let groups = find_duplicates(&leads);

        crm_debug!(ServiceId::current(), "🔍 Found {} duplicate groups among {} leads", groups.len(), leads.len());
        Ok(groups)
    }

    /// Merge duplicates into `keep_id`: move their activities, delete them,
    /// and leave a merge entry on the kept lead.
    pub async fn merge_duplicates(&self, keep_id: LeadId, merge_ids: Vec<LeadId>) -> EngineResult<MergeOutcome> {
        if merge_ids.is_empty() {
            return Err(EngineError::invalid_merge("no leads selected to merge"));
        }
        if merge_ids.contains(&keep_id) {
            return Err(EngineError::invalid_merge(format!("lead {keep_id} cannot be merged into itself")));
        }

        let mut merged_ids = Vec::with_capacity(merge_ids.len());
        for lead_id in merge_ids {
            if !merged_ids.contains(&lead_id) {
                merged_ids.push(lead_id);
            }
        }

        self.get_lead(keep_id).await?;
        for lead_id in &merged_ids {
            self.get_lead(*lead_id).await?;
        }

        let activities_reassigned = self.activities.reassign_lead(&merged_ids, keep_id).await?;
        let deleted = self.leads.delete_leads(&merged_ids).await?;

        let listed = merged_ids
            .iter()
            .map(LeadId::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let audit = NewActivity::new(
            keep_id,
            ActivityKind::Merge,
            format!("Merged {} duplicate lead(s): {}", merged_ids.len(), listed),
        );
        self.record_best_effort(audit).await;

        crm_info!(ServiceId::current(), "🧹 Merged leads [{}] into {}", listed, keep_id);
        Ok(MergeOutcome {
            keep_id,
            merged_ids,
            deleted,
            activities_reassigned,
        })
    }

    // Dashboard

    pub async fn pipeline_summary(&self) -> EngineResult<PipelineSummary> {
        let leads = self.leads.list_leads().await?;
        Ok(PipelineSummary::from_leads(&leads))
    }

    // Callers and settings

    pub async fn create_caller(&self, caller: NewCaller) -> EngineResult<Caller> {
        self.callers.create_caller(caller).await
    }

    pub async fn list_callers(&self) -> EngineResult<Vec<Caller>> {
        self.callers.list_callers().await
    }

    /// Activating or deactivating a caller never touches the rotation cursor;
    /// a stale cursor is tolerated by the selector.
    pub async fn set_caller_status(&self, caller_id: CallerId, status: CallerStatus) -> EngineResult<Caller> {
        self.callers.set_status(caller_id, status).await
    }

    pub async fn assignment_settings(&self) -> EngineResult<AssignmentSettings> {
        self.settings.load().await
    }

    pub async fn update_assignment_settings(&self, update: SettingsUpdate) -> EngineResult<AssignmentSettings> {
        let mut settings = self.settings.load().await?;
        if let Some(auto_assign) = update.auto_assign {
            settings.auto_assign = auto_assign;
        }
        if let Some(round_robin) = update.round_robin {
            settings.round_robin = round_robin;
        }
        if update.reset_cursor {
            settings.last_assigned_caller_id = None;
        }

        self.settings.save(settings.clone()).await?;
        crm_info!(
            ServiceId::current(),
            "⚙️ Assignment settings: autoAssign={}, roundRobin={}",
            settings.auto_assign,
            settings.round_robin
        );
        Ok(settings)
    }

    async fn require_caller(&self, caller_id: CallerId) -> EngineResult<Caller> {
        self.callers
            .get_caller(caller_id)
            .await?
            .ok_or(EngineError::CallerNotFound { caller_id })
    }

    async fn record_best_effort(&self, activity: NewActivity) {
        let lead_id = activity.lead_id;
        if let Err(e) = self.activities.record(activity).await {
            crm_warn!(ServiceId::current(), "⚠️ Failed to record activity for lead {}: {}", lead_id, e);
        }
    }
}

fn validate_new_lead(lead: &NewLead) -> EngineResult<()> {
    match lead.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(EngineError::validation("name", "must not be empty")),
    }
}

fn outcome_label(outcome: CallOutcome) -> &'static str {
    match outcome {
        CallOutcome::Connected => "connected",
        CallOutcome::NoAnswer => "no answer",
        CallOutcome::Busy => "busy",
        CallOutcome::CallbackRequested => "callback requested",
        CallOutcome::NotInterested => "not interested",
    }
}
