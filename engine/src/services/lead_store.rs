//! In-memory lead collection

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use shared::{CallerId, Lead, LeadId, LeadStage, NewLead};

use crate::error::{EngineError, EngineResult};
use crate::state::CrmState;
use crate::traits::LeadStore;

/// Lead store backed by [`CrmState`]
#[derive(Clone)]
pub struct RealLeadStore {
    state: Arc<CrmState>,
}

impl RealLeadStore {
    pub fn new(state: Arc<CrmState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl LeadStore for RealLeadStore {
    async fn insert_lead(&self, lead: NewLead, assigned_to: Option<CallerId>) -> EngineResult<Lead> {
        let now = Utc::now();
        let created = Lead {
            id: self.state.allocate_lead_id(),
            name: lead.name,
            phone: lead.phone,
            email: lead.email,
            city: lead.city,
            stage: LeadStage::New,
            assigned_to,
            source: lead.source,
            notes: lead.notes,
            created_at: now,
            updated_at: now,
        };

        self.state.leads.write().await.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_lead(&self, lead_id: LeadId) -> EngineResult<Option<Lead>> {
        Ok(self.state.leads.read().await.get(&lead_id).cloned())
    }

    async fn list_leads(&self) -> EngineResult<Vec<Lead>> {
        Ok(self.state.leads.read().await.values().cloned().collect())
    }

    async fn update_lead(&self, mut lead: Lead) -> EngineResult<Lead> {
        let mut leads = self.state.leads.write().await;
        let slot = leads
            .get_mut(&lead.id)
            .ok_or(EngineError::LeadNotFound { lead_id: lead.id })?;

        lead.updated_at = Utc::now();
        *slot = lead.clone();
        Ok(lead)
    }

    async fn delete_leads(&self, lead_ids: &[LeadId]) -> EngineResult<usize> {
        let mut leads = self.state.leads.write().await;
        Ok(lead_ids
            .iter()
            .filter(|lead_id| leads.remove(lead_id).is_some())
            .count())
    }
}
