//! In-memory caller directory

use std::sync::Arc;
use async_trait::async_trait;
use shared::{crm_debug, Caller, CallerId, CallerStatus, NewCaller, ServiceId};

use crate::core::eligible_callers;
use crate::error::{EngineError, EngineResult};
use crate::state::CrmState;
use crate::traits::CallerDirectory;

/// Caller directory backed by [`CrmState`]
#[derive(Clone)]
pub struct RealCallerDirectory {
    state: Arc<CrmState>,
}

impl RealCallerDirectory {
    pub fn new(state: Arc<CrmState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl CallerDirectory for RealCallerDirectory {
    async fn create_caller(&self, caller: NewCaller) -> EngineResult<Caller> {
        if caller.name.trim().is_empty() {
            return Err(EngineError::validation("name", "must not be empty"));
        }
        if caller.email.trim().is_empty() {
            return Err(EngineError::validation("email", "must not be empty"));
        }

        let mut callers = self.state.callers.write().await;
        if callers.values().any(|existing| existing.email.eq_ignore_ascii_case(&caller.email)) {
            return Err(EngineError::validation("email", "is already registered"));
        }

        let created = Caller {
            id: self.state.allocate_caller_id(),
            name: caller.name,
            email: caller.email,
            role: caller.role,
            status: caller.status,
        };
        callers.insert(created.id, created.clone());

        crm_debug!(ServiceId::current(), "📝 Registered caller {} ({})", created.id, created.name);
        Ok(created)
    }

    async fn get_caller(&self, caller_id: CallerId) -> EngineResult<Option<Caller>> {
        Ok(self.state.callers.read().await.get(&caller_id).cloned())
    }

    async fn list_callers(&self) -> EngineResult<Vec<Caller>> {
        Ok(self.state.callers.read().await.values().cloned().collect())
    }

    async fn active_callers(&self) -> EngineResult<Vec<Caller>> {
        let callers = self.state.callers.read().await;
        Ok(eligible_callers(callers.values()))
    }

    async fn set_status(&self, caller_id: CallerId, status: CallerStatus) -> EngineResult<Caller> {
        let mut callers = self.state.callers.write().await;
        let caller = callers
            .get_mut(&caller_id)
            .ok_or(EngineError::CallerNotFound { caller_id })?;
        caller.status = status;

        crm_debug!(ServiceId::current(), "🔁 Caller {} is now {}", caller_id, status);
        Ok(caller.clone())
    }
}
