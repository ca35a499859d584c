//! In-memory document state
//!
//! Backing storage shared by the in-memory store services. Collections are
//! keyed by id in `BTreeMap`s so iteration order is ascending id order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use shared::{Activity, AssignmentSettings, Caller, CallerId, Lead, LeadId};

/// Shared CRM state
#[derive(Debug)]
pub struct CrmState {
    pub callers: Arc<RwLock<BTreeMap<CallerId, Caller>>>,
    pub leads: Arc<RwLock<BTreeMap<LeadId, Lead>>>,
    pub activities: Arc<RwLock<BTreeMap<LeadId, Vec<Activity>>>>,
    pub settings: Arc<RwLock<AssignmentSettings>>,

    next_caller_id: AtomicU64,
    next_lead_id: AtomicU64,
}

impl CrmState {
    /// Create empty state with the given settings document
    pub fn new(settings: AssignmentSettings) -> Self {
        Self {
            callers: Arc::new(RwLock::new(BTreeMap::new())),
            leads: Arc::new(RwLock::new(BTreeMap::new())),
            activities: Arc::new(RwLock::new(BTreeMap::new())),
            settings: Arc::new(RwLock::new(settings)),
            next_caller_id: AtomicU64::new(1),
            next_lead_id: AtomicU64::new(1),
        }
    }

    /// Allocate the next caller id
    pub fn allocate_caller_id(&self) -> CallerId {
        CallerId(self.next_caller_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Allocate the next lead id
    pub fn allocate_lead_id(&self) -> LeadId {
        LeadId(self.next_lead_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Total number of activity entries across all leads
    pub async fn activity_count(&self) -> usize {
        self.activities.read().await.values().map(Vec::len).sum()
    }
}

impl Default for CrmState {
    fn default() -> Self {
        Self::new(AssignmentSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_creation() {
        let state = CrmState::default();

        assert!(state.callers.read().await.is_empty());
        assert!(state.leads.read().await.is_empty());
        assert_eq!(state.activity_count().await, 0);
        assert!(state.settings.read().await.auto_assign);
    }

    #[test]
    fn test_ids_are_increasing() {
        let state = CrmState::default();

        let first = state.allocate_lead_id();
        let second = state.allocate_lead_id();
        assert!(second > first);
        assert_eq!(first, LeadId(1));

        assert_eq!(state.allocate_caller_id(), CallerId(1));
        assert_eq!(state.allocate_caller_id(), CallerId(2));
    }
}
