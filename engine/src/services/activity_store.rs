//! In-memory activity and call log

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use shared::{Activity, ActivityId, LeadId, NewActivity};

use crate::error::EngineResult;
use crate::state::CrmState;
use crate::traits::ActivityStore;

/// Activity store backed by [`CrmState`]
#[derive(Clone)]
pub struct RealActivityStore {
    state: Arc<CrmState>,
}

impl RealActivityStore {
    pub fn new(state: Arc<CrmState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl ActivityStore for RealActivityStore {
    async fn record(&self, activity: NewActivity) -> EngineResult<Activity> {
        let entry = Activity {
            id: ActivityId::new(),
            lead_id: activity.lead_id,
            caller_id: activity.caller_id,
            kind: activity.kind,
            description: activity.description,
            outcome: activity.outcome,
            duration_seconds: activity.duration_seconds,
            created_at: Utc::now(),
        };

        self.state
            .activities
            .write()
            .await
            .entry(entry.lead_id)
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    async fn list_for_lead(&self, lead_id: LeadId) -> EngineResult<Vec<Activity>> {
        Ok(self
            .state
            .activities
            .read()
            .await
            .get(&lead_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn reassign_lead(&self, from: &[LeadId], to: LeadId) -> EngineResult<usize> {
        let mut activities = self.state.activities.write().await;
        let mut moved = Vec::new();

        for lead_id in from.iter().filter(|lead_id| **lead_id != to) {
            if let Some(entries) = activities.remove(lead_id) {
                moved.extend(entries);
            }
        }

        let count = moved.len();
        if count > 0 {
            for entry in &mut moved {
                entry.lead_id = to;
            }
            let target = activities.entry(to).or_default();
            target.extend(moved);
            target.sort_by_key(|entry| entry.created_at);
        }

        Ok(count)
    }
}
