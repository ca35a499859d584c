//! Pipeline summary for the dashboard

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use shared::{CallerId, Lead, LeadStage};

/// Lead counts by stage and by assignee
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub total_leads: usize,
    pub unassigned: usize,
    pub by_stage: BTreeMap<LeadStage, usize>,
    pub by_caller: BTreeMap<CallerId, usize>,
}

impl PipelineSummary {
    /// Count leads. Every stage is present in `by_stage`, even at zero.
    pub fn from_leads(leads: &[Lead]) -> Self {
        let mut by_stage: BTreeMap<LeadStage, usize> =
            LeadStage::ALL.iter().map(|stage| (*stage, 0)).collect();
        let mut by_caller = BTreeMap::new();
        let mut unassigned = 0;

        for lead in leads {
            *by_stage.entry(lead.stage).or_insert(0) += 1;
            match lead.assigned_to {
                Some(caller_id) => *by_caller.entry(caller_id).or_insert(0) += 1,
                None => unassigned += 1,
            }
        }

        Self {
            total_leads: leads.len(),
            unassigned,
            by_stage,
            by_caller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::LeadId;

    fn lead(id: u64, stage: LeadStage, assigned_to: Option<u64>) -> Lead {
        Lead {
            id: LeadId(id),
            name: Some(format!("Lead {id}")),
            phone: None,
            email: None,
            city: None,
            stage,
            assigned_to: assigned_to.map(CallerId),
            source: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let leads = vec![
            lead(1, LeadStage::New, None),
            lead(2, LeadStage::Won, Some(1)),
            lead(3, LeadStage::Won, Some(2)),
            lead(4, LeadStage::Contacted, Some(1)),
        ];

        let summary = PipelineSummary::from_leads(&leads);
        assert_eq!(summary.total_leads, 4);
        assert_eq!(summary.unassigned, 1);
        assert_eq!(summary.by_stage[&LeadStage::Won], 2);
        assert_eq!(summary.by_caller[&CallerId(1)], 2);
        assert_eq!(summary.by_stage[&LeadStage::Negotiation], 0);
    }

    #[test]
    fn test_empty_summary_lists_all_stages() {
        let summary = PipelineSummary::from_leads(&[]);
        assert_eq!(summary.by_stage.len(), LeadStage::ALL.len());
        assert!(summary.by_caller.is_empty());
    }
}
