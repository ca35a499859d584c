//! Duplicate lead detection
//!
//! Single order-dependent pass over the lead list. Each lead joins at most
//! one group, and the earliest lead of a group is the one kept on merge.

use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use shared::{Lead, LeadId};

/// Which rule matched a pair of leads, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    Phone,
    Email,
    NameAndCity,
}

/// Human-readable label for a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuplicateReason {
    #[serde(rename = "Same phone number")]
    SamePhone,
    #[serde(rename = "Same name and city")]
    SameNameAndCity,
}

impl fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateReason::SamePhone => write!(f, "Same phone number"),
            DuplicateReason::SameNameAndCity => write!(f, "Same name and city"),
        }
    }
}

/// Leads believed to describe the same contact. `leads[0]` is the keep candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    pub leads: Vec<Lead>,
    pub reason: DuplicateReason,
}

impl DuplicateGroup {
    pub fn keep(&self) -> &Lead {
        &self.leads[0]
    }

    pub fn to_merge(&self) -> &[Lead] {
        &self.leads[1..]
    }

    pub fn lead_ids(&self) -> Vec<LeadId> {
        self.leads.iter().map(|lead| lead.id).collect()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn phones_match(a: &Lead, b: &Lead) -> bool {
    matches!((present(&a.phone), present(&b.phone)), (Some(x), Some(y)) if x == y)
}

fn emails_match(a: &Lead, b: &Lead) -> bool {
    matches!((present(&a.email), present(&b.email)), (Some(x), Some(y)) if x == y)
}

fn same_ignoring_case(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((present(a), present(b)), (Some(x), Some(y)) if x.to_lowercase() == y.to_lowercase())
}

/// Test one pair against the rules in priority order; first hit wins.
/// Absent or empty fields never match.
pub fn matching_rule(a: &Lead, b: &Lead) -> Option<MatchRule> {
    if phones_match(a, b) {
        Some(MatchRule::Phone)
    } else if emails_match(a, b) {
        Some(MatchRule::Email)
    } else if same_ignoring_case(&a.name, &b.name) && same_ignoring_case(&a.city, &b.city) {
        Some(MatchRule::NameAndCity)
    } else {
        None
    }
}

/// Label a group from its first two members only.
/// Email-matched groups therefore read "Same name and city".
fn infer_reason(first: &Lead, second: &Lead) -> DuplicateReason {
    if phones_match(first, second) {
        DuplicateReason::SamePhone
    } else {
        DuplicateReason::SameNameAndCity
    }
}

/// Partition `leads` into duplicate groups. Singletons are omitted.
pub fn find_duplicates(leads: &[Lead]) -> Vec<DuplicateGroup> {
    let mut processed: HashSet<LeadId> = HashSet::new();
    let mut groups = Vec::new();

    for (i, candidate) in leads.iter().enumerate() {
        if processed.contains(&candidate.id) {
            continue;
        }

        let mut matches = Vec::new();
        for other in &leads[i + 1..] {
            if processed.contains(&other.id) {
                continue;
            }
            if let Some(rule) = matching_rule(candidate, other) {
                tracing::trace!(keep = %candidate.id, duplicate = %other.id, ?rule, "lead pair matched");
                matches.push(other.clone());
                processed.insert(other.id);
            }
        }

        if matches.is_empty() {
            continue;
        }

        matches.insert(0, candidate.clone());
        processed.insert(candidate.id);
        let reason = infer_reason(&matches[0], &matches[1]);
        groups.push(DuplicateGroup { leads: matches, reason });
    }

    groups
}
