//! Test fixtures and data for engine tests

use chrono::Utc;
use shared::{CallerStatus, Lead, LeadId, LeadStage, NewCaller, NewLead, Role};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const SHARED_PHONE: &'static str = "+91 98765 43210";

    /// Three active callers, A then B then C
    pub fn callers() -> Vec<NewCaller> {
        ["Asha", "Bilal", "Chitra"]
            .iter()
            .map(|name| Self::caller(name))
            .collect()
    }

    pub fn caller(name: &str) -> NewCaller {
        NewCaller {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: Role::Caller,
            status: CallerStatus::Active,
        }
    }

    pub fn admin(name: &str) -> NewCaller {
        NewCaller {
            role: Role::Admin,
            ..Self::caller(name)
        }
    }

    pub fn new_lead(name: &str, phone: &str, city: &str) -> NewLead {
        NewLead {
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            city: Some(city.to_string()),
            source: Some("website".to_string()),
            ..NewLead::default()
        }
    }

    /// Stored lead record for pure grouping tests
    pub fn lead(id: u64, name: &str, phone: &str, city: &str) -> Lead {
        let now = Utc::now();
        Lead {
            id: LeadId(id),
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            email: None,
            city: Some(city.to_string()),
            stage: LeadStage::New,
            assigned_to: None,
            source: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The worked example: 1 and 2 share a phone, 3 matches 1 by name and city
    pub fn worked_example() -> Vec<Lead> {
        vec![
            Self::lead(1, "Ann", "555", "NYC"),
            Self::lead(2, "Bob", "555", "LA"),
            Self::lead(3, "ann", "999", "nyc"),
        ]
    }
}
