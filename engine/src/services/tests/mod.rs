//! Service-specific tests
//!
//! Each in-memory store has its own test file; shared helpers live in `common`.

mod caller_directory;
mod lead_store;

// Common test utilities for services
pub mod common {
    use std::sync::Arc;
    use shared::{CallerStatus, NewCaller, NewLead, Role};

    use crate::state::CrmState;

    /// Fresh empty state
    pub fn test_state() -> Arc<CrmState> {
        Arc::new(CrmState::default())
    }

    pub fn new_caller(name: &str) -> NewCaller {
        NewCaller {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: Role::Caller,
            status: CallerStatus::Active,
        }
    }

    pub fn new_lead(name: &str, phone: &str, city: &str) -> NewLead {
        NewLead {
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            city: Some(city.to_string()),
            ..NewLead::default()
        }
    }
}
