//! Test helpers and builder patterns for engine tests

use std::sync::Arc;
use engine::{CrmState, InMemoryLeadService};
use shared::{AssignmentSettings, Caller, CallerId, NewCaller};

use super::fixtures::TestFixtures;

/// Builder for an in-memory lead service with seeded callers
pub struct ServiceBuilder {
    settings: AssignmentSettings,
    callers: Vec<NewCaller>,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self {
            settings: AssignmentSettings::default(),
            callers: TestFixtures::callers(),
        }
    }

    pub fn with_settings(mut self, auto_assign: bool, round_robin: bool) -> Self {
        self.settings.auto_assign = auto_assign;
        self.settings.round_robin = round_robin;
        self
    }

    pub fn with_cursor(mut self, cursor: Option<CallerId>) -> Self {
        self.settings.last_assigned_caller_id = cursor;
        self
    }

    pub fn with_callers(mut self, callers: Vec<NewCaller>) -> Self {
        self.callers = callers;
        self
    }

    /// Build the service and return it with the registered callers
    pub async fn build(self) -> (InMemoryLeadService, Vec<Caller>) {
        let state = Arc::new(CrmState::new(self.settings));
        let service = InMemoryLeadService::in_memory(state);

        let mut created = Vec::new();
        for caller in self.callers {
            created.push(service.create_caller(caller).await.unwrap());
        }
        (service, created)
    }
}

/// Assertion helpers
pub struct TestHelpers;

impl TestHelpers {
    /// Create `count` distinct leads and return who each went to
    pub async fn assign_many(service: &InMemoryLeadService, count: usize) -> Vec<Option<CallerId>> {
        let mut assignees = Vec::with_capacity(count);
        for i in 0..count {
            let created = service
                .create_lead(TestFixtures::new_lead(&format!("Lead {i}"), &format!("9000{i}"), "Pune"))
                .await
                .unwrap();
            assignees.push(created.assignment.map(|a| a.caller_id));
        }
        assignees
    }

    pub async fn cursor(service: &InMemoryLeadService) -> Option<CallerId> {
        service.assignment_settings().await.unwrap().last_assigned_caller_id
    }
}
