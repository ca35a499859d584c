//! Webserver state shared by every request handler

use std::sync::Arc;
use std::time::Instant;
use engine::{ActivityStore, CallerDirectory, LeadService, LeadStore, SettingsStore};

/// Router state: the lead service plus server bookkeeping
pub struct AppState<C, S, L, A>
where
    C: CallerDirectory,
    S: SettingsStore,
    L: LeadStore,
    A: ActivityStore,
{
    pub service: Arc<LeadService<C, S, L, A>>,
    pub started_at: Instant,
}

impl<C, S, L, A> AppState<C, S, L, A>
where
    C: CallerDirectory,
    S: SettingsStore,
    L: LeadStore,
    A: ActivityStore,
{
    pub fn new(service: Arc<LeadService<C, S, L, A>>) -> Self {
        Self {
            service,
            started_at: Instant::now(),
        }
    }

    /// Server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

// Manual impl: the store types themselves need not be Clone
impl<C, S, L, A> Clone for AppState<C, S, L, A>
where
    C: CallerDirectory,
    S: SettingsStore,
    L: LeadStore,
    A: ActivityStore,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            started_at: self.started_at,
        }
    }
}
