//! In-memory assignment settings document

use std::sync::Arc;
use async_trait::async_trait;
use shared::AssignmentSettings;

use crate::error::EngineResult;
use crate::state::CrmState;
use crate::traits::SettingsStore;

/// Settings store backed by [`CrmState`]
#[derive(Clone)]
pub struct RealSettingsStore {
    state: Arc<CrmState>,
}

impl RealSettingsStore {
    pub fn new(state: Arc<CrmState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl SettingsStore for RealSettingsStore {
    async fn load(&self) -> EngineResult<AssignmentSettings> {
        Ok(self.state.settings.read().await.clone())
    }

    async fn save(&self, settings: AssignmentSettings) -> EngineResult<()> {
        *self.state.settings.write().await = settings;
        Ok(())
    }
}
