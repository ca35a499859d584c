//! Seed file loading
//!
//! Reads a JSON [`SeedData`] document at startup and writes it into the
//! stores. Seeded leads are inserted as-is and never auto-assigned.

use std::path::Path;
use shared::{crm_info, SeedData, ServiceId};
use tokio::fs;

use crate::error::{EngineError, EngineResult};
use crate::traits::{CallerDirectory, LeadStore, SettingsStore};

/// What a seed run inserted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub callers: usize,
    pub leads: usize,
    pub settings_replaced: bool,
}

/// Read and parse a seed file
pub async fn load_seed_file(path: &Path) -> EngineResult<SeedData> {
    let text = fs::read_to_string(path).await.map_err(|e| EngineError::SeedError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    SeedData::from_json(&text).map_err(|e| EngineError::SeedError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Insert seed contents, callers first so their ids follow file order
pub async fn apply_seed<C, S, L>(
    seed: SeedData,
    callers: &C,
    settings: &S,
    leads: &L,
) -> EngineResult<SeedSummary>
where
    C: CallerDirectory + ?Sized,
    S: SettingsStore + ?Sized,
    L: LeadStore + ?Sized,
{
    let mut summary = SeedSummary::default();

    for caller in seed.callers {
        callers.create_caller(caller).await?;
        summary.callers += 1;
    }

    for lead in seed.leads {
        leads.insert_lead(lead, None).await?;
        summary.leads += 1;
    }

    if let Some(seeded_settings) = seed.settings {
        settings.save(seeded_settings).await?;
        summary.settings_replaced = true;
    }

    crm_info!(
        ServiceId::current(),
        "🌱 Seeded {} callers and {} leads",
        summary.callers,
        summary.leads
    );
    Ok(summary)
}
