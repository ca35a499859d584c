//! Liveness and dashboard endpoints

use axum::{extract::State, response::Json};
use chrono::Utc;
use engine::{ActivityStore, CallerDirectory, LeadStore, PipelineSummary, SettingsStore};
use shared::ServiceId;

use crate::error::WebServerResult;
use crate::state::AppState;
use crate::types::{ApiResponse, HealthReport};

/// GET /health
pub async fn health_check<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
) -> Json<ApiResponse<HealthReport>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    Json(ApiResponse::ok(HealthReport {
        service: ServiceId::current().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        server_time: Utc::now().timestamp(),
    }))
}

/// GET /api/dashboard
pub async fn get_dashboard<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
) -> WebServerResult<Json<ApiResponse<PipelineSummary>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let summary = state.service.pipeline_summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}
