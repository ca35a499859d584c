//! Assignment settings endpoints

use axum::{extract::State, response::Json};
use engine::{ActivityStore, CallerDirectory, LeadStore, SettingsStore, SettingsUpdate};
use shared::AssignmentSettings;

use crate::error::WebServerResult;
use crate::state::AppState;
use crate::types::ApiResponse;
use crate::web::extract::ApiJson;

/// GET /api/settings/assignment
pub async fn get_assignment_settings<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
) -> WebServerResult<Json<ApiResponse<AssignmentSettings>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let settings = state.service.assignment_settings().await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// PUT /api/settings/assignment
pub async fn update_assignment_settings<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiJson(update): ApiJson<SettingsUpdate>,
) -> WebServerResult<Json<ApiResponse<AssignmentSettings>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let settings = state.service.update_assignment_settings(update).await?;
    Ok(Json(ApiResponse::ok(settings)))
}
