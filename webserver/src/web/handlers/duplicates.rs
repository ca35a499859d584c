//! Duplicate review endpoints

use axum::{extract::State, response::Json};
use engine::{
    ActivityStore, CallerDirectory, DuplicateGroup, LeadStore, MergeOutcome, SettingsStore,
};

use crate::error::WebServerResult;
use crate::state::AppState;
use crate::types::{ApiResponse, MergeRequest};
use crate::web::extract::ApiJson;

/// GET /api/duplicates
pub async fn list_duplicates<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
) -> WebServerResult<Json<ApiResponse<Vec<DuplicateGroup>>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let groups = state.service.find_duplicates().await?;
    Ok(Json(ApiResponse::ok(groups)))
}

/// POST /api/duplicates/merge
pub async fn merge_duplicates<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiJson(request): ApiJson<MergeRequest>,
) -> WebServerResult<Json<ApiResponse<MergeOutcome>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let outcome = state
        .service
        .merge_duplicates(request.keep_id, request.merge_ids)
        .await?;
    Ok(Json(ApiResponse::ok(outcome)))
}
