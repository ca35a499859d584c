//! Caller directory endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use engine::{ActivityStore, CallerDirectory, LeadStore, SettingsStore};
use shared::{crm_info, Caller, CallerId, NewCaller, ServiceId};

use crate::error::WebServerResult;
use crate::state::AppState;
use crate::types::{ApiResponse, CallerStatusRequest};
use crate::web::extract::{ApiJson, ApiPath};

/// GET /api/callers
pub async fn list_callers<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
) -> WebServerResult<Json<ApiResponse<Vec<Caller>>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let callers = state.service.list_callers().await?;
    Ok(Json(ApiResponse::ok(callers)))
}

/// POST /api/callers
pub async fn create_caller<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiJson(request): ApiJson<NewCaller>,
) -> WebServerResult<(StatusCode, Json<ApiResponse<Caller>>)>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let caller = state.service.create_caller(request).await?;
    crm_info!(ServiceId::current(), "👤 Caller {} registered ({})", caller.id, caller.email);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(caller))))
}

/// PUT /api/callers/:id/status
pub async fn set_caller_status<C, S, L, A>(
    State(state): State<AppState<C, S, L, A>>,
    ApiPath(caller_id): ApiPath<CallerId>,
    ApiJson(request): ApiJson<CallerStatusRequest>,
) -> WebServerResult<Json<ApiResponse<Caller>>>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    let caller = state.service.set_caller_status(caller_id, request.status).await?;
    crm_info!(ServiceId::current(), "👤 Caller {} is now {}", caller.id, caller.status);
    Ok(Json(ApiResponse::ok(caller)))
}
