//! WebServer-specific error types

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use engine::EngineError;
use serde_json::json;
use shared::{crm_error, SharedError, ServiceId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}: {message}")]
    ServerStartupFailed { address: String, message: String },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest {
            details: details.into(),
        }
    }

    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Engine(engine) => match engine {
                EngineError::LeadNotFound { .. } | EngineError::CallerNotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                EngineError::ValidationError { .. }
                | EngineError::InvalidMerge { .. }
                | EngineError::CallerUnavailable { .. } => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for WebServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl From<PathRejection> for WebServerError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            crm_error!(ServiceId::current(), "❌ Request failed: {}", self);
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CallerId, LeadId};

    #[test]
    fn test_engine_errors_map_to_status_codes() {
        let missing: WebServerError = EngineError::LeadNotFound { lead_id: LeadId(4) }.into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let unavailable: WebServerError = EngineError::CallerUnavailable { caller_id: CallerId(2) }.into();
        assert_eq!(unavailable.status_code(), StatusCode::BAD_REQUEST);

        let invalid: WebServerError = EngineError::validation("name", "must not be empty").into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let store: WebServerError = EngineError::store("list_leads", "offline").into();
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_status() {
        let response = WebServerError::invalid_request("empty batch").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
