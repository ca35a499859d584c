//! Test helper utilities for webserver API tests

use std::sync::Arc;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use engine::{CrmState, InMemoryLeadService};
use serde_json::Value;
use shared::{AssignmentSettings, ServerConfig};
use tower::ServiceExt;
use webserver::WebServer;

/// Router over fresh in-memory stores
pub fn test_router(settings: AssignmentSettings) -> Router {
    test_router_with_static(settings, std::env::temp_dir().join("crm-test-no-client"))
}

pub fn test_router_with_static(settings: AssignmentSettings, static_dir: std::path::PathBuf) -> Router {
    let state = Arc::new(CrmState::new(settings));
    let service = Arc::new(InMemoryLeadService::in_memory(state));
    let config = ServerConfig::default().with_static_dir(static_dir);
    WebServer::new(config, service).build_router()
}

/// Send one request and decode the JSON body
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn put(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::PUT, uri, Some(body)).await
}
