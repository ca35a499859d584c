//! Request extractors whose rejections use the API error envelope

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::WebServerError;

/// JSON body; a malformed body becomes a 400 `WebServerError::InvalidRequest`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WebServerError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; an unparsable id becomes a 400 `WebServerError::InvalidRequest`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(WebServerError))]
pub struct ApiPath<T>(pub T);
