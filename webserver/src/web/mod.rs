//! HTTP layer: request extractors and route handlers grouped by resource

pub mod extract;
pub mod handlers;
