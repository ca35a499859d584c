//! CRM REST server
//!
//! Exposes the lead service over a JSON API and serves the single-page
//! client from a static directory.

pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use types::*;
pub use webserver_impl::WebServer;
