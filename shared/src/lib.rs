//! Shared types for the real-estate sales CRM
//!
//! Contains the domain records exchanged between the engine and the REST
//! server, the shared error type, configuration and logging setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{SeedData, ServerConfig};
pub use errors::*;
pub use types::*;
