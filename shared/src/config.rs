//! Configuration types
//!
//! Types for configuring the REST server and seeding its stores.

use std::net::SocketAddr;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::{AssignmentSettings, NewCaller, NewLead};

/// Resolved REST server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
    pub log_level: String,
    pub default_settings: AssignmentSettings,
}

impl ServerConfig {
    /// Build a config from raw host/port values
    pub fn from_parts(host: &str, port: u16) -> SharedResult<Self> {
        let bind_address: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|_| SharedError::InvalidConfig {
                field: "bind_address".to_string(),
                value: format!("{host}:{port}"),
            })?;

        Ok(Self {
            bind_address,
            ..Self::default()
        })
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    pub fn with_seed_file(mut self, seed_file: Option<PathBuf>) -> Self {
        self.seed_file = seed_file;
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    pub fn with_default_settings(mut self, settings: AssignmentSettings) -> Self {
        self.default_settings = settings;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            static_dir: PathBuf::from("./static"),
            seed_file: None,
            log_level: "info".to_string(),
            default_settings: AssignmentSettings::default(),
        }
    }
}

/// Initial store contents loaded at startup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub callers: Vec<NewCaller>,
    #[serde(default)]
    pub leads: Vec<NewLead>,
    #[serde(default)]
    pub settings: Option<AssignmentSettings>,
}

impl SeedData {
    /// Parse seed data from JSON text
    pub fn from_json(text: &str) -> SharedResult<Self> {
        serde_json::from_str(text).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }
}
