//! Shared logging utilities for consistent tracing across the CRM binaries

use crate::types::ServiceId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the `EnvFilter` directive string for a service
pub fn filter_directives(service: &ServiceId, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");

    match service {
        ServiceId::WebServer => {
            format!("webserver={base_level},engine={base_level},shared={base_level},tower_http={base_level},axum=warn")
        }
        ServiceId::Cli => format!("crm_dedupe={base_level},engine={base_level},shared={base_level}"),
        ServiceId::Test => format!("{base_level}"),
    }
}

/// Initialize tracing subscriber for the given service and log level
///
/// `RUST_LOG` overrides the computed directives when set.
pub fn init_tracing(service: &ServiceId, log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(service, log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-aware info logging
#[macro_export]
macro_rules! crm_info {
    ($service:expr, $($arg:tt)*) => {
        tracing::info!(
            service = %$service,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware warning logging
#[macro_export]
macro_rules! crm_warn {
    ($service:expr, $($arg:tt)*) => {
        tracing::warn!(
            service = %$service,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware error logging
#[macro_export]
macro_rules! crm_error {
    ($service:expr, $($arg:tt)*) => {
        tracing::error!(
            service = %$service,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware debug logging
#[macro_export]
macro_rules! crm_debug {
    ($service:expr, $($arg:tt)*) => {
        tracing::debug!(
            service = %$service,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(service: &ServiceId, details: &str) {
    info!(
        service = %service,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service: &ServiceId, reason: &str) {
    info!(
        service = %service,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service: &ServiceId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = %service,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service: &ServiceId, message: &str) {
    info!(
        service = %service,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_id_display() {
        assert_eq!(ServiceId::WebServer.to_string(), "webserver");
        assert_eq!(ServiceId::Cli.to_string(), "crm-dedupe");
        assert_eq!(ServiceId::Test.to_string(), "test");
    }

    #[test]
    fn test_filter_directives_use_level() {
        let directives = filter_directives(&ServiceId::WebServer, Some("debug"));
        assert!(directives.contains("webserver=debug"));
        assert!(directives.contains("engine=debug"));

        let defaults = filter_directives(&ServiceId::Cli, None);
        assert!(defaults.contains("engine=info"));
    }

    #[test]
    fn test_format_timestamp_shape() {
        let stamp = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(stamp.len(), 12);
        assert_eq!(&stamp[2..3], ":");
    }
}
