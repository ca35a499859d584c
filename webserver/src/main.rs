//! CRM REST server entry point
//!
//! Configuration comes from command line flags with `CRM_*` environment
//! fallbacks; a `.env` file in the working directory is loaded first.

use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;
use engine::{services, CrmState, InMemoryLeadService};
use shared::{crm_info, logging, AssignmentSettings, ServerConfig, ServiceId};
use tokio::signal;

use webserver::{WebServer, WebServerResult};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "crm-server")]
#[command(about = "Real-estate CRM REST API and client host")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, env = "CRM_PORT", default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "CRM_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Directory holding the built web client
    #[arg(long, env = "CRM_STATIC_DIR", default_value = "./static")]
    static_dir: PathBuf,

    /// JSON seed file with callers, leads and settings
    #[arg(long, env = "CRM_SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CRM_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Auto-assign new leads
    #[arg(long, env = "CRM_AUTO_ASSIGN", default_value_t = true, action = clap::ArgAction::Set)]
    auto_assign: bool,

    /// Rotate assignments across callers instead of always using the first
    #[arg(long, env = "CRM_ROUND_ROBIN", default_value_t = true, action = clap::ArgAction::Set)]
    round_robin: bool,
}

impl Args {
    fn into_config(self) -> WebServerResult<ServerConfig> {
        let config = ServerConfig::from_parts(&self.bind, self.port)?
            .with_static_dir(self.static_dir)
            .with_seed_file(self.seed_file)
            .with_log_level(self.log_level)
            .with_default_settings(AssignmentSettings {
                auto_assign: self.auto_assign,
                round_robin: self.round_robin,
                last_assigned_caller_id: None,
            });
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenv::dotenv().ok();
    let config = Args::parse().into_config()?;

    // Initialize service ID singleton for the webserver
    ServiceId::init_webserver();
    logging::init_tracing(ServiceId::current(), Some(&config.log_level));
    logging::log_startup(ServiceId::current(), "CRM server");

    let state = Arc::new(CrmState::new(config.default_settings.clone()));
    let service = Arc::new(InMemoryLeadService::in_memory(state));

    if let Some(seed_file) = &config.seed_file {
        let seed = services::load_seed_file(seed_file).await?;
        let summary =
            services::apply_seed(seed, service.callers(), service.settings(), service.leads()).await?;
        crm_info!(
            ServiceId::current(),
            "🌱 Loaded seed {} (settings replaced: {})",
            seed_file.display(),
            summary.settings_replaced
        );
    }

    let server = WebServer::new(config, service);
    server.run(shutdown_signal()).await?;

    logging::log_success(ServiceId::current(), "CRM server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ServiceId::current(), "Received Ctrl+C signal"),
        Err(err) => logging::log_error(ServiceId::current(), "Signal handling", &err),
    }
}
