//! Main webserver implementation
//!
//! Wires the lead service into an axum router and serves it until the
//! shutdown future resolves.

use std::future::Future;
use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use engine::{ActivityStore, CallerDirectory, LeadService, LeadStore, SettingsStore};
use shared::{crm_info, ServerConfig, ServiceId};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::{callers, dashboard, duplicates, leads, settings};

/// REST server over an injected lead service
pub struct WebServer<C, S, L, A>
where
    C: CallerDirectory,
    S: SettingsStore,
    L: LeadStore,
    A: ActivityStore,
{
    config: ServerConfig,
    state: AppState<C, S, L, A>,
}

impl<C, S, L, A> WebServer<C, S, L, A>
where
    C: CallerDirectory + 'static,
    S: SettingsStore + 'static,
    L: LeadStore + 'static,
    A: ActivityStore + 'static,
{
    pub fn new(config: ServerConfig, service: Arc<LeadService<C, S, L, A>>) -> Self {
        Self {
            config,
            state: AppState::new(service),
        }
    }

    /// Build the axum router with every API route. Unknown paths fall back
    /// to the static client, with `index.html` for client-side routes.
    pub fn build_router(&self) -> Router {
        let static_dir = &self.config.static_dir;
        let client = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

        Router::new()
            // Health check
            .route("/health", get(dashboard::health_check::<C, S, L, A>))
            // Callers
            .route(
                "/api/callers",
                get(callers::list_callers::<C, S, L, A>).post(callers::create_caller::<C, S, L, A>),
            )
            .route("/api/callers/:id/status", put(callers::set_caller_status::<C, S, L, A>))
            // Assignment settings
            .route(
                "/api/settings/assignment",
                get(settings::get_assignment_settings::<C, S, L, A>)
                    .put(settings::update_assignment_settings::<C, S, L, A>),
            )
            // Leads
            .route(
                "/api/leads",
                get(leads::list_leads::<C, S, L, A>).post(leads::create_lead::<C, S, L, A>),
            )
            .route("/api/leads/import", post(leads::import_leads::<C, S, L, A>))
            .route("/api/leads/:id", get(leads::get_lead::<C, S, L, A>))
            .route("/api/leads/:id/stage", put(leads::update_stage::<C, S, L, A>))
            .route("/api/leads/:id/assignee", put(leads::assign_lead::<C, S, L, A>))
            .route("/api/leads/:id/activities", get(leads::lead_activities::<C, S, L, A>))
            .route("/api/leads/:id/calls", post(leads::log_call::<C, S, L, A>))
            // Duplicates
            .route("/api/duplicates", get(duplicates::list_duplicates::<C, S, L, A>))
            .route("/api/duplicates/merge", post(duplicates::merge_duplicates::<C, S, L, A>))
            // Dashboard
            .route("/api/dashboard", get(dashboard::get_dashboard::<C, S, L, A>))
            .fallback_service(client)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.config.bind_address;
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|e| WebServerError::ServerStartupFailed {
                address: address.to_string(),
                message: e.to_string(),
            })?;

        crm_info!(ServiceId::current(), "🌐 CRM API listening on http://{}", address);
        crm_info!(
            ServiceId::current(),
            "📊 Client served from {}",
            self.config.static_dir.display()
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
