//! API server construction
//!
//! Builds the axum router over a [`TicketService`] and runs it. The voice
//! agent and the browser front end are cross-origin callers, so CORS is
//! permissive; request tracing rides on the shared tracing subscriber.

use crate::api::handlers;
use crate::config::Config;
use crate::error::Result;
use crate::service::TicketService;
use crate::storage::TicketStore;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// HTTP server for the ticket API
pub struct ApiServer {
    config: Config,
    service: TicketService,
}

impl ApiServer {
    /// Create a server over the given store
    pub fn new(config: Config, store: Arc<dyn TicketStore>) -> Self {
        Self {
            config,
            service: TicketService::new(store),
        }
    }

    /// The assembled router, usable standalone in tests
    #[must_use]
    pub fn router(&self) -> Router {
        router(self.service.clone())
    }

    /// Bind and serve until the process is stopped
    pub async fn serve(&self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(%addr, "help desk API listening");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Assemble the API router over a service
#[must_use]
pub fn router(service: TicketService) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route(
            "/tickets",
            post(handlers::create_ticket).get(handlers::list_tickets),
        )
        .route("/tickets/lookup", post(handlers::lookup_ticket))
        .route("/tickets/update", post(handlers::update_ticket))
        .route("/tickets/update-by-id", post(handlers::update_ticket_by_id))
        .route("/tickets/:id", get(handlers::get_ticket))
        .route("/supported-issues", get(handlers::supported_issues))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
