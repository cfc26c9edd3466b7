//! Server Implementation
//!
//! HTTP server startup, router assembly and graceful shutdown

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::{Config, Result, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config)?,
        };

        let app = build_app(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🔧 Bro Motors server listening on {}", addr);

        let handle = axum_server::Handle::new();
        tokio::spawn(shutdown_signal(
            handle.clone(),
            Duration::from_millis(self.config.shutdown_timeout_ms),
        ));

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Assemble the full application router
pub fn build_app(state: ServerState) -> Router {
    let request_timeout = Duration::from_millis(state.config.request_timeout_ms);

    Router::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::shops::router())
        .merge(crate::api::favorites::router())
        .merge(crate::api::booking::router())
        .merge(crate::api::schedule::router())
        .merge(crate::api::sales::router())
        .merge(crate::api::expenses::router())
        .merge(crate::api::receivables::router())
        .merge(crate::api::payroll::router())
        .merge(crate::api::customers::router())
        .merge(crate::api::dashboard::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Wait for Ctrl-C, then drain connections within the shutdown window
async fn shutdown_signal(handle: axum_server::Handle<std::net::SocketAddr>, grace: Duration) {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
    handle.graceful_shutdown(Some(grace));
}
