//! Health check routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /health | GET | Simple liveness check |
//! | /health/detailed | GET | Storage checks + uptime |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Health router - public routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(handler::health))
        .route("/health/detailed", get(handler::detailed_health))
}
