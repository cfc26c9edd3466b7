//! Dashboard API Module
//!
//! Headline figures and trend series, computed from the stored business
//! records at request time.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Dashboard router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dashboard", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/summary", get(handler::summary))
        .route("/trends/{year}", get(handler::trends))
        .route("/report/{month}", get(handler::report))
}
