//! Customers API Module
//!
//! Customer registry plus the per-vehicle maintenance history the
//! customer portal shows.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Customers router
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/customers", routes())
        .route("/api/maintenance", get(handler::maintenance_history))
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}
