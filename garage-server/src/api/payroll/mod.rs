//! Payroll API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Payroll router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payroll", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/employees", get(handler::employees))
}
