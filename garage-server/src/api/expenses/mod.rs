//! Expenses API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Expenses router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/expenses", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}
