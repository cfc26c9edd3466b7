//! Sales API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Sales router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sales", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}
