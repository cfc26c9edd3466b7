//! Receivables API Module
//!
//! Outstanding balances. Collection is reversible: `collect` stamps the
//! payment date, `reopen` clears it.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Receivables router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/receivables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}/collect", post(handler::collect))
        .route("/{id}/reopen", post(handler::reopen))
}
