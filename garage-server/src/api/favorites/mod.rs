//! Favorites API Module
//!
//! The browsing session's bookmarked shops. Persisted independently of
//! authentication; toggle is the only mutator.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Favorites router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/favorites", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{shop_id}/toggle", post(handler::toggle))
}
