//! Shop Catalog API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Shop router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/shops", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/regions", get(handler::regions))
        .route("/{id}", get(handler::get_by_id))
}
