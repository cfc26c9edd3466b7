//! Auth API Module
//!
//! Mock provider login: no OAuth handshake happens, the session just
//! records which provider button was pressed. The session user persists
//! across restarts until logout.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Auth router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::me))
}
