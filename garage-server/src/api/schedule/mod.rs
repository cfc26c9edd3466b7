//! Staff Schedule API Module
//!
//! Shop-facing side of the booking engine: no past-date restriction,
//! unmasked appointment details, confirm and cancel transitions.
//!
//! | Path | Method | Transition |
//! |------|--------|------------|
//! | /api/schedule/calendar/{year}/{month} | GET | - |
//! | /api/schedule/day/{date} | GET | - |
//! | /api/schedule/day/{date}/{time}/confirm | POST | REQUESTED → CONFIRMED |
//! | /api/schedule/day/{date}/{time} | DELETE | REQUESTED/CONFIRMED → AVAILABLE |

mod handler;

use axum::{Router, routing::delete, routing::get, routing::post};

use crate::core::ServerState;

/// Staff schedule router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/schedule", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/calendar/{year}/{month}", get(handler::calendar))
        .route("/day/{date}", get(handler::day))
        .route("/day/{date}/{time}/confirm", post(handler::confirm))
        .route("/day/{date}/{time}", delete(handler::cancel))
}
