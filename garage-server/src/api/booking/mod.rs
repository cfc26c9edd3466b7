//! Customer Booking API Module
//!
//! Customer-facing side of the booking engine. Past dates are inert,
//! vehicle numbers are masked in the day view, and a customer may only
//! cancel an appointment that is still REQUESTED.
//!
//! | Path | Method | Transition |
//! |------|--------|------------|
//! | /api/booking/calendar/{year}/{month} | GET | - |
//! | /api/booking/day/{date} | GET | - |
//! | /api/booking/day/{date}/{time} | POST | AVAILABLE → REQUESTED |
//! | /api/booking/day/{date}/{time} | DELETE | REQUESTED → AVAILABLE |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Customer booking router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/booking", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/calendar/{year}/{month}", get(handler::calendar))
        .route("/day/{date}", get(handler::day))
        .route(
            "/day/{date}/{time}",
            post(handler::request).delete(handler::cancel),
        )
}
