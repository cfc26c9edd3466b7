//! Health check handlers

use axum::{Json, extract::State};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// Simple health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    version: &'static str,
    environment: String,
    /// Business timezone
    timezone: String,
}

/// Detailed health check response
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// Uptime in seconds
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    booking_storage: CheckResult,
    session_storage: CheckResult,
}

/// Single check result
#[derive(Serialize)]
pub struct CheckResult {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    appointments: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok() -> Self {
        Self {
            status: "ok",
            appointments: None,
            message: None,
        }
    }

    fn ok_with_appointments(appointments: u64) -> Self {
        Self {
            status: "ok",
            appointments: Some(appointments),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            appointments: None,
            message: Some(message.into()),
        }
    }
}

// Server start time (lazy static)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Basic health check
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        timezone: state.config.timezone.to_string(),
    })
}

/// Detailed health check with per-store status
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let booking_check = match state.bookings.storage().appointment_count() {
        Ok(count) => CheckResult::ok_with_appointments(count),
        Err(e) => CheckResult::error(format!("Booking storage error: {}", e)),
    };

    let session_check = match state.session.current_user() {
        Ok(_) => CheckResult::ok(),
        Err(e) => CheckResult::error(format!("Session storage error: {}", e)),
    };

    let all_ok = booking_check.status == "ok" && session_check.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        checks: HealthChecks {
            booking_storage: booking_check,
            session_storage: session_check,
        },
    })
}
