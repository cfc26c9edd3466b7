//! Staff Schedule API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::convert::{parse_date, parse_slot_time};
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::booking::{Actor, Appointment, MonthGrid, TimeSlot};

/// Month grid; staff may inspect past dates
pub async fn calendar(
    State(state): State<ServerState>,
    Path((year, month)): Path<(i32, u32)>,
) -> AppResult<Json<AppResponse<MonthGrid>>> {
    let grid = state
        .bookings
        .month_view(year, month, Actor::Staff)
        .map_err(AppError::from)?;
    Ok(ok(grid))
}

/// The 8 slots of a day with full appointment details (unmasked)
pub async fn day(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<AppResponse<Vec<TimeSlot>>>> {
    let date = parse_date(&date)?;
    let slots = state.bookings.day_schedule(date).map_err(AppError::from)?;
    Ok(ok(slots))
}

/// Accept a REQUESTED appointment
pub async fn confirm(
    State(state): State<ServerState>,
    Path((date, time)): Path<(String, String)>,
) -> AppResult<Json<AppResponse<Appointment>>> {
    let date = parse_date(&date)?;
    let time = parse_slot_time(&time)?;

    let appointment = state
        .bookings
        .confirm(Actor::Staff, date, time)
        .map_err(AppError::from)?;
    Ok(ok(appointment))
}

/// Cancel an appointment in either active state
pub async fn cancel(
    State(state): State<ServerState>,
    Path((date, time)): Path<(String, String)>,
) -> AppResult<Json<AppResponse<Appointment>>> {
    let date = parse_date(&date)?;
    let time = parse_slot_time(&time)?;

    let appointment = state
        .bookings
        .cancel(Actor::Staff, date, time)
        .map_err(AppError::from)?;
    Ok(ok(appointment))
}
