//! Customer Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::convert::{parse_date, parse_slot_time};
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::booking::{Actor, Appointment, AppointmentForm, CustomerSlot, MonthGrid};

/// Month grid with past dates inert
pub async fn calendar(
    State(state): State<ServerState>,
    Path((year, month)): Path<(i32, u32)>,
) -> AppResult<Json<AppResponse<MonthGrid>>> {
    let grid = state
        .bookings
        .month_view(year, month, Actor::Customer)
        .map_err(AppError::from)?;
    Ok(ok(grid))
}

/// The 8 slots of a day, vehicle numbers masked
pub async fn day(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<AppResponse<Vec<CustomerSlot>>>> {
    let date = parse_date(&date)?;
    let slots = state
        .bookings
        .customer_day_schedule(date)
        .map_err(AppError::from)?;
    Ok(ok(slots))
}

/// Request an AVAILABLE slot
pub async fn request(
    State(state): State<ServerState>,
    Path((date, time)): Path<(String, String)>,
    Json(form): Json<AppointmentForm>,
) -> AppResult<Json<AppResponse<Appointment>>> {
    let date = parse_date(&date)?;
    let time = parse_slot_time(&time)?;

    let appointment = state
        .bookings
        .request(Actor::Customer, date, time, form)
        .map_err(AppError::from)?;
    Ok(ok(appointment))
}

/// Withdraw a REQUESTED appointment
pub async fn cancel(
    State(state): State<ServerState>,
    Path((date, time)): Path<(String, String)>,
) -> AppResult<Json<AppResponse<Appointment>>> {
    let date = parse_date(&date)?;
    let time = parse_slot_time(&time)?;

    let appointment = state
        .bookings
        .cancel(Actor::Customer, date, time)
        .map_err(AppError::from)?;
    Ok(ok(appointment))
}
