//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::api::convert::parse_month;
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{DashboardSummary, MonthlyReport, MonthlyTrends};

/// Today's sales, expenses and net cash in the business timezone
pub async fn summary(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<DashboardSummary>>> {
    let today = Utc::now()
        .with_timezone(&state.config.timezone)
        .date_naive();
    let summary = state
        .data
        .dashboard_summary(today)
        .await
        .map_err(AppError::from)?;
    Ok(ok(summary))
}

/// Month-by-month series for one year
pub async fn trends(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
) -> AppResult<Json<AppResponse<MonthlyTrends>>> {
    let trends = state
        .data
        .monthly_trends(year)
        .await
        .map_err(AppError::from)?;
    Ok(ok(trends))
}

/// Totals and net profit for one "YYYY-MM"
pub async fn report(
    State(state): State<ServerState>,
    Path(month): Path<String>,
) -> AppResult<Json<AppResponse<MonthlyReport>>> {
    let month = parse_month(&month)?;
    let report = state
        .data
        .monthly_report(&month)
        .await
        .map_err(AppError::from)?;
    Ok(ok(report))
}
