//! Receivables API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::Receivable;

/// List all receivables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Receivable>>>> {
    let receivables = state.data.receivables().await.map_err(AppError::from)?;
    Ok(ok(receivables))
}

/// Mark a receivable collected, stamped with today's date
pub async fn collect(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<Receivable>>> {
    let today = Utc::now()
        .with_timezone(&state.config.timezone)
        .date_naive();
    let receivable = state
        .data
        .settle_receivable(id, Some(today))
        .await
        .map_err(AppError::from)?;

    tracing::info!(recv_id = id, "Receivable collected");
    Ok(ok(receivable))
}

/// Undo a collection
pub async fn reopen(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<Receivable>>> {
    let receivable = state
        .data
        .settle_receivable(id, None)
        .await
        .map_err(AppError::from)?;

    tracing::info!(recv_id = id, "Receivable collection reverted");
    Ok(ok(receivable))
}
