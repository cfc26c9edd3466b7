//! Sales API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::convert::parse_month;
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{Sale, SaleCreate};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// "YYYY-MM" filter
    pub month: Option<String>,
}

/// List sales, optionally restricted to one month
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<AppResponse<Vec<Sale>>>> {
    let mut sales = state.data.sales().await.map_err(AppError::from)?;

    if let Some(month) = query.month {
        let month = parse_month(&month)?;
        sales.retain(|s| s.sale_date.format("%Y-%m").to_string() == month);
    }

    Ok(ok(sales))
}

/// Record a sale
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<AppResponse<Sale>>> {
    let sale = state
        .data
        .record_sale(payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(sale_id = sale.sale_id, amount = sale.amount, "Sale recorded");
    Ok(ok(sale))
}
