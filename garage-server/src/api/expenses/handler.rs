//! Expenses API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::convert::parse_month;
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{Expense, ExpenseCreate};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// "YYYY-MM" filter
    pub month: Option<String>,
}

/// List expenses, optionally restricted to one month
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<AppResponse<Vec<Expense>>>> {
    let mut expenses = state.data.expenses().await.map_err(AppError::from)?;

    if let Some(month) = query.month {
        let month = parse_month(&month)?;
        expenses.retain(|e| e.expense_date.format("%Y-%m").to_string() == month);
    }

    Ok(ok(expenses))
}

/// Record an expense
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCreate>,
) -> AppResult<Json<AppResponse<Expense>>> {
    let expense = state
        .data
        .record_expense(payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        expense_id = expense.expense_id,
        amount = expense.amount,
        "Expense recorded"
    );
    Ok(ok(expense))
}
