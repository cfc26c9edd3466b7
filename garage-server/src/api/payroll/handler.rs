//! Payroll API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::convert::parse_month;
use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{Employee, Payroll};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// "YYYY-MM" pay month filter
    pub month: Option<String>,
}

/// List payroll records, optionally for one pay month
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<AppResponse<Vec<Payroll>>>> {
    let mut payrolls = state.data.payrolls().await.map_err(AppError::from)?;

    if let Some(month) = query.month {
        let month = parse_month(&month)?;
        payrolls.retain(|p| p.pay_month == month);
    }

    Ok(ok(payrolls))
}

/// List employees
pub async fn employees(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<Employee>>>> {
    let employees = state.data.employees().await.map_err(AppError::from)?;
    Ok(ok(employees))
}
