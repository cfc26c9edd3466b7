//! Customers API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ErrorCode, ok};
use shared::models::{Customer, CustomerCreate, MaintenanceRecord};

#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    /// Substring match on customer name
    pub name: Option<String>,
    /// Substring match on car number
    pub car: Option<String>,
    /// Substring match on phone
    pub phone: Option<String>,
}

/// List customers with optional field filters
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<AppResponse<Vec<Customer>>>> {
    let mut customers = state.data.customers().await.map_err(AppError::from)?;

    if let Some(name) = &query.name {
        customers.retain(|c| c.customer_name.contains(name.as_str()));
    }
    if let Some(car) = &query.car {
        customers.retain(|c| c.car_number.contains(car.as_str()));
    }
    if let Some(phone) = &query.phone {
        customers.retain(|c| c.phone.contains(phone.as_str()));
    }

    Ok(ok(customers))
}

/// Register a customer
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<AppResponse<Customer>>> {
    let customer = state
        .data
        .record_customer(payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(customer_id = customer.customer_id, "Customer registered");
    Ok(ok(customer))
}

#[derive(Debug, Deserialize)]
pub struct MaintenanceQuery {
    /// Exact vehicle number
    pub vehicle: String,
}

/// Maintenance history for one vehicle
pub async fn maintenance_history(
    State(state): State<ServerState>,
    Query(query): Query<MaintenanceQuery>,
) -> AppResult<Json<AppResponse<Vec<MaintenanceRecord>>>> {
    if query.vehicle.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "vehicle query parameter is required",
        ));
    }

    let records = state
        .data
        .maintenance_history(&query.vehicle)
        .await
        .map_err(AppError::from)?;
    Ok(ok(records))
}
