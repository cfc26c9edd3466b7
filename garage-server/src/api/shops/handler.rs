//! Shop Catalog API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ErrorCode, ok};
use shared::models::Shop;

#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    /// Exact region filter (서울, 부산, ...)
    pub region: Option<String>,
    /// Free-text search over name, address, description
    pub q: Option<String>,
}

/// List shops, optionally filtered by region and text query
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ShopQuery>,
) -> AppResult<Json<AppResponse<Vec<Shop>>>> {
    let shops: Vec<Shop> = state
        .shops
        .search(query.region.as_deref(), query.q.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Ok(ok(shops))
}

/// Distinct catalog regions
pub async fn regions(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<String>>>> {
    Ok(ok(state.shops.regions()))
}

/// One shop by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Shop>>> {
    let shop = state
        .shops
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::with_message(ErrorCode::ShopNotFound, format!("Shop {id} not found")))?;
    Ok(ok(shop))
}
