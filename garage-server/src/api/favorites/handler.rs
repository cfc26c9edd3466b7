//! Favorites API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ErrorCode, ok};

/// All favorite shop ids
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<String>>>> {
    let ids = state.session.favorite_ids().map_err(AppError::from)?;
    Ok(ok(ids))
}

/// Toggle a shop in the favorite set; returns the new membership
pub async fn toggle(
    State(state): State<ServerState>,
    Path(shop_id): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    // Only catalog shops can be bookmarked
    if state.shops.find(&shop_id).is_none() {
        return Err(AppError::with_message(
            ErrorCode::ShopNotFound,
            format!("Shop {shop_id} not found"),
        ));
    }

    let now_favorite = state
        .session
        .toggle_favorite(&shop_id)
        .map_err(AppError::from)?;
    Ok(ok(now_favorite))
}
