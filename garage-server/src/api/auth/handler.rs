//! Auth API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{LoginRequest, UserAccount};
use shared::util::now_millis;

/// Sign in with a provider; replaces any existing session
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<UserAccount>>> {
    let provider = payload.provider;
    let user = UserAccount {
        id: format!("{}_{}", provider, now_millis()),
        name: payload
            .name
            .unwrap_or_else(|| provider.default_name().to_string()),
        email: payload
            .email
            .unwrap_or_else(|| provider.default_email().to_string()),
        provider,
    };

    state.session.login(&user).map_err(AppError::from)?;

    tracing::info!(user_id = %user.id, provider = %provider, "User logged in");
    Ok(ok(user))
}

/// Clear the session; returns whether a user was signed in
pub async fn logout(State(state): State<ServerState>) -> AppResult<Json<AppResponse<bool>>> {
    let was_signed_in = state.session.logout().map_err(AppError::from)?;
    if was_signed_in {
        tracing::info!("User logged out");
    }
    Ok(ok(was_signed_in))
}

/// The signed-in user, or 401
pub async fn me(State(state): State<ServerState>) -> AppResult<Json<AppResponse<UserAccount>>> {
    let user = state
        .session
        .current_user()
        .map_err(AppError::from)?
        .ok_or_else(AppError::not_authenticated)?;
    Ok(ok(user))
}
