//! Utility module - response envelope helpers and logging
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResponse`] - re-exported from `shared::error`
//! - [`ok`] - wrap a payload in the success envelope
//! - logging setup

pub mod logger;

// Re-export error types from shared
pub use shared::error::{AppError, AppResponse, AppResult, ErrorCategory, ErrorCode};

/// Wrap a payload in the `{success: true, data}` envelope
///
/// Every handler responds through this; `success=false` bodies are
/// produced by [`AppError`]'s `IntoResponse` impl.
pub fn ok<T>(data: T) -> axum::Json<AppResponse<T>> {
    axum::Json(AppResponse::success(data))
}
