//! Server-level errors
//!
//! Errors that abort startup or the serve loop. Request-level errors use
//! [`shared::error::AppError`] instead.

use thiserror::Error;

/// Fatal server error
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Booking engine error: {0}")]
    Booking(#[from] crate::booking::BookingError),

    #[error("Session store error: {0}")]
    Session(#[from] crate::session::SessionError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for server startup and shutdown paths
pub type Result<T> = std::result::Result<T, ServerError>;
