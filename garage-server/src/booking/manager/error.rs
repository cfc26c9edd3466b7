use super::super::storage::StorageError;
use chrono::NaiveDate;
use shared::booking::{Actor, SlotStatus, SlotTime, TransitionKind};
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Booking engine errors
///
/// Every rejected transition is one of these; nothing silently no-ops.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The attempted edge does not exist from the slot's current state
    #[error("cannot {attempted} a slot in state {from}")]
    InvalidTransition {
        from: SlotStatus,
        attempted: TransitionKind,
    },

    /// Lost the race: the slot is already held by another appointment
    #[error("slot {date} {time} is no longer available")]
    SlotUnavailable { date: NaiveDate, time: SlotTime },

    /// Customer action on an elapsed date
    #[error("date {date} has already passed")]
    PastDateRejected { date: NaiveDate },

    /// The edge exists, but not for this actor
    #[error("{actor:?} is not allowed to {action} this appointment")]
    Forbidden {
        actor: Actor,
        action: TransitionKind,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

/// Classify a storage error into a wire code (clients handle wording)
fn classify_storage_error(e: &StorageError) -> ErrorCode {
    if matches!(e, StorageError::Serialization(_)) {
        return ErrorCode::InternalError;
    }

    let err_str = e.to_string().to_lowercase();

    // Disk exhausted
    if err_str.contains("no space") || err_str.contains("disk full") || err_str.contains("enospc")
    {
        return ErrorCode::StorageFull;
    }

    // Memory exhausted
    if err_str.contains("out of memory") || err_str.contains("cannot allocate") {
        return ErrorCode::OutOfMemory;
    }

    // Data file damaged
    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return ErrorCode::StorageCorrupted;
    }

    // Default: busy (redb Database/Transaction/Table/Storage/Commit errors)
    ErrorCode::SystemBusy
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Storage(e) => {
                let code = classify_storage_error(&e);
                tracing::error!(error = %e, error_code = ?code, "Booking storage error");
                AppError::with_message(code, e.to_string())
            }
            BookingError::InvalidTransition { .. } => {
                AppError::with_message(ErrorCode::InvalidTransition, err.to_string())
            }
            BookingError::SlotUnavailable { .. } => {
                AppError::with_message(ErrorCode::SlotUnavailable, err.to_string())
            }
            BookingError::PastDateRejected { .. } => {
                AppError::with_message(ErrorCode::PastDateRejected, err.to_string())
            }
            BookingError::Forbidden { .. } => {
                AppError::with_message(ErrorCode::PermissionDenied, err.to_string())
            }
            BookingError::Validation(msg) => {
                AppError::with_message(ErrorCode::ValidationFailed, msg)
            }
            BookingError::InvalidRequest(msg) => {
                AppError::with_message(ErrorCode::InvalidRequest, msg)
            }
        }
    }
}
