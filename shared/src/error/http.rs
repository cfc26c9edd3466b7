//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::RecordNotFound | Self::ShopNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (lifecycle rule violated or slot taken)
            Self::AlreadyExists | Self::InvalidTransition | Self::SlotUnavailable => {
                StatusCode::CONFLICT
            }

            // 401 Unauthorized
            Self::NotAuthenticated | Self::SessionExpired => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::StaffRequired => StatusCode::FORBIDDEN,

            // 422 Unprocessable Entity
            Self::PastDateRejected => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange => StatusCode::BAD_REQUEST,

            // 503 Service Unavailable (data boundary down, callers retain state)
            Self::FetchFailed | Self::SystemBusy => StatusCode::SERVICE_UNAVAILABLE,

            // 507 Insufficient Storage
            Self::StorageFull => StatusCode::INSUFFICIENT_STORAGE,

            // 500 Internal Server Error
            Self::Unknown
            | Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::OutOfMemory
            | Self::StorageCorrupted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
