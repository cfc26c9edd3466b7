//! Shared types for the Bro Motors platform
//!
//! Common types used across crates: the booking domain (slots,
//! appointments, calendar cells), business record models, the unified
//! error system, and small utilities.

pub mod booking;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use booking::{Actor, Appointment, BookingEvent, SlotStatus, SlotTime};
pub use error::{AppError, AppResponse, AppResult, ErrorCategory, ErrorCode};
