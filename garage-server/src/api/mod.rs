//! API route modules
//!
//! # Structure
//!
//! One module per resource, each exposing a `router()` merged in
//! [`crate::core::build_app`]:
//!
//! - [`health`] - liveness and storage checks
//! - [`auth`] - mock provider login, session user
//! - [`shops`] - partner shop catalog
//! - [`favorites`] - bookmarked shops
//! - [`booking`] - customer-facing calendar and appointment requests
//! - [`schedule`] - staff-facing calendar and appointment management
//! - [`sales`], [`expenses`], [`receivables`], [`payroll`],
//!   [`customers`], [`dashboard`] - business records
//!
//! The actor is implied by the namespace: `/api/booking` acts as the
//! customer, `/api/schedule` as shop staff.

pub mod convert;

pub mod auth;
pub mod health;

// Booking engine API
pub mod booking;
pub mod schedule;

// Customer-facing shop selection
pub mod favorites;
pub mod shops;

// Business records API
pub mod customers;
pub mod dashboard;
pub mod expenses;
pub mod payroll;
pub mod receivables;
pub mod sales;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult, ok};

#[cfg(test)]
mod tests;
