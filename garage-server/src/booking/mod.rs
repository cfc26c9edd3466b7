//! Booking & Schedule Engine
//!
//! The appointment-booking core of the server:
//!
//! - **storage**: redb-backed slot/appointment store
//! - **slots**: availability projection (8 canonical slots per day)
//! - **calendar**: month grid construction
//! - **manager**: lifecycle transitions and their preconditions
//!
//! # Data Flow
//!
//! 1. The calendar views query per-day slot counts for cell styling
//! 2. A day view renders the 8 slots from the availability projection
//! 3. Selecting a slot drives a lifecycle transition through the manager
//! 4. Committed transitions are broadcast to in-process subscribers

pub mod calendar;
pub mod manager;
pub mod slots;
pub mod storage;

// Re-exports
pub use manager::{BookingError, BookingManager, BookingResult};
pub use storage::{BookingStorage, StorageError, StorageResult};

// Re-export shared types for convenience
pub use shared::booking::{
    Actor, Appointment, AppointmentForm, AppointmentStatus, BookingEvent, BookingEventKind,
    CustomerSlot, MonthGrid, SlotCounts, SlotStatus, SlotTime, TimeSlot,
};
