//! BookingManager - appointment lifecycle transitions
//!
//! The single writer over the appointment store. Every transition follows
//! the same flow:
//!
//! ```text
//! request/confirm/cancel(actor, ...)
//!     ├─ 1. Actor + date preconditions
//!     ├─ 2. Begin write transaction (serializes against other writers)
//!     ├─ 3. Read slot, check the edge exists from its state
//!     ├─ 4. Apply (insert / update / delete)
//!     ├─ 5. Commit
//!     └─ 6. Broadcast event
//! ```
//!
//! # Lifecycle
//!
//! ```text
//! AVAILABLE ──request(customer)──▶ REQUESTED ──confirm(staff)──▶ CONFIRMED
//!     ▲                                │                            │
//!     └──cancel(staff or customer)─────┘                            │
//!     └──cancel(staff)──────────────────────────────────────────────┘
//! ```
//!
//! There is no terminal state; cancellation deletes the appointment and
//! returns the slot to AVAILABLE.

mod error;
pub use error::*;

use super::calendar;
use super::slots;
use super::storage::BookingStorage;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use shared::booking::{
    Actor, Appointment, AppointmentForm, AppointmentStatus, BookingEvent, BookingEventKind,
    CustomerSlot, MonthGrid, SlotCounts, SlotTime, TimeSlot, TransitionKind,
};
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::broadcast;
use validator::Validate;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Appointment lifecycle manager
pub struct BookingManager {
    storage: BookingStorage,
    event_tx: broadcast::Sender<BookingEvent>,
    /// Business timezone; "today" for past-date checks is computed here
    tz: Tz,
}

impl std::fmt::Debug for BookingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingManager")
            .field("storage", &"<BookingStorage>")
            .field("tz", &self.tz)
            .finish()
    }
}

impl BookingManager {
    /// Create a new BookingManager with the given database path
    pub fn new(db_path: impl AsRef<Path>, tz: Tz) -> BookingResult<Self> {
        let storage = BookingStorage::open(db_path).map_err(BookingError::Storage)?;
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            storage,
            event_tx,
            tz,
        })
    }

    /// Create a BookingManager over existing storage (for testing)
    #[cfg(test)]
    pub fn with_storage(storage: BookingStorage) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            storage,
            event_tx,
            tz: chrono_tz::Asia::Seoul,
        }
    }

    /// Subscribe to committed booking events
    pub fn subscribe(&self) -> broadcast::Receiver<BookingEvent> {
        self.event_tx.subscribe()
    }

    /// Get the underlying storage
    pub fn storage(&self) -> &BookingStorage {
        &self.storage
    }

    /// The current date in the business timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    // ========== Transitions ==========

    /// AVAILABLE → REQUESTED
    ///
    /// Customer-initiated requests must target today or later; the check
    /// and insert run inside one write transaction, so exactly one of two
    /// concurrent requests for a slot wins and the other fails with
    /// `SlotUnavailable`.
    pub fn request(
        &self,
        actor: Actor,
        date: NaiveDate,
        time: SlotTime,
        form: AppointmentForm,
    ) -> BookingResult<Appointment> {
        form.validate()
            .map_err(|e| BookingError::Validation(e.to_string()))?;

        if actor == Actor::Customer && date < self.today() {
            return Err(BookingError::PastDateRejected { date });
        }

        let txn = self.storage.begin_write()?;

        if self.storage.get_slot_txn(&txn, date, time)?.is_some() {
            return Err(BookingError::SlotUnavailable { date, time });
        }

        let appointment = Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            time,
            status: AppointmentStatus::Requested,
            vehicle_number: form.vehicle_number,
            service_type: form.service_type,
            customer_name: form.customer_name,
            phone: form.phone,
            memo: form.memo,
        };
        self.storage.put_slot_txn(&txn, &appointment)?;
        txn.commit().map_err(super::storage::StorageError::from)?;

        tracing::info!(
            appointment_id = %appointment.id,
            date = %date,
            time = %time,
            "Appointment requested"
        );
        self.broadcast(BookingEvent::new(BookingEventKind::Requested, &appointment));
        Ok(appointment)
    }

    /// REQUESTED → CONFIRMED (shop staff only)
    pub fn confirm(
        &self,
        actor: Actor,
        date: NaiveDate,
        time: SlotTime,
    ) -> BookingResult<Appointment> {
        if actor != Actor::Staff {
            return Err(BookingError::Forbidden {
                actor,
                action: TransitionKind::Confirm,
            });
        }

        let txn = self.storage.begin_write()?;

        let Some(mut appointment) = self.storage.get_slot_txn(&txn, date, time)? else {
            return Err(BookingError::InvalidTransition {
                from: shared::booking::SlotStatus::Available,
                attempted: TransitionKind::Confirm,
            });
        };

        match appointment.status {
            AppointmentStatus::Requested => {
                appointment.status = AppointmentStatus::Confirmed;
                self.storage.put_slot_txn(&txn, &appointment)?;
                txn.commit().map_err(super::storage::StorageError::from)?;

                tracing::info!(
                    appointment_id = %appointment.id,
                    date = %date,
                    time = %time,
                    "Appointment confirmed"
                );
                self.broadcast(BookingEvent::new(BookingEventKind::Confirmed, &appointment));
                Ok(appointment)
            }
            AppointmentStatus::Confirmed => Err(BookingError::InvalidTransition {
                from: shared::booking::SlotStatus::Confirmed,
                attempted: TransitionKind::Confirm,
            }),
        }
    }

    /// REQUESTED → AVAILABLE (staff or customer),
    /// CONFIRMED → AVAILABLE (staff only)
    ///
    /// Deletes the appointment; the slot becomes bookable again. No
    /// cancellation history is kept.
    pub fn cancel(
        &self,
        actor: Actor,
        date: NaiveDate,
        time: SlotTime,
    ) -> BookingResult<Appointment> {
        if actor == Actor::Customer && date < self.today() {
            return Err(BookingError::PastDateRejected { date });
        }

        let txn = self.storage.begin_write()?;

        let Some(appointment) = self.storage.get_slot_txn(&txn, date, time)? else {
            return Err(BookingError::InvalidTransition {
                from: shared::booking::SlotStatus::Available,
                attempted: TransitionKind::Cancel,
            });
        };

        if appointment.status == AppointmentStatus::Confirmed && actor == Actor::Customer {
            return Err(BookingError::Forbidden {
                actor,
                action: TransitionKind::Cancel,
            });
        }

        self.storage.remove_slot_txn(&txn, date, time)?;
        txn.commit().map_err(super::storage::StorageError::from)?;

        tracing::info!(
            appointment_id = %appointment.id,
            date = %date,
            time = %time,
            status = %shared::booking::SlotStatus::from(appointment.status),
            "Appointment cancelled"
        );
        self.broadcast(BookingEvent::new(BookingEventKind::Cancelled, &appointment));
        Ok(appointment)
    }

    // ========== Projections ==========

    /// Admin day view: 8 slots with full appointment details
    pub fn day_schedule(&self, date: NaiveDate) -> BookingResult<Vec<TimeSlot>> {
        Ok(slots::day_schedule(&self.storage, date)?)
    }

    /// Customer day view: 8 slots, vehicle numbers masked, no contact data
    pub fn customer_day_schedule(&self, date: NaiveDate) -> BookingResult<Vec<CustomerSlot>> {
        let slots = slots::day_schedule(&self.storage, date)?;
        Ok(slots.iter().map(CustomerSlot::from).collect())
    }

    /// Per-status slot totals for one date
    pub fn counts_for(&self, date: NaiveDate) -> BookingResult<SlotCounts> {
        Ok(slots::counts_for(&self.storage, date)?)
    }

    /// Month calendar grid for the given actor
    pub fn month_view(&self, year: i32, month: u32, actor: Actor) -> BookingResult<MonthGrid> {
        let days = calendar::days_in_month(year, month).ok_or_else(|| {
            BookingError::InvalidRequest(format!("invalid month: {}-{}", year, month))
        })?;

        let mut counts = HashMap::new();
        for day in 1..=days {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                counts.insert(date, slots::counts_for(&self.storage, date)?);
            }
        }

        calendar::month_grid(year, month, self.today(), actor, &counts).ok_or_else(|| {
            BookingError::InvalidRequest(format!("invalid month: {}-{}", year, month))
        })
    }

    // ========== Seeding ==========

    /// Seed the demo appointments shipped with the product
    ///
    /// Idempotent: occupied slots are left alone. Returns the number of
    /// appointments inserted.
    pub fn seed_demo(&self) -> BookingResult<usize> {
        type DemoRow = (
            (i32, u32, u32),
            u8,
            AppointmentStatus,
            &'static str,
            &'static str,
            &'static str,
            &'static str,
            &'static str,
        );
        const DEMO: [DemoRow; 4] = [
            (
                (2026, 1, 12),
                10,
                AppointmentStatus::Confirmed,
                "12루1234",
                "엔진오일 교체",
                "김철수",
                "010-1234-5678",
                "오일 필터도 함께 교체 요청",
            ),
            (
                (2026, 1, 12),
                13,
                AppointmentStatus::Confirmed,
                "45가2456",
                "타이어 교체",
                "박영희",
                "010-9876-5432",
                "전륜 타이어 2개 교체",
            ),
            (
                (2026, 1, 12),
                14,
                AppointmentStatus::Requested,
                "78나9012",
                "정기 점검",
                "이민수",
                "010-5555-6666",
                "",
            ),
            (
                (2024, 1, 15),
                11,
                AppointmentStatus::Confirmed,
                "33다7890",
                "정기 점검",
                "최지훈",
                "010-7777-8888",
                "",
            ),
        ];

        let txn = self.storage.begin_write()?;
        let mut inserted = 0;
        for ((year, month, day), hour, status, vehicle, service, name, phone, memo) in DEMO {
            let (Some(date), Some(time)) = (NaiveDate::from_ymd_opt(year, month, day), SlotTime::new(hour))
            else {
                continue;
            };
            if self.storage.get_slot_txn(&txn, date, time)?.is_some() {
                continue;
            }
            let appointment = Appointment {
                id: uuid::Uuid::new_v4().to_string(),
                date,
                time,
                status,
                vehicle_number: vehicle.to_string(),
                service_type: service.to_string(),
                customer_name: name.to_string(),
                phone: phone.to_string(),
                memo: memo.to_string(),
            };
            self.storage.put_slot_txn(&txn, &appointment)?;
            inserted += 1;
        }
        txn.commit().map_err(super::storage::StorageError::from)?;
        Ok(inserted)
    }

    fn broadcast(&self, event: BookingEvent) {
        // No receivers is fine; events are best-effort notifications
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests;
