//! Slot availability projection
//!
//! Read-only view over the appointment store: every date exposes the 8
//! canonical slots, 10:00 through 17:00, defaulting to AVAILABLE where no
//! appointment is stored.

use chrono::NaiveDate;
use shared::booking::{SlotCounts, SlotStatus, SlotTime, TimeSlot};

use super::storage::{BookingStorage, StorageResult};

/// The 8 canonical slots for a date, hour ascending
///
/// Deterministic regardless of storage iteration order; slots with no
/// stored appointment come back AVAILABLE with no attachment.
pub fn day_schedule(storage: &BookingStorage, date: NaiveDate) -> StorageResult<Vec<TimeSlot>> {
    let stored = storage.appointments_for(date)?;

    let slots = SlotTime::all()
        .map(|time| match stored.iter().find(|a| a.time == time) {
            Some(appointment) => TimeSlot {
                time,
                status: appointment.status.into(),
                appointment: Some(appointment.clone()),
            },
            None => TimeSlot {
                time,
                status: SlotStatus::Available,
                appointment: None,
            },
        })
        .collect();

    Ok(slots)
}

/// Per-status totals for a date's slots
///
/// A date with no stored appointments is fully open (8 available), never
/// an error.
pub fn counts_for(storage: &BookingStorage, date: NaiveDate) -> StorageResult<SlotCounts> {
    let mut counts = SlotCounts::fully_open();

    for appointment in storage.appointments_for(date)? {
        counts.available -= 1;
        match appointment.status {
            shared::booking::AppointmentStatus::Requested => counts.requested += 1,
            shared::booking::AppointmentStatus::Confirmed => counts.confirmed += 1,
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::booking::{Appointment, AppointmentStatus, SLOTS_PER_DAY};

    fn appointment(date: NaiveDate, hour: u8, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            time: SlotTime::new(hour).unwrap(),
            status,
            vehicle_number: "78나9012".to_string(),
            service_type: "정기 점검".to_string(),
            customer_name: "이민수".to_string(),
            phone: "010-5555-6666".to_string(),
            memo: String::new(),
        }
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    #[test]
    fn test_empty_date_fully_open() {
        let storage = BookingStorage::open_in_memory().unwrap();
        let date = test_date();

        let slots = day_schedule(&storage, date).unwrap();
        assert_eq!(slots.len(), SLOTS_PER_DAY as usize);
        assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
        assert!(slots.iter().all(|s| s.appointment.is_none()));

        assert_eq!(counts_for(&storage, date).unwrap(), SlotCounts::fully_open());
    }

    #[test]
    fn test_exactly_one_slot_per_hour_ascending() {
        let storage = BookingStorage::open_in_memory().unwrap();
        let date = test_date();

        let txn = storage.begin_write().unwrap();
        storage
            .put_slot_txn(&txn, &appointment(date, 14, AppointmentStatus::Requested))
            .unwrap();
        txn.commit().unwrap();

        let slots = day_schedule(&storage, date).unwrap();
        let hours: Vec<u8> = slots.iter().map(|s| s.time.hour()).collect();
        assert_eq!(hours, vec![10, 11, 12, 13, 14, 15, 16, 17]);
    }

    #[test]
    fn test_stored_statuses_resolved() {
        let storage = BookingStorage::open_in_memory().unwrap();
        let date = test_date();

        let txn = storage.begin_write().unwrap();
        storage
            .put_slot_txn(&txn, &appointment(date, 10, AppointmentStatus::Confirmed))
            .unwrap();
        storage
            .put_slot_txn(&txn, &appointment(date, 14, AppointmentStatus::Requested))
            .unwrap();
        txn.commit().unwrap();

        let slots = day_schedule(&storage, date).unwrap();
        assert_eq!(slots[0].status, SlotStatus::Confirmed);
        assert!(slots[0].appointment.is_some());
        assert_eq!(slots[4].status, SlotStatus::Requested);
        assert_eq!(slots[1].status, SlotStatus::Available);

        let counts = counts_for(&storage, date).unwrap();
        assert_eq!(counts.available, 6);
        assert_eq!(counts.requested, 1);
        assert_eq!(counts.confirmed, 1);
    }

    #[test]
    fn test_counts_ignore_other_dates() {
        let storage = BookingStorage::open_in_memory().unwrap();
        let date = test_date();
        let other = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let txn = storage.begin_write().unwrap();
        storage
            .put_slot_txn(&txn, &appointment(other, 11, AppointmentStatus::Confirmed))
            .unwrap();
        txn.commit().unwrap();

        assert_eq!(counts_for(&storage, date).unwrap(), SlotCounts::fully_open());
    }
}
