use super::*;
use crate::booking::storage::BookingStorage;
use shared::booking::SlotStatus;
use std::sync::Arc;

fn manager() -> BookingManager {
    BookingManager::with_storage(BookingStorage::open_in_memory().unwrap())
}

fn form() -> AppointmentForm {
    AppointmentForm {
        vehicle_number: "12루1234".to_string(),
        service_type: "엔진오일 교체".to_string(),
        customer_name: "홍길동".to_string(),
        phone: "010-1234-5678".to_string(),
        memo: String::new(),
    }
}

fn slot(hour: u8) -> SlotTime {
    SlotTime::new(hour).unwrap()
}

/// A date safely in the future relative to the manager's clock
fn future_date(manager: &BookingManager) -> NaiveDate {
    manager.today() + chrono::Days::new(7)
}

/// A date safely in the past relative to the manager's clock
fn past_date(manager: &BookingManager) -> NaiveDate {
    manager.today() - chrono::Days::new(7)
}

#[test]
fn test_request_creates_requested_appointment() {
    let manager = manager();
    let date = future_date(&manager);

    let appointment = manager
        .request(Actor::Customer, date, slot(10), form())
        .unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Requested);
    assert_eq!(appointment.date, date);
    assert_eq!(appointment.time, slot(10));

    let counts = manager.counts_for(date).unwrap();
    assert_eq!(counts.available, 7);
    assert_eq!(counts.requested, 1);
    assert_eq!(counts.confirmed, 0);
}

#[test]
fn test_second_request_fails_slot_unavailable() {
    let manager = manager();
    let date = future_date(&manager);

    manager
        .request(Actor::Customer, date, slot(11), form())
        .unwrap();
    let second = manager.request(Actor::Customer, date, slot(11), form());
    assert!(matches!(
        second,
        Err(BookingError::SlotUnavailable { .. })
    ));

    // Also on a CONFIRMED slot
    manager.confirm(Actor::Staff, date, slot(11)).unwrap();
    let third = manager.request(Actor::Customer, date, slot(11), form());
    assert!(matches!(third, Err(BookingError::SlotUnavailable { .. })));
}

#[test]
fn test_concurrent_requests_exactly_one_wins() {
    let manager = Arc::new(manager());
    let date = future_date(&manager);
    let barrier = Arc::new(std::sync::Barrier::new(2));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let manager = Arc::clone(&manager);
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                manager.request(Actor::Customer, date, slot(10), form())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    let losers = results
        .iter()
        .filter(|r| matches!(r, Err(BookingError::SlotUnavailable { .. })))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(losers, 1);

    // The slot holds exactly one appointment
    let counts = manager.counts_for(date).unwrap();
    assert_eq!(counts.requested, 1);
    assert_eq!(counts.available, 7);
}

#[test]
fn test_confirm_then_cancel_round_trip() {
    let manager = manager();
    let date = future_date(&manager);
    let before = manager.counts_for(date).unwrap();

    manager
        .request(Actor::Customer, date, slot(13), form())
        .unwrap();
    let confirmed = manager.confirm(Actor::Staff, date, slot(13)).unwrap();
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

    let cancelled = manager.cancel(Actor::Staff, date, slot(13)).unwrap();
    assert_eq!(cancelled.id, confirmed.id);

    // Round trip: slot back to AVAILABLE, appointment gone
    assert_eq!(manager.counts_for(date).unwrap(), before);
    assert!(manager.storage().get_slot(date, slot(13)).unwrap().is_none());
}

#[test]
fn test_confirm_available_slot_invalid_transition() {
    let manager = manager();
    let date = future_date(&manager);

    let result = manager.confirm(Actor::Staff, date, slot(10));
    assert!(matches!(
        result,
        Err(BookingError::InvalidTransition {
            from: SlotStatus::Available,
            attempted: TransitionKind::Confirm,
        })
    ));
}

#[test]
fn test_confirm_twice_invalid_transition() {
    let manager = manager();
    let date = future_date(&manager);

    manager
        .request(Actor::Customer, date, slot(15), form())
        .unwrap();
    manager.confirm(Actor::Staff, date, slot(15)).unwrap();

    let again = manager.confirm(Actor::Staff, date, slot(15));
    assert!(matches!(
        again,
        Err(BookingError::InvalidTransition {
            from: SlotStatus::Confirmed,
            attempted: TransitionKind::Confirm,
        })
    ));
}

#[test]
fn test_cancel_available_slot_invalid_transition() {
    let manager = manager();
    let date = future_date(&manager);

    let result = manager.cancel(Actor::Staff, date, slot(16));
    assert!(matches!(
        result,
        Err(BookingError::InvalidTransition {
            from: SlotStatus::Available,
            attempted: TransitionKind::Cancel,
        })
    ));
}

#[test]
fn test_customer_may_cancel_requested() {
    let manager = manager();
    let date = future_date(&manager);

    manager
        .request(Actor::Customer, date, slot(12), form())
        .unwrap();
    manager.cancel(Actor::Customer, date, slot(12)).unwrap();
    assert_eq!(manager.counts_for(date).unwrap(), SlotCounts::fully_open());
}

#[test]
fn test_customer_may_not_cancel_confirmed() {
    let manager = manager();
    let date = future_date(&manager);

    manager
        .request(Actor::Customer, date, slot(12), form())
        .unwrap();
    manager.confirm(Actor::Staff, date, slot(12)).unwrap();

    let result = manager.cancel(Actor::Customer, date, slot(12));
    assert!(matches!(
        result,
        Err(BookingError::Forbidden {
            actor: Actor::Customer,
            action: TransitionKind::Cancel,
        })
    ));

    // Still confirmed
    let stored = manager.storage().get_slot(date, slot(12)).unwrap().unwrap();
    assert_eq!(stored.status, AppointmentStatus::Confirmed);
}

#[test]
fn test_customer_may_not_confirm() {
    let manager = manager();
    let date = future_date(&manager);

    manager
        .request(Actor::Customer, date, slot(10), form())
        .unwrap();
    let result = manager.confirm(Actor::Customer, date, slot(10));
    assert!(matches!(result, Err(BookingError::Forbidden { .. })));
}

#[test]
fn test_customer_past_date_rejected_regardless_of_status() {
    let manager = manager();
    let date = past_date(&manager);

    // Request on an elapsed date
    let result = manager.request(Actor::Customer, date, slot(10), form());
    assert!(matches!(result, Err(BookingError::PastDateRejected { .. })));

    // Cancel on an elapsed date, even with nothing stored
    let result = manager.cancel(Actor::Customer, date, slot(10));
    assert!(matches!(result, Err(BookingError::PastDateRejected { .. })));
}

#[test]
fn test_staff_not_bound_by_past_dates() {
    let manager = manager();
    manager.seed_demo().unwrap();

    // 2024-01-15 11:00 is CONFIRMED and long past; staff may still cancel
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let cancelled = manager.cancel(Actor::Staff, date, slot(11)).unwrap();
    assert_eq!(cancelled.vehicle_number, "33다7890");
}

#[test]
fn test_missing_required_fields_rejected() {
    let manager = manager();
    let date = future_date(&manager);

    let incomplete = AppointmentForm {
        phone: String::new(),
        ..form()
    };
    let result = manager.request(Actor::Customer, date, slot(10), incomplete);
    assert!(matches!(result, Err(BookingError::Validation(_))));

    // Nothing was written
    assert_eq!(manager.counts_for(date).unwrap(), SlotCounts::fully_open());
}

#[test]
fn test_seeded_day_scenario() {
    let manager = manager();
    let seeded = manager.seed_demo().unwrap();
    assert_eq!(seeded, 4);

    // Seeding twice is a no-op
    assert_eq!(manager.seed_demo().unwrap(), 0);

    let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
    let slots = manager.day_schedule(date).unwrap();

    let first = &slots[0];
    assert_eq!(first.time, slot(10));
    assert_eq!(first.status, SlotStatus::Confirmed);
    assert_eq!(
        first.appointment.as_ref().unwrap().vehicle_number,
        "12루1234"
    );

    let before = manager.counts_for(date).unwrap();
    assert_eq!(before.available, 5);
    assert_eq!(before.confirmed, 2);
    assert_eq!(before.requested, 1);

    // Staff frees the 10:00 slot; one more AVAILABLE than before
    manager.cancel(Actor::Staff, date, slot(10)).unwrap();
    let after = manager.counts_for(date).unwrap();
    assert_eq!(after.available, before.available + 1);
    assert_eq!(after.confirmed, before.confirmed - 1);
}

#[test]
fn test_customer_day_view_masks_vehicle() {
    let manager = manager();
    manager.seed_demo().unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
    let slots = manager.customer_day_schedule(date).unwrap();

    assert_eq!(slots[0].vehicle_number.as_deref(), Some("12루***4"));
    assert_eq!(slots[0].service_type.as_deref(), Some("엔진오일 교체"));
    assert!(slots[1].vehicle_number.is_none());

    // Storage keeps the unmasked value
    let stored = manager.storage().get_slot(date, slot(10)).unwrap().unwrap();
    assert_eq!(stored.vehicle_number, "12루1234");
}

#[test]
fn test_transitions_broadcast_events() {
    let manager = manager();
    let mut events = manager.subscribe();
    let date = future_date(&manager);

    manager
        .request(Actor::Customer, date, slot(10), form())
        .unwrap();
    manager.confirm(Actor::Staff, date, slot(10)).unwrap();
    manager.cancel(Actor::Staff, date, slot(10)).unwrap();

    assert_eq!(events.try_recv().unwrap().kind, BookingEventKind::Requested);
    assert_eq!(events.try_recv().unwrap().kind, BookingEventKind::Confirmed);
    assert_eq!(events.try_recv().unwrap().kind, BookingEventKind::Cancelled);
}

#[test]
fn test_month_view_counts_and_shape() {
    let manager = manager();
    manager.seed_demo().unwrap();

    let grid = manager.month_view(2026, 1, Actor::Staff).unwrap();
    assert_eq!(grid.cells.len(), 31);
    // 2026-01-01 is a Thursday
    assert_eq!(grid.leading_blanks, 4);

    let jan_12 = &grid.cells[11];
    assert_eq!(jan_12.counts.confirmed, 2);
    assert_eq!(jan_12.counts.requested, 1);
    assert_eq!(jan_12.counts.available, 5);
    assert!(jan_12.is_clickable);

    // Untouched days are fully open
    assert_eq!(grid.cells[0].counts, SlotCounts::fully_open());
}

#[test]
fn test_month_view_invalid_month() {
    let manager = manager();
    let result = manager.month_view(2026, 13, Actor::Staff);
    assert!(matches!(result, Err(BookingError::InvalidRequest(_))));
}
