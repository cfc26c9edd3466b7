//! Booking events broadcast to in-process observers
//!
//! Events describe transitions that already committed; they are not
//! persisted and carry no history obligation.

use super::types::{Appointment, SlotTime};
use crate::util::now_millis;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of committed booking transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingEventKind {
    Requested,
    Confirmed,
    Cancelled,
}

/// A committed slot transition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEvent {
    pub kind: BookingEventKind,
    pub appointment_id: String,
    pub date: NaiveDate,
    pub time: SlotTime,
    /// Server-side commit time, millis since epoch
    pub timestamp: i64,
}

impl BookingEvent {
    pub fn new(kind: BookingEventKind, appointment: &Appointment) -> Self {
        Self {
            kind,
            appointment_id: appointment.id.clone(),
            date: appointment.date,
            time: appointment.time,
            timestamp: now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::AppointmentStatus;

    #[test]
    fn test_event_from_appointment() {
        let appointment = Appointment {
            id: "a-1".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            time: SlotTime::new(10).unwrap(),
            status: AppointmentStatus::Requested,
            vehicle_number: "12루1234".into(),
            service_type: "엔진오일 교체".into(),
            customer_name: "김철수".into(),
            phone: "010-1234-5678".into(),
            memo: String::new(),
        };
        let event = BookingEvent::new(BookingEventKind::Requested, &appointment);
        assert_eq!(event.appointment_id, "a-1");
        assert_eq!(event.date, appointment.date);
        assert_eq!(event.time, appointment.time);
        assert!(event.timestamp > 0);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "requested");
        assert_eq!(json["appointmentId"], "a-1");
    }
}
