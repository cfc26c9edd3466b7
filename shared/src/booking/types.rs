//! Booking domain types: slots, statuses, appointments, calendar cells
//!
//! The business day is a fixed ordered set of 8 one-hour slots, 10:00
//! through 17:00 (start times). A (date, time) pair with no stored
//! appointment is AVAILABLE by default; a stored appointment is either
//! REQUESTED or CONFIRMED, never AVAILABLE.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Status of a bookable time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotStatus {
    Available,
    Requested,
    Confirmed,
}

impl SlotStatus {
    /// Korean display label, as shown in the shop UI
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "가능",
            Self::Requested => "요청중",
            Self::Confirmed => "확정",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Available => "AVAILABLE",
            Self::Requested => "REQUESTED",
            Self::Confirmed => "CONFIRMED",
        };
        write!(f, "{}", s)
    }
}

/// Status of a stored appointment
///
/// Stored appointments are never AVAILABLE; that state is represented by
/// the absence of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Requested,
    Confirmed,
}

impl From<AppointmentStatus> for SlotStatus {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Requested => SlotStatus::Requested,
            AppointmentStatus::Confirmed => SlotStatus::Confirmed,
        }
    }
}

/// First bookable hour of the business day (inclusive)
pub const OPEN_HOUR: u8 = 10;
/// First hour past the business day (exclusive)
pub const CLOSE_HOUR: u8 = 18;
/// Number of bookable slots per day
pub const SLOTS_PER_DAY: u8 = CLOSE_HOUR - OPEN_HOUR;

/// One bookable hour of the business day, 10:00 through 17:00
///
/// Serialized as `"HH:00"`; only full hours inside the business day parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotTime(u8);

impl SlotTime {
    /// Create a slot time, rejecting hours outside the business day
    pub fn new(hour: u8) -> Option<Self> {
        (OPEN_HOUR..CLOSE_HOUR).contains(&hour).then_some(Self(hour))
    }

    /// The hour component (10..=17)
    pub fn hour(&self) -> u8 {
        self.0
    }

    /// All canonical slot times, hour ascending
    pub fn all() -> impl Iterator<Item = SlotTime> {
        (OPEN_HOUR..CLOSE_HOUR).map(SlotTime)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

/// Error parsing a slot time string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid slot time: {0} (expected \"HH:00\" between 10:00 and 17:00)")]
pub struct ParseSlotTimeError(pub String);

impl FromStr for SlotTime {
    type Err = ParseSlotTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || ParseSlotTimeError(s.to_string());
        let (hour_str, minute_str) = s.split_once(':').ok_or_else(reject)?;
        if minute_str != "00" {
            return Err(reject());
        }
        let hour: u8 = hour_str.parse().map_err(|_| reject())?;
        SlotTime::new(hour).ok_or_else(reject)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A customer's claim on a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    pub time: SlotTime,
    pub status: AppointmentStatus,
    pub vehicle_number: String,
    pub service_type: String,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub memo: String,
}

/// Customer-submitted booking form
///
/// Vehicle number, service type, customer name and phone are required;
/// the memo is free text.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentForm {
    #[validate(length(min = 1, message = "vehicle number is required"))]
    pub vehicle_number: String,
    #[validate(length(min = 1, message = "service type is required"))]
    pub service_type: String,
    #[validate(length(min = 1, message = "customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[serde(default)]
    pub memo: String,
}

/// One slot of the admin day view, appointment attached when occupied
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: SlotTime,
    pub status: SlotStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Appointment>,
}

/// One slot of the customer day view
///
/// Occupied slots expose only a masked vehicle number and the service
/// type; contact details never leave the shop side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSlot {
    pub time: SlotTime,
    pub status: SlotStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

impl From<&TimeSlot> for CustomerSlot {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            time: slot.time,
            status: slot.status,
            vehicle_number: slot
                .appointment
                .as_ref()
                .map(|a| mask_vehicle_number(&a.vehicle_number)),
            service_type: slot.appointment.as_ref().map(|a| a.service_type.clone()),
        }
    }
}

/// Per-day slot totals used by the calendar grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCounts {
    pub available: u8,
    pub requested: u8,
    pub confirmed: u8,
}

impl SlotCounts {
    /// The fully-open default: a day with no stored appointments
    pub fn fully_open() -> Self {
        Self {
            available: SLOTS_PER_DAY,
            requested: 0,
            confirmed: 0,
        }
    }
}

/// Who is driving a lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Customer,
    Staff,
}

/// The lifecycle edge being attempted, for error diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Request,
    Confirm,
    Cancel,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Request => "request",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
        };
        write!(f, "{}", s)
    }
}

/// Weekend classification of a calendar day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Sunday,
    Saturday,
    Weekday,
}

/// One day cell of the month calendar grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub kind: DayKind,
    pub is_past: bool,
    pub counts: SlotCounts,
    pub is_clickable: bool,
}

/// A rendered month: leading blanks followed by 28-31 day cells
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Number of blank cells before day 1 (= weekday of the 1st, Sunday = 0)
    pub leading_blanks: u8,
    pub cells: Vec<DayCell>,
}

/// Mask a vehicle number for the customer-facing day view
///
/// Keeps the first three characters and the last one; everything in
/// between becomes `*`. Plates of four characters or fewer pass through
/// unmasked. The stored value is never modified.
pub fn mask_vehicle_number(vehicle_number: &str) -> String {
    let chars: Vec<char> = vehicle_number.chars().collect();
    if chars.len() <= 4 {
        return vehicle_number.to_string();
    }
    let prefix: String = chars[..3].iter().collect();
    let suffix = chars[chars.len() - 1];
    let masked = "*".repeat(chars.len() - 4);
    format!("{}{}{}", prefix, masked, suffix)
}
