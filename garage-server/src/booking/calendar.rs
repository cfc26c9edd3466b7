//! Month calendar grid
//!
//! Pure construction of the month view: the correct number of leading
//! blank cells (weekday of the 1st, Sunday = 0) followed by one cell per
//! calendar day. Month length uses real calendar arithmetic, so February
//! and leap years come out right.

use chrono::{Datelike, NaiveDate, Weekday};
use shared::booking::{Actor, DayCell, DayKind, MonthGrid, SlotCounts};
use std::collections::HashMap;

/// Number of days in a calendar month, or None for an invalid month
///
/// Computed as "first of next month minus one day", never a fixed 30/31
/// assumption.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_of_next.pred_opt()?.day())
}

fn day_kind(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sun => DayKind::Sunday,
        Weekday::Sat => DayKind::Saturday,
        _ => DayKind::Weekday,
    }
}

/// Build the grid for one month
///
/// `counts` carries the per-day slot totals for dates that have stored
/// appointments; absent dates default to fully open. Past cells are inert
/// for customers; shop staff may always inspect.
///
/// Returns None when (year, month) is not a valid calendar month.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    actor: Actor,
    counts: &HashMap<NaiveDate, SlotCounts>,
) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = days_in_month(year, month)?;

    let leading_blanks = first.weekday().num_days_from_sunday() as u8;

    let mut cells = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let is_past = date < today;
        let is_clickable = match actor {
            Actor::Customer => !is_past,
            Actor::Staff => true,
        };
        cells.push(DayCell {
            day,
            date,
            kind: day_kind(date),
            is_past,
            counts: counts.get(&date).copied().unwrap_or_else(SlotCounts::fully_open),
            is_clickable,
        });
    }

    Some(MonthGrid {
        year,
        month,
        leading_blanks,
        cells,
    })
}
