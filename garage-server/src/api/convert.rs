//! Path/query parameter conversions shared by the API handlers

use shared::booking::SlotTime;
use shared::error::{AppError, ErrorCode};
use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` path segment
pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid date: {s} (expected YYYY-MM-DD)"),
        )
    })
}

/// Parse an `"HH:00"` slot time path segment
pub fn parse_slot_time(s: &str) -> Result<SlotTime, AppError> {
    s.parse()
        .map_err(|e: shared::booking::ParseSlotTimeError| {
            AppError::with_message(ErrorCode::InvalidFormat, e.to_string())
        })
}

/// Validate a `YYYY-MM` month filter
pub fn parse_month(s: &str) -> Result<String, AppError> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map(|_| s.to_string())
        .map_err(|_| {
            AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("invalid month: {s} (expected YYYY-MM)"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-01-12").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
        );
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_parse_slot_time() {
        assert_eq!(parse_slot_time("10:00").unwrap().hour(), 10);
        assert!(parse_slot_time("09:00").is_err());
        assert!(parse_slot_time("10:30").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-01").unwrap(), "2026-01");
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("2026").is_err());
    }
}
