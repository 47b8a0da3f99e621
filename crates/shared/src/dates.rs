//! Calendar-date parsing and normalization.
//!
//! Rental dates are calendar days: clients may send either a plain ISO-8601
//! date (`2024-07-15`) or a full RFC 3339 date-time. Either way the value is
//! normalized to day precision, since time-of-day never affects availability.

use chrono::{DateTime, NaiveDate};
use thiserror::Error;

/// Error type for calendar-date parsing.
#[derive(Debug, Error)]
pub enum DateParseError {
    #[error("Invalid date: {0}")]
    Invalid(String),
}

/// Parses an ISO-8601 date or RFC 3339 date-time string into a calendar day.
///
/// Date-time inputs are truncated to their UTC calendar date.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, DateParseError> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.naive_utc().date())
        .map_err(|_| DateParseError::Invalid(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_calendar_date("2024-07-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_truncates_time() {
        let date = parse_calendar_date("2024-07-15T23:59:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        // 01:00 at +02:00 is 23:00 UTC on the previous day
        let date = parse_calendar_date("2024-07-15T01:00:00+02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 14).unwrap());
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_calendar_date("not-a-date").is_err());
        assert!(parse_calendar_date("2024-13-40").is_err());
        assert!(parse_calendar_date("").is_err());
    }
}
