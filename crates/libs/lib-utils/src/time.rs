//! # Time Utilities
//!
//! Utilities for time parsing and arithmetic using chrono.

use chrono::{DateTime, Duration, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// The instant `days` whole days after `time`.
pub fn days_after(time: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    time + Duration::days(i64::from(days))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_after_crosses_month() {
        let start = parse_utc("2025-10-18T09:30:00Z").unwrap();
        assert_eq!(days_after(start, 30), parse_utc("2025-11-17T09:30:00Z").unwrap());
    }

    #[test]
    fn test_parse_utc_rejects_garbage() {
        assert!(parse_utc("yesterday").is_err());
    }
}
