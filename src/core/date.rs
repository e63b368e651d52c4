//! UTC-only date helpers.
//!
//! Every function takes and returns [`Instant`] by value; nothing here
//! depends on the local timezone of the host.

use crate::utils::error::{Result, UtilsError};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// A point in time, always in UTC.
pub type Instant = DateTime<Utc>;

const LAST_MILLI_OF_DAY: i64 = 24 * 60 * 60 * 1000 - 1;

static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static pattern"));

/// Midnight (00:00:00.000) of the instant's UTC calendar day.
pub fn start_of_day(instant: Instant) -> Instant {
    instant.date_naive().and_time(chrono::NaiveTime::MIN).and_utc()
}

/// 23:59:59.999 of the instant's UTC calendar day.
pub fn end_of_day(instant: Instant) -> Instant {
    start_of_day(instant) + TimeDelta::milliseconds(LAST_MILLI_OF_DAY)
}

/// Shifts `instant` by `days` whole days, keeping the time of day.
///
/// Results beyond the representable range saturate at
/// [`DateTime::<Utc>::MIN_UTC`] or [`DateTime::<Utc>::MAX_UTC`].
pub fn add_days(instant: Instant, days: i64) -> Instant {
    TimeDelta::try_days(days)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

pub fn is_same_day(a: Instant, b: Instant) -> bool {
    a.date_naive() == b.date_naive()
}

/// Renders the UTC calendar date as `YYYY-MM-DD`.
///
/// The year is zero-padded to at least four digits, so year 9 renders as
/// `0009` and year 10000 as `10000` (no sign).
pub fn format_date(instant: Instant) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        instant.year(),
        instant.month(),
        instant.day()
    )
}

/// Lexical check for `YYYY-MM-DD`. Does not check that the date exists:
/// `"2025-13-01"` passes.
pub fn is_valid_date_format(text: &str) -> bool {
    DATE_FORMAT.is_match(text)
}

/// Parses `YYYY-MM-DD` into the start of that UTC day.
pub fn parse_date(text: &str) -> Result<Instant> {
    if !is_valid_date_format(text) {
        return Err(UtilsError::InvalidDate {
            value: text.to_string(),
        });
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|_| UtilsError::InvalidDate {
            value: text.to_string(),
        })
}

/// Parses an RFC 3339 timestamp (converted to UTC) or a plain `YYYY-MM-DD`.
pub fn parse_instant(text: &str) -> Result<Instant> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(timestamp) => Ok(timestamp.with_timezone(&Utc)),
        Err(_) => parse_date(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> Instant {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap() + TimeDelta::milliseconds(ms as i64)
    }

    #[test]
    fn test_start_of_day_clears_time() {
        let s = start_of_day(utc(2025, 11, 2, 15, 30, 45, 123));
        assert_eq!((s.year(), s.month(), s.day()), (2025, 11, 2));
        assert_eq!((s.hour(), s.minute(), s.second()), (0, 0, 0));
        assert_eq!(s.timestamp_subsec_millis(), 0);
    }

    #[test]
    fn test_end_of_day_sets_last_millisecond() {
        let e = end_of_day(utc(2025, 11, 2, 1, 2, 3, 4));
        assert_eq!((e.year(), e.month(), e.day()), (2025, 11, 2));
        assert_eq!((e.hour(), e.minute(), e.second()), (23, 59, 59));
        assert_eq!(e.timestamp_subsec_millis(), 999);
    }

    #[test]
    fn test_add_days_saturates() {
        let t = utc(2025, 1, 1, 0, 0, 0, 0);
        assert_eq!(add_days(t, i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(add_days(t, i64::MIN), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_date_format_is_ascii_only() {
        // Arabic-Indic digits are Unicode digits but not part of the format
        assert!(!is_valid_date_format("٢٠٢٥-11-02"));
        assert!(!is_valid_date_format("2025-11-02 "));
        assert!(!is_valid_date_format("12025-11-02"));
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, utc(2024, 2, 29, 0, 0, 0, 0));

        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2025-1-2").is_err());
    }

    #[test]
    fn test_parse_instant_converts_offset_to_utc() {
        let t = parse_instant("2025-11-02T01:30:00+02:00").unwrap();
        assert_eq!(t, utc(2025, 11, 1, 23, 30, 0, 0));

        let d = parse_instant("2025-11-02").unwrap();
        assert_eq!(d, utc(2025, 11, 2, 0, 0, 0, 0));

        assert!(parse_instant("yesterday").is_err());
    }
}
