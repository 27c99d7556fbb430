//! Sleep duration arithmetic and form-input parsing.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::ValidationError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Elapsed hours between bedtime and wake-up, rounded to 2 decimals.
///
/// An end time earlier than the start is taken to cross midnight exactly
/// once, never more: a session cannot span multiple days.
pub fn compute_duration(start: NaiveTime, end: NaiveTime) -> f64 {
    let start_min = i64::from(start.hour()) * 60 + i64::from(start.minute());
    let mut end_min = i64::from(end.hour()) * 60 + i64::from(end.minute());
    if end_min < start_min {
        end_min += MINUTES_PER_DAY;
    }
    round2((end_min - start_min) as f64 / 60.0)
}

/// Round hours to 2 decimal places.
pub(crate) fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Parse a `YYYY-MM-DD` form input.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Parse an `HH:MM` (24h) form input.
pub fn parse_time(input: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn same_day() {
        assert_eq!(compute_duration(t(22, 0), t(23, 30)), 1.5);
    }

    #[test]
    fn crosses_midnight() {
        assert_eq!(compute_duration(t(23, 0), t(7, 0)), 8.0);
    }

    #[test]
    fn zero_length() {
        assert_eq!(compute_duration(t(8, 15), t(8, 15)), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 50 minutes = 0.8333... hours
        assert_eq!(compute_duration(t(22, 0), t(22, 50)), 0.83);
        // 100 minutes = 1.6666... hours
        assert_eq!(compute_duration(t(22, 0), t(23, 40)), 1.67);
    }

    #[test]
    fn parse_date_accepts_iso() {
        assert!(parse_date("2024-01-01").is_ok());
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn parse_time_accepts_hhmm() {
        assert_eq!(parse_time("23:05").unwrap(), t(23, 5));
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("7pm").is_err());
        assert!(parse_time("").is_err());
    }

    proptest! {
        #[test]
        fn duration_bounds(sh in 0u32..24, sm in 0u32..60, eh in 0u32..24, em in 0u32..60) {
            let d = compute_duration(t(sh, sm), t(eh, em));
            prop_assert!(d >= 0.0);
            prop_assert!(d < 24.0);
        }

        #[test]
        fn same_day_is_exact_difference(sh in 0u32..24, sm in 0u32..60, extra in 0i64..600) {
            let start_min = i64::from(sh) * 60 + i64::from(sm);
            let end_min = (start_min + extra).min(1439);
            let end = t((end_min / 60) as u32, (end_min % 60) as u32);
            let expect = round2((end_min - start_min) as f64 / 60.0);
            prop_assert_eq!(compute_duration(t(sh, sm), end), expect);
        }
    }
}
