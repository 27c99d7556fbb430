//! Rolling day series for the charts.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::daily_totals;
use crate::record::SleepRecord;

pub const WEEKLY_WINDOW_DAYS: u32 = 7;
pub const MONTHLY_WINDOW_DAYS: u32 = 30;

/// One chart point: a calendar date and the hours slept on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Totals for the `n` calendar days ending at `today` inclusive, oldest
/// first. Days without records contribute 0.0.
///
/// `today` is an explicit parameter so callers (and tests) control the
/// reference date instead of depending on the wall clock.
pub fn rolling_series(records: &[SleepRecord], n: u32, today: NaiveDate) -> Vec<DailyTotal> {
    let totals = daily_totals(records);
    (0..n)
        .rev()
        .map(|offset| {
            let date = today - Days::new(u64::from(offset));
            DailyTotal {
                date,
                hours: totals.get(&date).copied().unwrap_or(0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn record(date: NaiveDate, duration: f64) -> SleepRecord {
        SleepRecord {
            id: 1,
            date,
            start_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            duration,
        }
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn window_ends_today_and_ascends() {
        let today = d("2024-01-07");
        let series = rolling_series(&[], WEEKLY_WINDOW_DAYS, today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, d("2024-01-01"));
        assert_eq!(series[6].date, today);
    }

    #[test]
    fn absent_days_are_zero_filled() {
        let today = d("2024-01-07");
        let records = vec![record(d("2024-01-05"), 7.5), record(d("2024-01-07"), 6.0)];
        let series = rolling_series(&records, WEEKLY_WINDOW_DAYS, today);
        let hours: Vec<f64> = series.iter().map(|p| p.hours).collect();
        assert_eq!(hours, vec![0.0, 0.0, 0.0, 0.0, 7.5, 0.0, 6.0]);
    }

    #[test]
    fn records_outside_the_window_are_ignored() {
        let today = d("2024-01-31");
        let records = vec![record(d("2023-12-01"), 8.0)];
        let series = rolling_series(&records, MONTHLY_WINDOW_DAYS, today);
        assert_eq!(series.len(), 30);
        assert!(series.iter().all(|p| p.hours == 0.0));
        assert_eq!(series[0].date, d("2024-01-02"));
    }
}
