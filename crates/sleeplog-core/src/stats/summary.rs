//! Average-vs-target summary.

use serde::{Deserialize, Serialize};

use super::daily_totals;
use crate::record::SleepRecord;

/// Reference average a night of sleep is measured against, in hours.
pub const TARGET_HOURS: f64 = 7.5;

/// Categorical outcome of comparing the average against [`TARGET_HOURS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepStatus {
    /// Average above the target.
    Over,
    /// Average below the target.
    Under,
    /// Average exactly on target.
    Balanced,
    /// No records yet; placeholder, not an error.
    NoData,
}

impl SleepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SleepStatus::Over => "Over Sleep",
            SleepStatus::Under => "Under Sleep",
            SleepStatus::Balanced => "Perfect Balance",
            SleepStatus::NoData => "-",
        }
    }
}

/// Summary panel contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepSummary {
    /// Number of distinct dates with at least one record.
    pub day_count: usize,
    /// Total hours divided by `day_count`; 0.0 when there is no data.
    pub average_hours: f64,
    pub status: SleepStatus,
}

impl SleepSummary {
    /// Sentence explaining how the average relates to the target. Empty
    /// when there is no data.
    pub fn detail_sentence(&self) -> String {
        let diff = self.average_hours - TARGET_HOURS;
        match self.status {
            SleepStatus::Over => format!(
                "You are sleeping {diff:.2} hours more than the {TARGET_HOURS}h average."
            ),
            SleepStatus::Under => format!(
                "You are sleeping {:.2} hours less than the {TARGET_HOURS}h average.",
                diff.abs()
            ),
            SleepStatus::Balanced => {
                format!("You are sleeping exactly {TARGET_HOURS} hours on average.")
            }
            SleepStatus::NoData => String::new(),
        }
    }
}

/// Distinct-day count, average hours per day, and status vs the target.
/// Empty input yields the placeholder summary, not an error.
pub fn summarize(records: &[SleepRecord]) -> SleepSummary {
    let totals = daily_totals(records);
    if totals.is_empty() {
        return SleepSummary {
            day_count: 0,
            average_hours: 0.0,
            status: SleepStatus::NoData,
        };
    }

    let day_count = totals.len();
    let grand_total: f64 = totals.values().sum();
    let average_hours = grand_total / day_count as f64;

    // Exact comparison on purpose: durations are 2-decimal values, so a
    // single 7.50h night does land on the target exactly.
    let status = if average_hours > TARGET_HOURS {
        SleepStatus::Over
    } else if average_hours < TARGET_HOURS {
        SleepStatus::Under
    } else {
        SleepStatus::Balanced
    };

    SleepSummary {
        day_count,
        average_hours,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn record(date: &str, duration: f64) -> SleepRecord {
        SleepRecord {
            id: 1,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            duration,
        }
    }

    #[test]
    fn empty_input_is_the_placeholder() {
        let summary = summarize(&[]);
        assert_eq!(summary.day_count, 0);
        assert_eq!(summary.average_hours, 0.0);
        assert_eq!(summary.status, SleepStatus::NoData);
        assert_eq!(summary.status.label(), "-");
        assert!(summary.detail_sentence().is_empty());
    }

    #[test]
    fn two_sessions_one_day_average_over() {
        let records = vec![record("2024-01-01", 6.0), record("2024-01-01", 2.0)];
        let summary = summarize(&records);
        assert_eq!(summary.day_count, 1);
        assert_eq!(summary.average_hours, 8.0);
        assert_eq!(summary.status, SleepStatus::Over);
        assert_eq!(
            summary.detail_sentence(),
            "You are sleeping 0.50 hours more than the 7.5h average."
        );
    }

    #[test]
    fn short_nights_average_under() {
        let records = vec![record("2024-01-01", 6.0), record("2024-01-02", 6.5)];
        let summary = summarize(&records);
        assert_eq!(summary.day_count, 2);
        assert_eq!(summary.average_hours, 6.25);
        assert_eq!(summary.status, SleepStatus::Under);
        assert_eq!(
            summary.detail_sentence(),
            "You are sleeping 1.25 hours less than the 7.5h average."
        );
    }

    #[test]
    fn exact_target_is_balanced() {
        let records = vec![record("2024-01-01", 7.5)];
        let summary = summarize(&records);
        assert_eq!(summary.status, SleepStatus::Balanced);
        assert_eq!(
            summary.detail_sentence(),
            "You are sleeping exactly 7.5 hours on average."
        );
    }
}
