//! Per-day aggregation.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::record::SleepRecord;

/// Total sleep hours per calendar date. Multiple sessions on the same date
/// (a night plus a nap) add up.
pub fn daily_totals(records: &[SleepRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_insert(0.0) += record.duration;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

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
    fn sessions_on_one_date_add_up() {
        let records = vec![
            record("2024-01-01", 6.0),
            record("2024-01-01", 2.0),
            record("2024-01-02", 7.5),
        ];
        let totals = daily_totals(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&records[0].date], 8.0);
        assert_eq!(totals[&records[2].date], 7.5);
    }

    #[test]
    fn grand_total_is_preserved() {
        let records = vec![
            record("2024-01-01", 6.25),
            record("2024-01-01", 1.5),
            record("2024-01-03", 8.0),
            record("2024-01-04", 0.0),
        ];
        let input_total: f64 = records.iter().map(|r| r.duration).sum();
        let grouped_total: f64 = daily_totals(&records).values().sum();
        assert!((input_total - grouped_total).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(daily_totals(&[]).is_empty());
    }
}
