//! Record list rendering.

use chrono::{NaiveTime, Timelike};

use crate::record::SleepRecord;
use crate::storage::Config;

/// `11:05 PM` on the 12-hour clock, `23:05` otherwise.
pub fn format_clock(time: NaiveTime, twelve_hour: bool) -> String {
    if !twelve_hour {
        return time.format("%H:%M").to_string();
    }
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    // Hour 0 reads as 12 on a 12-hour clock.
    let clock_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{clock_hour}:{:02} {meridiem}", time.minute())
}

/// The record list in display order (date descending, then id descending),
/// one line per record, or the empty-state message.
///
/// The id shown per line is the delete affordance: it is what
/// `record delete <id>` takes.
pub fn render_records(records: &[SleepRecord], config: &Config) -> String {
    let mut sorted = records.to_vec();
    sorted.sort_by(SleepRecord::display_cmp);

    if sorted.is_empty() {
        return "No records found.\n".to_string();
    }

    let twelve_hour = config.ui.twelve_hour_clock;
    let mut out = String::new();
    for record in &sorted {
        out.push_str(&format!(
            "{}: {} - {}  {} hrs  (id {})\n",
            record.date,
            format_clock(record.start_time, twelve_hour),
            format_clock(record.end_time, twelve_hour),
            record.duration,
            record.id,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn record(id: i64, date: &str) -> SleepRecord {
        SleepRecord {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: t(23, 0),
            end_time: t(7, 0),
            duration: 8.0,
        }
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(format_clock(t(23, 5), true), "11:05 PM");
        assert_eq!(format_clock(t(0, 15), true), "12:15 AM");
        assert_eq!(format_clock(t(12, 0), true), "12:00 PM");
        assert_eq!(format_clock(t(9, 30), true), "9:30 AM");
    }

    #[test]
    fn twenty_four_hour_clock() {
        assert_eq!(format_clock(t(23, 5), false), "23:05");
        assert_eq!(format_clock(t(0, 15), false), "00:15");
    }

    #[test]
    fn empty_store_shows_empty_state() {
        assert_eq!(render_records(&[], &Config::default()), "No records found.\n");
    }

    #[test]
    fn list_is_display_sorted_and_formatted() {
        let records = vec![record(1, "2024-01-01"), record(2, "2024-01-02")];
        let out = render_records(&records, &Config::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-01-02"));
        assert!(lines[0].contains("11:00 PM - 7:00 AM"));
        assert!(lines[0].contains("8 hrs"));
        assert!(lines[0].contains("(id 2)"));
        assert!(lines[1].starts_with("2024-01-01"));
    }
}
