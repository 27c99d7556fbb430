//! Statistics module for Sleeplog
//!
//! This module derives everything the summary panel and the charts show
//! from the raw record list: per-day totals, the average-vs-target
//! summary, and the rolling day series used by the 7- and 30-day charts.

mod daily;
mod rolling;
mod summary;

pub use daily::daily_totals;
pub use rolling::{rolling_series, DailyTotal, MONTHLY_WINDOW_DAYS, WEEKLY_WINDOW_DAYS};
pub use summary::{summarize, SleepStatus, SleepSummary, TARGET_HOURS};
