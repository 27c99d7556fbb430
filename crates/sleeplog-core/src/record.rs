//! Sleep record model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One logged sleep session.
///
/// Serialized with camelCase keys and `HH:MM` time strings, which is the
/// layout of the persisted record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    /// Milliseconds since the Unix epoch at creation time. Unique within
    /// the store.
    pub id: i64,
    /// Calendar date the session is attributed to.
    pub date: NaiveDate,
    #[serde(with = "time_hm")]
    pub start_time: NaiveTime,
    #[serde(with = "time_hm")]
    pub end_time: NaiveTime,
    /// Hours, rounded to 2 decimals. Always derived from the times at
    /// creation, never user-supplied.
    pub duration: f64,
}

impl SleepRecord {
    /// Display order: date descending, then id descending.
    pub fn display_cmp(a: &SleepRecord, b: &SleepRecord) -> Ordering {
        b.date.cmp(&a.date).then(b.id.cmp(&a.id))
    }
}

/// `HH:MM` serde codec for `NaiveTime` (the chrono default emits seconds).
pub(crate) mod time_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
