//! In-memory record store.

use crate::record::SleepRecord;

/// Insertion-ordered list of sleep records; the single source of truth for
/// a session. Display ordering is produced on demand, never stored.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<SleepRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<SleepRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SleepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: SleepRecord) {
        self.records.push(record);
    }

    /// Remove the record with the given id. Returns `false` when no record
    /// matched; an unknown id is not an error.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Largest id currently in the store, if any.
    pub fn max_id(&self) -> Option<i64> {
        self.records.iter().map(|r| r.id).max()
    }

    /// Records sorted for display: date descending, then id descending.
    pub fn sorted_for_display(&self) -> Vec<SleepRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(SleepRecord::display_cmp);
        sorted
    }
}
