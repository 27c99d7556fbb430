//! Application controller.
//!
//! [`App`] owns the record store, the database, and the configuration, and
//! is the only place mutations happen. Every successful mutation is
//! followed unconditionally by a full flush to storage; there is no dirty
//! tracking and no batching.

use chrono::{NaiveDate, Utc};

use crate::duration::{compute_duration, parse_date, parse_time};
use crate::error::{CoreError, ValidationError};
use crate::record::SleepRecord;
use crate::stats::{self, DailyTotal, SleepSummary};
use crate::storage::{Config, Database};
use crate::store::RecordStore;

/// Blocking yes/no collaborator for destructive actions. The CLI backs
/// this with stdin; tests use scripted stubs.
pub trait ConfirmationPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Application state: store, storage, and configuration in one place.
pub struct App {
    store: RecordStore,
    db: Database,
    config: Config,
}

impl App {
    /// Build the controller, loading prior records from the database.
    pub fn new(db: Database, config: Config) -> Result<Self, CoreError> {
        let store = RecordStore::new(db.load_records()?);
        Ok(Self { store, db, config })
    }

    pub fn records(&self) -> &[SleepRecord] {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Record a new sleep session from raw form input.
    ///
    /// All three fields must be non-empty; the duration is always derived
    /// from the times, crossing midnight when the end precedes the start.
    /// Validation failures abort before any state change.
    pub fn create(
        &mut self,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<SleepRecord, CoreError> {
        let date = required(date, "date")?;
        let start_time = required(start_time, "start time")?;
        let end_time = required(end_time, "end time")?;

        let date = parse_date(date)?;
        let start_time = parse_time(start_time)?;
        let end_time = parse_time(end_time)?;

        let record = SleepRecord {
            id: self.fresh_id(),
            date,
            start_time,
            end_time,
            duration: compute_duration(start_time, end_time),
        };
        self.store.push(record.clone());
        self.flush()?;
        Ok(record)
    }

    /// Delete one record after confirmation.
    ///
    /// `Ok(false)` means the prompt was declined and nothing changed.
    /// An unknown id is not an error: the store is flushed unchanged and
    /// the caller still re-renders on `Ok(true)`.
    pub fn delete(
        &mut self,
        id: i64,
        prompt: &mut dyn ConfirmationPrompt,
    ) -> Result<bool, CoreError> {
        if !prompt.confirm("Delete this record?") {
            return Ok(false);
        }
        self.store.remove(id);
        self.flush()?;
        Ok(true)
    }

    /// Empty the store after confirmation.
    pub fn clear_all(&mut self, prompt: &mut dyn ConfirmationPrompt) -> Result<bool, CoreError> {
        if !prompt.confirm("Are you sure you want to delete all data?") {
            return Ok(false);
        }
        self.store.clear();
        self.flush()?;
        Ok(true)
    }

    pub fn summary(&self) -> SleepSummary {
        stats::summarize(self.store.records())
    }

    pub fn rolling(&self, n: u32, today: NaiveDate) -> Vec<DailyTotal> {
        stats::rolling_series(self.store.records(), n, today)
    }

    fn flush(&self) -> Result<(), CoreError> {
        self.db.save_records(self.store.records())
    }

    /// Creation-timestamp id, bumped past the store's max when the clock
    /// lands on a value that is already taken.
    fn fresh_id(&self) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        match self.store.max_id() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}
