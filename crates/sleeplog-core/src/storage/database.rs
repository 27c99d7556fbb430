//! SQLite-backed persistence for the record list.
//!
//! The entire list is stored as one JSON array under a fixed key in a
//! key-value table and overwritten wholesale on every flush. There is no
//! versioning and no migration path beyond creating the table.

use rusqlite::{params, Connection};
use std::path::Path;

use super::data_dir;
use crate::error::{CoreError, StorageError};
use crate::record::SleepRecord;

/// Key under which the serialized record list lives.
pub const RECORDS_KEY: &str = "sleep_records";

/// SQLite database holding the persisted record list.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/sleeplog.db`, creating the file
    /// and schema if they don't exist.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("sleeplog.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Persist the full record list, replacing any prior value.
    pub fn save_records(&self, records: &[SleepRecord]) -> Result<(), CoreError> {
        let value = serde_json::to_string(records)?;
        self.kv_set(RECORDS_KEY, &value)?;
        Ok(())
    }

    /// Load the record list.
    ///
    /// An absent key or a malformed stored value degrades to an empty
    /// list; individual records that fail shape validation are dropped so
    /// one corrupt entry cannot poison the rest.
    pub fn load_records(&self) -> Result<Vec<SleepRecord>, CoreError> {
        let Some(value) = self.kv_get(RECORDS_KEY)? else {
            return Ok(Vec::new());
        };
        let Ok(raw) = serde_json::from_str::<Vec<serde_json::Value>>(&value) else {
            return Ok(Vec::new());
        };
        Ok(raw
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect())
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
