//! # Sleeplog Core Library
//!
//! This library provides the core logic for the Sleeplog sleep tracker.
//! All state transitions are pure and synchronous; the CLI binary is a thin
//! layer that wires user actions to the [`App`] controller and prints what
//! the `render` module produces.
//!
//! ## Architecture
//!
//! - **Record store**: the in-memory list of sleep sessions, loaded once at
//!   startup and flushed to storage after every mutation
//! - **Storage**: SQLite-backed key-value persistence for the record list
//!   plus TOML-based configuration
//! - **Stats**: per-day totals, average-vs-target summary, and rolling
//!   7/30-day series with an explicit reference date
//! - **Render**: pure text renderers for the record list, summary panel,
//!   and the two rolling charts
//!
//! ## Key Components
//!
//! - [`App`]: application controller owning the store and storage
//! - [`SleepRecord`]: one logged sleep session
//! - [`Database`]: record persistence
//! - [`Config`]: user preferences

pub mod app;
pub mod duration;
pub mod error;
pub mod record;
pub mod render;
pub mod stats;
pub mod storage;
pub mod store;

pub use app::{App, ConfirmationPrompt};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use record::SleepRecord;
pub use stats::{DailyTotal, SleepStatus, SleepSummary};
pub use storage::{Config, Database};
pub use store::RecordStore;
