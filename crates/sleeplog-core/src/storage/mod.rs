mod config;
pub mod database;

pub use config::Config;
pub use database::Database;

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns `~/.config/sleeplog[-dev]/`, creating it if needed.
///
/// `SLEEPLOG_DATA_DIR` overrides the location outright (used by tests);
/// set `SLEEPLOG_ENV=dev` to use the development data directory.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let dir = if let Ok(dir) = std::env::var("SLEEPLOG_DATA_DIR") {
        PathBuf::from(dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("SLEEPLOG_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("sleeplog-dev")
        } else {
            base_dir.join("sleeplog")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
