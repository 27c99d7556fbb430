pub mod config;
pub mod record;
pub mod show;
pub mod stats;

use std::io::{self, BufRead, Write};

use sleeplog_core::{App, Config, ConfirmationPrompt, Database};

/// Open the database and build the application controller.
pub(crate) fn open_app() -> Result<App, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    Ok(App::new(db, config)?)
}

/// Blocking y/N prompt on stdin. Anything but an explicit yes declines.
pub(crate) struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "Yes")
    }
}

/// Prompt that is always confirmed (`--yes`).
pub(crate) struct AlwaysConfirm;

impl ConfirmationPrompt for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}
