use clap::Subcommand;
use sleeplog_core::render::render_records;

use super::{open_app, AlwaysConfirm, StdinPrompt};

#[derive(Subcommand)]
pub enum RecordAction {
    /// Log a sleep session
    Add {
        /// Calendar date (YYYY-MM-DD)
        date: String,
        /// Bedtime (HH:MM, 24h)
        start: String,
        /// Wake-up time (HH:MM, 24h)
        end: String,
    },
    /// List records, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a record by id
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete all records
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: RecordAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        RecordAction::Add { date, start, end } => {
            let record = app.create(&date, &start, &end)?;
            println!(
                "recorded {} hrs on {} (id {})",
                record.duration, record.date, record.id
            );
        }
        RecordAction::List { json } => {
            if json {
                let sorted = app.store().sorted_for_display();
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            } else {
                print!("{}", render_records(app.records(), app.config()));
            }
        }
        RecordAction::Delete { id, yes } => {
            let proceeded = if yes {
                app.delete(id, &mut AlwaysConfirm)?
            } else {
                app.delete(id, &mut StdinPrompt)?
            };
            if proceeded {
                print!("{}", render_records(app.records(), app.config()));
            } else {
                println!("aborted");
            }
        }
        RecordAction::Clear { yes } => {
            let proceeded = if yes {
                app.clear_all(&mut AlwaysConfirm)?
            } else {
                app.clear_all(&mut StdinPrompt)?
            };
            if proceeded {
                print!("{}", render_records(app.records(), app.config()));
            } else {
                println!("aborted");
            }
        }
    }
    Ok(())
}
