use chrono::Local;
use clap::Subcommand;
use sleeplog_core::render::{render_summary, ChartKind, ChartRegistry, ChartSpec};
use sleeplog_core::stats::{MONTHLY_WINDOW_DAYS, WEEKLY_WINDOW_DAYS};

use super::open_app;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Day count, average, and status against the 7.5h target
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// 7-day rolling chart
    Weekly,
    /// 30-day rolling chart
    Monthly,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = open_app()?;
    let today = Local::now().date_naive();

    match action {
        StatsAction::Summary { json } => {
            let summary = app.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_summary(&summary));
            }
        }
        StatsAction::Weekly => {
            let charts = &app.config().charts;
            let spec = ChartSpec::from_series(
                &app.rolling(WEEKLY_WINDOW_DAYS, today),
                "Weekly Sleep (hrs)",
                &charts.weekly_fill,
                &charts.weekly_stroke,
            );
            let mut registry = ChartRegistry::new();
            print!("{}", registry.redraw(ChartKind::Weekly, spec).output());
        }
        StatsAction::Monthly => {
            let charts = &app.config().charts;
            let spec = ChartSpec::from_series(
                &app.rolling(MONTHLY_WINDOW_DAYS, today),
                "Monthly Sleep (hrs)",
                &charts.monthly_fill,
                &charts.monthly_stroke,
            );
            let mut registry = ChartRegistry::new();
            print!("{}", registry.redraw(ChartKind::Monthly, spec).output());
        }
    }
    Ok(())
}
