use chrono::Local;
use sleeplog_core::render::{render_records, render_summary, ChartKind, ChartRegistry, ChartSpec};
use sleeplog_core::stats::{MONTHLY_WINDOW_DAYS, WEEKLY_WINDOW_DAYS};

use super::open_app;

/// The full dashboard: record list, summary panel, and both charts.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = open_app()?;
    let today = Local::now().date_naive();
    let charts = &app.config().charts;
    let mut registry = ChartRegistry::new();

    println!("== Records ==");
    print!("{}", render_records(app.records(), app.config()));
    println!();

    println!("== Summary ==");
    print!("{}", render_summary(&app.summary()));
    println!();

    let weekly = ChartSpec::from_series(
        &app.rolling(WEEKLY_WINDOW_DAYS, today),
        "Weekly Sleep (hrs)",
        &charts.weekly_fill,
        &charts.weekly_stroke,
    );
    print!("{}", registry.redraw(ChartKind::Weekly, weekly).output());
    println!();

    let monthly = ChartSpec::from_series(
        &app.rolling(MONTHLY_WINDOW_DAYS, today),
        "Monthly Sleep (hrs)",
        &charts.monthly_fill,
        &charts.monthly_stroke,
    );
    print!("{}", registry.redraw(ChartKind::Monthly, monthly).output());

    Ok(())
}
