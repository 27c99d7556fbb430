use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sleeplog", version, about = "Sleeplog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sleep record management
    Record {
        #[command(subcommand)]
        action: commands::record::RecordAction,
    },
    /// Sleep statistics and charts
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Full dashboard: record list, summary, and both charts
    Show,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Record { action } => commands::record::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Show => commands::show::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
