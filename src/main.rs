mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "murakami")]
#[command(about = "Check Villa Murakami availability and nightly prices")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every day of the next six months with its status and price
    Availability {
        /// Use the built-in fallback data instead of fetching the feed
        #[arg(long)]
        mock: bool,

        /// Print the same JSON payload the server returns
        #[arg(long)]
        json: bool,
    },
    /// Check whether a single date is booked
    Check {
        /// Date to check (YYYY-MM-DD)
        date: String,

        /// Use the built-in fallback data instead of fetching the feed
        #[arg(long)]
        mock: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Availability { mock, json } => commands::availability::run(mock, json).await,
        Commands::Check { date, mock } => commands::check::run(&date, mock).await,
    }
}
