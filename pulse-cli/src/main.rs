use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod commands;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Pulse metrics dashboard CLI", long_about = None)]
struct Cli {
    /// Daemon address (defaults to PULSE_ADDR or http://127.0.0.1:4680)
    #[arg(long, global = true)]
    addr: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metrics dashboard
    Dashboard {
        /// Time range: 1m, 3m, 6m or 1y
        #[arg(short, long, default_value = "6m")]
        range: String,
    },

    /// Record a metric sample
    Record {
        /// Series name (e.g. "adoptionRate")
        series: String,

        /// Observed value
        value: f64,

        /// Observation timestamp (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<String>,
    },

    /// Reset the store and load demo data
    Seed {
        /// Days of history to generate
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Check daemon health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = client::PulseClient::new(cli.addr);

    match cli.command {
        Commands::Dashboard { range } => commands::dashboard::show(&client, &range).await,
        Commands::Record { series, value, at } => {
            commands::record::record(&client, &series, value, at.as_deref()).await
        }
        Commands::Seed { days } => commands::seed::seed(&client, days).await,
        Commands::Health => commands::health::health(&client).await,
    }
}
