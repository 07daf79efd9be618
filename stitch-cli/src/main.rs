//! Stitch CLI
//!
//! Command-line consumer for the GP record stitch service: submits a stitch
//! job for a patient and polls until the download locator is ready.

mod commands;
mod config;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stitch")]
#[command(about = "GP record stitch service CLI", long_about = None)]
struct Cli {
    /// Stitch service base URL
    #[arg(
        long,
        env = "STITCH_BASE_URL",
        default_value = "http://localhost:8080"
    )]
    base_url: String,

    /// Auth header to attach to every request, as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// Seconds to wait between status polls
    #[arg(long, default_value_t = 3)]
    poll_delay_secs: u64,

    /// Give up after this many "still pending" observations
    #[arg(long, default_value_t = 10)]
    max_pending_polls: u32,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stitch_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
        headers: cli.headers,
        poll_delay: Duration::from_secs(cli.poll_delay_secs),
        max_pending_polls: cli.max_pending_polls,
    };

    handle_command(cli.command, &config).await
}
