//! economic-sync CLI
//!
//! Reads one inbound order as JSON from stdin and records it in e-conomic.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use economic_sync::ingest::{handle_order, InboundOrder};
use economic_sync::{Credentials, EconomicClient};

/// Record one inbound order in e-conomic.
#[derive(Parser, Debug)]
#[command(name = "economic-sync", version, about)]
struct Cli {
    /// Path to a JSON credentials file. Falls back to the
    /// ECONOMIC_AGREEMENT_GRANT_TOKEN / ECONOMIC_APP_SECRET_TOKEN
    /// environment variables.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let credentials = Credentials::load(cli.config.as_deref())?;
    let client = EconomicClient::new(credentials)?;

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read order from stdin")?;
    let order: InboundOrder =
        serde_json::from_str(&raw).context("failed to parse inbound order")?;

    handle_order(&client, &order).await?;
    println!("Order handled successfully");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
