//! order-ingest server binary
//!
//! Loads configuration, installs logging and serves the ingest API.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use order_ingest::config::{Config, DEFAULT_CONFIG_PATH};
use order_ingest::server;
use order_ingest::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Batch order ingestion service
#[derive(Debug, Parser)]
#[command(name = "ingest-server", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Validate the configuration, print it and exit
    #[arg(long)]
    check: bool,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config)
        .await
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    init_logging(config.logging()).context("initializing logging")?;

    if cli.check {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    server::builder::run_server(config)
        .await
        .context("running server")
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
