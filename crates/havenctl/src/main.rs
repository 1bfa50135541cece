//! havenctl - talks to the Haven dashboard backend.
//!
//! Ctrl-C fires the command's cancellation token; a cancelled call prints
//! nothing on stdout and exits with 130.

use anyhow::Result;
use clap::Parser;
use haven_client::{ApiClient, CancellationToken, ClientConfig};
use havenctl::cli::Cli;
use havenctl::commands::{self, Report};
use havenctl::errors::EXIT_CONFIG_ERROR;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Log filter variable, e.g. `HAVEN_LOG=haven_client=debug`
const LOG_ENV: &str = "HAVEN_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match ClientConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };
    let client = match ApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };
    debug!("Using backend {}", client.config().base_url);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let report = commands::run(&client, cli.command, cli.json, &cancel).await?;
    match &report {
        Report::Rendered(output) => println!("{}", output),
        Report::Failed(e) => {
            if e.is_transport() {
                eprintln!("Error: {}", e.message);
            } else {
                eprintln!("Error {}: {}", e.code, e.message);
            }
        }
        Report::Cancelled => warn!("Interrupted before the backend answered"),
    }

    std::process::exit(report.exit_code());
}
