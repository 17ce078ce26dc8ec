//! Status Notifier CLI
//!
//! Checks the configured endpoints once and alerts the chat webhook about failures.

use std::path::PathBuf;

use clap::Parser;
use status_notifier::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "status-notifier")]
#[command(about = "Check HTTP endpoints and alert a chat webhook when any is down")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint to check; repeat to check several (replaces the configured list)
    #[arg(short, long = "endpoint")]
    endpoints: Vec<String>,

    /// Webhook URL (overrides config file and environment)
    #[arg(long)]
    webhook_url: Option<String>,

    /// Role id mentioned in the notification (overrides config file and environment)
    #[arg(long)]
    role_id: Option<String>,

    /// Print the notification instead of posting it
    #[arg(long)]
    dry_run: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, endpoints={:?}, dry_run={}, log_level={:?}",
        args.config,
        args.endpoints,
        args.dry_run,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.resolve_secrets()?;

    if !args.endpoints.is_empty() {
        config.endpoints = args.endpoints;
    }
    if let Some(webhook_url) = args.webhook_url {
        config.webhook.url = webhook_url;
    }
    if let Some(role_id) = args.role_id {
        config.webhook.role_id = role_id;
    }

    config.validate()?;

    let report = status_notifier::run(config, args.dry_run).await?;
    tracing::debug!(
        "Run finished: {} checked, {} failing, notified={}",
        report.results.len(),
        report.failures.len(),
        report.notified
    );

    Ok(())
}
