//! Status Notifier - endpoint status checker with chat webhook alerts
//!
//! Checks a list of HTTP endpoints once and posts a single notification to a
//! chat webhook when any of them answers with an error status.

pub mod check;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod notifier;
pub mod webhook;

pub use config::{load_config, Config};
pub use engine::{Engine, RunReport};
pub use error::{NotifierError, Result};

use std::sync::Arc;
use std::time::Duration;

use crate::io::ReqwestHttpClient;
use crate::notifier::{Notifier, StdoutNotifier};
use crate::webhook::WebhookNotifier;

/// Run one check pass with the given configuration
pub async fn run(config: Config, dry_run: bool) -> Result<RunReport> {
    let http: Arc<dyn io::HttpClient> = match config.request_timeout_seconds {
        Some(secs) => Arc::new(ReqwestHttpClient::with_timeout(Duration::from_secs(secs))?),
        None => Arc::new(ReqwestHttpClient::default()),
    };

    let notifier: Arc<dyn Notifier> = if dry_run {
        tracing::info!("Dry run: the notification will be printed, not posted");
        Arc::new(StdoutNotifier)
    } else {
        Arc::new(WebhookNotifier::new(&config.webhook, Arc::clone(&http)))
    };

    let engine = Engine::new(&config, http, notifier);

    tracing::info!("Checking {} endpoints", config.endpoints.len());
    engine.run().await
}
