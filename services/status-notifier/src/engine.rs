//! Engine: checks every endpoint once and notifies about the failures

use std::sync::Arc;

use crate::check::CheckResult;
use crate::config::{Config, TransportErrorPolicy};
use crate::io::HttpClient;
use crate::notifier::{NotificationPayload, Notifier};

/// What a single run observed and did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per endpoint checked, in configured order
    pub results: Vec<CheckResult>,
    /// Failure lines, in configured endpoint order
    pub failures: Vec<String>,
    /// The payload handed to the notifier, if any failure was found
    pub payload: Option<NotificationPayload>,
    pub notified: bool,
}

impl RunReport {
    pub fn healthy(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The engine checks endpoints sequentially and dispatches one notification per run
pub struct Engine {
    endpoints: Vec<String>,
    role_id: String,
    on_transport_error: TransportErrorPolicy,
    http: Arc<dyn HttpClient>,
    notifier: Arc<dyn Notifier>,
}

impl Engine {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            endpoints: config.endpoints.clone(),
            role_id: config.webhook.role_id.clone(),
            on_transport_error: config.on_transport_error,
            http,
            notifier,
        }
    }

    /// GET one endpoint and record its status.
    ///
    /// Transport failures are returned as errors under [`TransportErrorPolicy::Abort`]
    /// and recorded as unreachable under [`TransportErrorPolicy::Report`].
    pub async fn check_endpoint(&self, url: &str) -> crate::Result<CheckResult> {
        match self.http.get(url).await {
            Ok(response) => Ok(CheckResult::status(url, response.status)),
            Err(e) => match self.on_transport_error {
                TransportErrorPolicy::Abort => Err(e),
                TransportErrorPolicy::Report => {
                    tracing::debug!("Recording '{}' as unreachable: {}", url, e);
                    Ok(CheckResult::unreachable(url, transport_reason(url, &e)))
                }
            },
        }
    }

    /// Run one pass over all endpoints.
    ///
    /// Endpoints are awaited one at a time. When at least one fails, exactly one
    /// notification is sent after the last check; a healthy run sends nothing.
    pub async fn run(&self) -> crate::Result<RunReport> {
        let mut report = RunReport::default();

        for url in &self.endpoints {
            let result = self.check_endpoint(url).await?;
            tracing::debug!("Checked '{}': {}", url, result.outcome);

            if let Some(message) = result.failure_message() {
                println!("{}", message);
                tracing::warn!("{}", message);
                report.failures.push(message);
            }
            report.results.push(result);
        }

        if report.failures.is_empty() {
            tracing::info!("All {} endpoints healthy", report.results.len());
            return Ok(report);
        }

        let payload = NotificationPayload::new(&self.role_id, &report.failures);
        tracing::debug!(
            "Dispatching {} failures via '{}'",
            report.failures.len(),
            self.notifier.type_name()
        );
        self.notifier.notify(&payload).await?;
        report.payload = Some(payload);
        report.notified = true;

        tracing::info!(
            "{} of {} endpoints failing, notification sent",
            report.failures.len(),
            report.results.len()
        );
        Ok(report)
    }
}

/// The part of a failed GET's error worth showing next to the URL
fn transport_reason(url: &str, error: &crate::NotifierError) -> String {
    match error {
        crate::NotifierError::Http(msg) => msg
            .strip_prefix(&format!("GET {} failed: ", url))
            .unwrap_or(msg.as_str())
            .to_string(),
        other => other.to_string(),
    }
}
