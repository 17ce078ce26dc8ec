//! Configuration types for the status notifier

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_WEBHOOK_URL: &str = "STATUS_NOTIFIER_WEBHOOK_URL";
pub const ENV_ROLE_ID: &str = "STATUS_NOTIFIER_ROLE_ID";
pub const ENV_ENDPOINTS: &str = "STATUS_NOTIFIER_ENDPOINTS";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// URLs checked in order on every run
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Per-request timeout; the HTTP client default applies when unset
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    #[serde(default)]
    pub on_transport_error: TransportErrorPolicy,
}

/// Chat webhook the failure summary is posted to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: String,
    /// Role mentioned at the top of every notification
    #[serde(default)]
    pub role_id: String,
}

/// What a run does when an endpoint cannot be reached at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportErrorPolicy {
    /// Stop the run and return the error; nothing is posted
    #[default]
    Abort,
    /// Report the endpoint as unreachable and keep checking the rest
    Report,
}

impl Config {
    /// Apply overrides from the process environment
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        self.apply_env(|key| std::env::var(key).ok());
        Ok(())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_WEBHOOK_URL) {
            tracing::debug!("Webhook URL taken from {}", ENV_WEBHOOK_URL);
            self.webhook.url = url;
        }
        if let Some(role_id) = lookup(ENV_ROLE_ID) {
            tracing::debug!("Role id taken from {}", ENV_ROLE_ID);
            self.webhook.role_id = role_id;
        }
        if let Some(endpoints) = lookup(ENV_ENDPOINTS) {
            self.endpoints = endpoints
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            tracing::debug!(
                "{} endpoints taken from {}",
                self.endpoints.len(),
                ENV_ENDPOINTS
            );
        }
    }

    /// Reject configuration that would fail or misfire at request time
    pub fn validate(&self) -> crate::Result<()> {
        validate_http_url(&self.webhook.url)
            .map_err(|e| crate::NotifierError::Config(format!("webhook.url: {}", e)))?;

        let role_id = self.webhook.role_id.as_str();
        if role_id.trim().is_empty() {
            return Err(crate::NotifierError::Config(
                "webhook.role_id must not be empty".to_string(),
            ));
        }
        if role_id.trim() != role_id {
            return Err(crate::NotifierError::Config(format!(
                "webhook.role_id must not have surrounding whitespace, got {:?}",
                role_id
            )));
        }
        if role_id.contains(['<', '>', '@', '&']) {
            return Err(crate::NotifierError::Config(format!(
                "webhook.role_id must be the bare role id, got {:?}",
                role_id
            )));
        }

        for endpoint in &self.endpoints {
            validate_http_url(endpoint).map_err(|e| {
                crate::NotifierError::Config(format!("endpoint {:?}: {}", endpoint, e))
            })?;
        }

        if self.endpoints.is_empty() {
            tracing::warn!("No endpoints configured; runs will not check anything");
        }
        if self.request_timeout_seconds == Some(0) {
            return Err(crate::NotifierError::Config(
                "request_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_http_url(url: &str) -> std::result::Result<(), String> {
    let parsed = reqwest::Url::parse(url).map_err(|e| format!("invalid URL {:?}: {}", url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme {:?} in {:?}", other, url)),
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::NotifierError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
