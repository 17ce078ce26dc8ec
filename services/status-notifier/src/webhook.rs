//! Chat webhook notification client

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::WebhookConfig;
use crate::io::HttpClient;
use crate::notifier::{NotificationPayload, Notifier};

/// Posts notification payloads as JSON to an incoming-webhook URL
pub struct WebhookNotifier {
    url: String,
    http: Arc<dyn HttpClient>,
}

// The webhook URL embeds its access token, so it stays out of Debug output.
impl std::fmt::Debug for WebhookNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookNotifier").finish_non_exhaustive()
    }
}

impl WebhookNotifier {
    pub fn new(config: &WebhookConfig, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created WebhookNotifier");
        Self {
            url: config.url.clone(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn type_name(&self) -> &str {
        "webhook"
    }

    async fn notify(&self, payload: &NotificationPayload) -> crate::Result<()> {
        let body = payload.to_json()?;
        tracing::debug!("Sending webhook notification ({} bytes)", body.len());

        let response = self.http.post_json(&self.url, &body).await?;

        if response.status >= 400 {
            return Err(crate::NotifierError::Webhook(format!(
                "webhook returned status {}: {}",
                response.status, response.body
            )));
        }

        tracing::debug!("Webhook notification accepted ({})", response.status);
        Ok(())
    }
}
