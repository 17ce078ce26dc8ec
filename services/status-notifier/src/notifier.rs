//! Notifier trait and the chat notification payload

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Mention token that pings every member holding the given role
pub fn mention_token(role_id: &str) -> String {
    format!("<@&{}>", role_id)
}

/// JSON body posted to the chat webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub content: String,
}

impl NotificationPayload {
    /// Mention token on the first line, then one failure line per line
    pub fn new(role_id: &str, failures: &[String]) -> Self {
        Self {
            content: format!("{}\n{}", mention_token(role_id), failures.join("\n")),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Trait for delivering a notification payload
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "webhook")
    fn type_name(&self) -> &str;

    /// Deliver the payload
    async fn notify(&self, payload: &NotificationPayload) -> crate::Result<()>;
}

/// Prints the payload JSON to stdout instead of delivering it (dry run)
#[derive(Debug, Default)]
pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    fn type_name(&self) -> &str {
        "stdout"
    }

    async fn notify(&self, payload: &NotificationPayload) -> crate::Result<()> {
        println!("{}", payload.to_json()?);
        Ok(())
    }
}
