//! Error types for the status notifier

/// Errors that can occur while checking endpoints or notifying
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Webhook error: {0}")]
    Webhook(String),
}

/// Result type alias for status notifier operations
pub type Result<T> = std::result::Result<T, NotifierError>;
