//! Endpoint check results and failure classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest HTTP status treated as an endpoint failure
pub const FAILURE_STATUS_THRESHOLD: u16 = 400;

/// What a single GET against an endpoint produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The endpoint answered with this HTTP status
    Status(u16),
    /// The request never produced a response
    Unreachable(String),
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Status(status) => write!(f, "{}", status),
            CheckOutcome::Unreachable(error) => write!(f, "unreachable ({})", error),
        }
    }
}

/// Result of checking one endpoint during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub url: String,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            outcome: CheckOutcome::Status(status),
        }
    }

    pub fn unreachable(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: CheckOutcome::Unreachable(error.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        match &self.outcome {
            CheckOutcome::Status(status) => is_failure_status(*status),
            CheckOutcome::Unreachable(_) => true,
        }
    }

    /// The line reported for this endpoint, or `None` when it is healthy
    pub fn failure_message(&self) -> Option<String> {
        match &self.outcome {
            CheckOutcome::Status(status) if is_failure_status(*status) => {
                Some(failure_message(&self.url, *status))
            }
            CheckOutcome::Status(_) => None,
            CheckOutcome::Unreachable(error) => Some(unreachable_message(&self.url, error)),
        }
    }
}

/// Whether an HTTP status marks the endpoint as down
pub fn is_failure_status(status: u16) -> bool {
    status >= FAILURE_STATUS_THRESHOLD
}

pub fn failure_message(url: &str, status: u16) -> String {
    format!("{} is down. Status: {} 🔴", url, status)
}

pub fn unreachable_message(url: &str, error: &str) -> String {
    format!("{} is unreachable. Error: {} 🔴", url, error)
}
