//! Save contract shared by the home page and the server.
//!
//! One record is persisted two ways: written by the server and forwarded to
//! the lung-report webhook. [`SaveOutcome`] reports both destinations so the
//! page can tell the user what actually happened.

#[cfg(test)]
#[path = "save_test.rs"]
mod save_test;

use serde::{Deserialize, Serialize};

/// Which save path a record takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    /// User-confirmed save from a validated form.
    Final,
    /// Intermediate snapshot taken right after autofill; not validated.
    Draft,
}

impl SaveMode {
    /// Server route for this mode.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Final => "/api/save-result",
            Self::Draft => "/api/save-before-result",
        }
    }

    /// Subdirectory the server files records of this mode under.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Draft => "draft",
        }
    }

    #[must_use]
    pub fn requires_validation(self) -> bool {
        matches!(self, Self::Final)
    }
}

/// Result of delivering a record to one destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeliveryStatus {
    Delivered,
    Failed { reason: String },
    /// Destination not configured.
    Skipped,
}

impl DeliveryStatus {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Combined outcome of a save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub mode: SaveMode,
    /// Stored file name, when the local write succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub local: DeliveryStatus,
    pub webhook: DeliveryStatus,
}

impl SaveOutcome {
    /// True when no destination failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.local.is_failed() && !self.webhook.is_failed()
    }

    /// One-line summary for a toast or CLI output.
    #[must_use]
    pub fn summary(&self) -> String {
        let describe = |status: &DeliveryStatus| match status {
            DeliveryStatus::Delivered => "saved".to_owned(),
            DeliveryStatus::Failed { reason } => format!("failed ({reason})"),
            DeliveryStatus::Skipped => "skipped".to_owned(),
        };
        format!("server: {}; webhook: {}", describe(&self.local), describe(&self.webhook))
    }
}
