//! Benign outcome page content.

#[cfg(test)]
#[path = "benign_test.rs"]
mod benign_test;

use records::{ClientStore, StorageBackend};

pub const NO_REPORT_TEXT: &str = "No report text stored.";
pub const UNKNOWN_CLASSIFICATION: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenignView {
    pub report_text: String,
    pub classification: String,
}

impl BenignView {
    #[must_use]
    pub fn load<B: StorageBackend>(store: &ClientStore<B>) -> Self {
        let report_text = store
            .report_text()
            .or_else(|| store.generated_report_text())
            .unwrap_or_else(|| NO_REPORT_TEXT.to_owned());
        let classification = store
            .generated_report()
            .and_then(|record| record.benign_malignant)
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_CLASSIFICATION.to_owned());
        Self { report_text, classification }
    }
}
