//! Response review page state.
//!
//! DESIGN
//! ======
//! The JSON editor holds raw text. Nothing reaches `generatedReport` until
//! the text parses as a JSON object, so a half-edited record can never be
//! handed to the staging form.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use records::{ClientStore, StorageBackend, StoreError, StoredReport};
use serde_json::Value;

pub const REPORT_PLACEHOLDER: &str = "No report content yet";
pub const JSON_PLACEHOLDER: &str = "No data available";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewBadge {
    Loaded,
    #[default]
    Empty,
}

impl PreviewBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Loaded => "Loaded",
            Self::Empty => "Empty",
        }
    }
}

/// Status line under the JSON editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonStatus {
    /// Nothing stored.
    #[default]
    Empty,
    /// Loaded from storage and parsed.
    Parsed,
    /// Loaded from storage but not parseable; shown raw.
    ParseWarning,
    /// Validated by the user and re-persisted.
    Valid,
    /// Failed validation; storage untouched.
    Invalid,
}

impl JsonStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Parsed => "Parsed",
            Self::ParseWarning => "⚠️ JSON parse error",
            Self::Valid => "✅ Valid JSON",
            Self::Invalid => "❌ Invalid JSON",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseState {
    pub report_text: String,
    pub preview_badge: PreviewBadge,
    pub json_text: String,
    pub json_status: JsonStatus,
}

impl ResponseState {
    /// Build the page state from `reportText` and `generatedReport`.
    #[must_use]
    pub fn load<B: StorageBackend>(store: &ClientStore<B>) -> Self {
        let (report_text, preview_badge) = match store.report_text() {
            Some(text) => (text, PreviewBadge::Loaded),
            None => (REPORT_PLACEHOLDER.to_owned(), PreviewBadge::Empty),
        };
        let (json_text, json_status) = match store.stored_report() {
            StoredReport::Parsed { pretty } => (pretty, JsonStatus::Parsed),
            StoredReport::Invalid { raw } => (raw, JsonStatus::ParseWarning),
            StoredReport::Missing => (JSON_PLACEHOLDER.to_owned(), JsonStatus::Empty),
        };
        Self { report_text, preview_badge, json_text, json_status }
    }

    #[must_use]
    pub fn has_report_text(&self) -> bool {
        self.preview_badge == PreviewBadge::Loaded
    }

    /// Body for the JSON download: the editor text when it parses,
    /// otherwise the text wrapped as `{"raw": ...}`.
    #[must_use]
    pub fn download_payload(&self) -> String {
        if serde_json::from_str::<Value>(&self.json_text).is_ok() {
            return self.json_text.clone();
        }
        let wrapped = serde_json::json!({ "raw": self.json_text });
        serde_json::to_string_pretty(&wrapped).unwrap_or_default()
    }

    /// Check the editor text and re-persist it when it is a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the store error when the text is not a JSON object; the
    /// editor text and storage are left untouched.
    pub fn validate<B: StorageBackend>(&mut self, store: &ClientStore<B>) -> Result<(), StoreError> {
        match store.set_generated_report_json(&self.json_text) {
            Ok(value) => {
                if let Ok(pretty) = serde_json::to_string_pretty(&value) {
                    self.json_text = pretty;
                }
                self.json_status = JsonStatus::Valid;
                Ok(())
            }
            Err(e) => {
                self.json_status = JsonStatus::Invalid;
                Err(e)
            }
        }
    }

    /// Persist the record and its report text before moving to the form.
    ///
    /// # Errors
    ///
    /// Returns the store error when the editor text is not a JSON object.
    /// Nothing is written in that case.
    pub fn proceed<B: StorageBackend>(&self, store: &ClientStore<B>) -> Result<(), StoreError> {
        store.set_generated_report_json(&self.json_text)?;
        if self.has_report_text() {
            store.set_generated_report_text(&self.report_text)?;
        }
        Ok(())
    }
}
