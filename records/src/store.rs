//! Typed access to the browser's local storage keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand data to each other through local storage. Every key goes
//! through [`ClientStore`] so a page cannot write a value another page will
//! fail to read: the staging record must be a JSON object, and text keys must
//! not be blank.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::form::RecordContext;
use crate::record::StagingRecord;

/// Keys the application reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON staging record produced by generation or edited on the response page.
    GeneratedReport,
    /// Report text confirmed on the response page.
    GeneratedReportText,
    /// Last observation submitted for generation.
    LastObservation,
    /// Latest generated report text.
    ReportText,
    LungRadsCategory,
    DoctorAuth,
}

impl StorageKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeneratedReport => "generatedReport",
            Self::GeneratedReportText => "generatedReport_text",
            Self::LastObservation => "lastObservation",
            Self::ReportText => "reportText",
            Self::LungRadsCategory => "lungRadsCategory",
            Self::DoctorAuth => "doctorAuth",
        }
    }
}

/// Errors produced by [`ClientStore`] writes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The value is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The JSON parsed but is not an object.
    #[error("expected a JSON object for {key}")]
    NotAnObject { key: &'static str },

    /// Text keys refuse blank values.
    #[error("refusing to store a blank value for {key}")]
    Blank { key: &'static str },

    /// The storage backend rejected the write (quota, private mode, ...).
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Raw string storage. Implemented over `window.localStorage` in the browser.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str);
}

/// In-process storage for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Stored form of the staging record as the response page sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum StoredReport {
    Missing,
    /// Parsed and re-rendered with indentation.
    Parsed { pretty: String },
    /// Present but not valid JSON; carried verbatim.
    Invalid { raw: String },
}

/// Typed accessors over a [`StorageBackend`].
pub struct ClientStore<B> {
    backend: B,
}

impl<B: StorageBackend> ClientStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Raw text of `generatedReport`, if present.
    #[must_use]
    pub fn generated_report_raw(&self) -> Option<String> {
        self.backend.get(StorageKey::GeneratedReport.as_str())
    }

    /// The staging record, or `None` when absent or unparseable.
    #[must_use]
    pub fn generated_report(&self) -> Option<StagingRecord> {
        self.generated_report_raw()
            .and_then(|raw| StagingRecord::from_json(&raw).ok())
    }

    /// Classify the stored record for display.
    #[must_use]
    pub fn stored_report(&self) -> StoredReport {
        let Some(raw) = self.generated_report_raw() else {
            return StoredReport::Missing;
        };
        match serde_json::from_str::<Value>(&raw).and_then(|v| serde_json::to_string_pretty(&v)) {
            Ok(pretty) => StoredReport::Parsed { pretty },
            Err(_) => StoredReport::Invalid { raw },
        }
    }

    /// # Errors
    ///
    /// Returns an error when serialization or the backend write fails.
    pub fn set_generated_report(&self, record: &StagingRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        self.backend.set(StorageKey::GeneratedReport.as_str(), &raw)
    }

    /// Validate hand-edited JSON and store it in compact form.
    ///
    /// Storage is untouched when validation fails. Returns the parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidJson`] or [`StoreError::NotAnObject`].
    pub fn set_generated_report_json(&self, raw: &str) -> Result<Value, StoreError> {
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(StoreError::NotAnObject { key: StorageKey::GeneratedReport.as_str() });
        }
        self.backend
            .set(StorageKey::GeneratedReport.as_str(), &serde_json::to_string(&value)?)?;
        Ok(value)
    }

    #[must_use]
    pub fn report_text(&self) -> Option<String> {
        self.text(StorageKey::ReportText)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Blank`] for blank text.
    pub fn set_report_text(&self, text: &str) -> Result<(), StoreError> {
        self.set_text(StorageKey::ReportText, text)
    }

    #[must_use]
    pub fn generated_report_text(&self) -> Option<String> {
        self.text(StorageKey::GeneratedReportText)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Blank`] for blank text.
    pub fn set_generated_report_text(&self, text: &str) -> Result<(), StoreError> {
        self.set_text(StorageKey::GeneratedReportText, text)
    }

    #[must_use]
    pub fn last_observation(&self) -> Option<String> {
        self.text(StorageKey::LastObservation)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Blank`] for blank text.
    pub fn set_last_observation(&self, text: &str) -> Result<(), StoreError> {
        self.set_text(StorageKey::LastObservation, text)
    }

    pub fn clear_last_observation(&self) {
        self.backend.remove(StorageKey::LastObservation.as_str());
    }

    #[must_use]
    pub fn lung_rads_category(&self) -> Option<String> {
        self.text(StorageKey::LungRadsCategory)
    }

    /// Drop the stored sign-in marker.
    pub fn clear_doctor_auth(&self) {
        self.backend.remove(StorageKey::DoctorAuth.as_str());
    }

    /// Values a rebuilt record carries from storage rather than the form.
    #[must_use]
    pub fn record_context(&self) -> RecordContext {
        RecordContext { lung_rads_category: self.lung_rads_category(), last_observation: self.last_observation() }
    }

    fn text(&self, key: StorageKey) -> Option<String> {
        self.backend.get(key.as_str()).filter(|v| !v.trim().is_empty())
    }

    fn set_text(&self, key: StorageKey, text: &str) -> Result<(), StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::Blank { key: key.as_str() });
        }
        self.backend.set(key.as_str(), text)
    }
}
