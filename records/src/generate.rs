//! Report-generation webhook contract.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use serde::{Deserialize, Serialize};

use crate::record::StagingRecord;

/// Localized label the webhook uses for a benign classification.
pub const BENIGN_LOCALIZED: &str = "良性";

/// Body posted to the send-observation webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRequest {
    pub observation: String,
}

impl ObservationRequest {
    /// Build a request from raw textarea input.
    ///
    /// Returns `None` when nothing is left after normalization.
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        let observation = normalize_observation(raw);
        (!observation.is_empty()).then_some(Self { observation })
    }
}

/// Strip line breaks and surrounding whitespace from an observation.
#[must_use]
pub fn normalize_observation(raw: &str) -> String {
    raw.chars().filter(|c| *c != '\r' && *c != '\n').collect::<String>().trim().to_owned()
}

/// Webhook reply. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_data: Option<StagingRecord>,
}

impl GenerateResponse {
    /// Text shown in the result panel: `response`, else `error`, else empty.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.response
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.error.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or_default()
            .to_owned()
    }

    /// Record to hand to the staging form, with `imp` seeded from the stages.
    #[must_use]
    pub fn prepared_record(&self) -> Option<StagingRecord> {
        self.form_data.clone().map(StagingRecord::with_impression_from_stages)
    }

    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.form_data
            .as_ref()
            .map(|data| Classification::from_label(data.benign_malignant.as_deref()))
    }
}

/// Outcome class that decides where the user lands after generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Benign,
    Other,
}

impl Classification {
    /// `benign` (any case) or the localized label map to [`Classification::Benign`].
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(l) if l.eq_ignore_ascii_case("benign") || l == BENIGN_LOCALIZED => Self::Benign,
            _ => Self::Other,
        }
    }
}
