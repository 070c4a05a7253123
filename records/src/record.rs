//! The flat staging record exchanged between pages, the server, and webhooks.
//!
//! DESIGN
//! ======
//! The automation webhook is loosely typed: string fields sometimes arrive as
//! numbers, `null`, or are missing entirely. Every text field therefore
//! deserializes leniently into a `String` (empty when absent). Keys this crate
//! does not model are kept in `extra` so they survive a storage round trip.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Free-text impression lines, one per TNM axis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impression {
    #[serde(rename = "T", default, deserialize_with = "lenient_string")]
    pub t: String,
    #[serde(rename = "N", default, deserialize_with = "lenient_string")]
    pub n: String,
    #[serde(rename = "M", default, deserialize_with = "lenient_string")]
    pub m: String,
}

impl Impression {
    /// Seed the impression from the three stage strings.
    #[must_use]
    pub fn from_stages(t: &str, n: &str, m: &str) -> Self {
        Self { t: t.to_owned(), n: n.to_owned(), m: m.to_owned() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty() && self.n.is_empty() && self.m.is_empty()
    }
}

/// One staging record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StagingRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub record_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_info: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub imaging_date: String,
    /// `CT` or `MRI`.
    #[serde(rename = "Imaging Modality", default, deserialize_with = "lenient_string")]
    pub imaging_modality: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tumor_location: String,
    /// A measured size, or the literal `Non-measurable`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tumor_size_cm: String,
    #[serde(rename = "T_stage", default, deserialize_with = "lenient_string")]
    pub t_stage: String,
    #[serde(rename = "N_stage", default, deserialize_with = "lenient_string")]
    pub n_stage: String,
    #[serde(rename = "M_stage", default, deserialize_with = "lenient_string")]
    pub m_stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_string")]
    pub lung_rads_category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub other_findings: String,
    #[serde(default, skip_serializing_if = "Impression::is_empty", deserialize_with = "lenient_impression")]
    pub imp: Impression,
    /// Raw observation text the record was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_string")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_string")]
    pub report_text: Option<String>,
    /// Classification label set by the generation webhook.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_string")]
    pub benign_malignant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_opt_string")]
    pub filename: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StagingRecord {
    /// Parse a record from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Derived file name: `{record_id}_{imaging_date}.json`.
    #[must_use]
    pub fn derived_filename(&self) -> String {
        format!("{}_{}.json", self.record_id.trim(), self.imaging_date)
    }

    /// Copy the stage strings into `imp`, as the generation flow does before
    /// handing the record to the form.
    #[must_use]
    pub fn with_impression_from_stages(mut self) -> Self {
        self.imp = Impression::from_stages(&self.t_stage, &self.n_stage, &self.m_stage);
        self
    }
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

fn lenient_impression<'de, D>(deserializer: D) -> Result<Impression, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => serde_json::from_value(Value::Object(map)).map_err(serde::de::Error::custom),
        _ => Ok(Impression::default()),
    }
}
