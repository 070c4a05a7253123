//! Report query contract and webhook response normalization.
//!
//! DESIGN
//! ======
//! The automation platform answers queries in several shapes: a bare array,
//! an object with `items` or `data`, and rows optionally wrapped in a `json`
//! property (its row-passthrough format). [`normalize_rows`] folds all of them
//! into one [`QueryRows`] value so callers never sniff shapes themselves.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Message shown before any query has run.
pub const INITIAL_MESSAGE: &str = "No search yet. Enter criteria and press Search.";
/// Message shown when neither date is filled in.
pub const DATE_REQUIRED_MESSAGE: &str = "Enter at least one date.";
/// Message shown when the query returned no rows.
pub const NOT_FOUND_MESSAGE: &str = "No matching reports found.";

/// Query posted to the query-reports webhook.
///
/// Patient fields are optional; empty ones are omitted from the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub patient_name: String,
    #[serde(default)]
    pub date_from: String,
    #[serde(default)]
    pub date_to: String,
}

impl ReportQuery {
    /// Whether the query may be sent. At least one date bound is required.
    #[must_use]
    pub fn has_date_bound(&self) -> bool {
        !self.date_from.trim().is_empty() || !self.date_to.trim().is_empty()
    }

    /// Copy with every field trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            patient_id: self.patient_id.trim().to_owned(),
            patient_name: self.patient_name.trim().to_owned(),
            date_from: self.date_from.trim().to_owned(),
            date_to: self.date_to.trim().to_owned(),
        }
    }
}

/// Normalized result of a query.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryRows {
    Rows(Vec<Value>),
    Empty,
    Malformed(String),
}

impl QueryRows {
    /// Rows to display; empty for `Empty` and `Malformed`.
    #[must_use]
    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Self::Rows(rows) => rows,
            Self::Empty | Self::Malformed(_) => Vec::new(),
        }
    }
}

/// Fold any accepted response shape into [`QueryRows`].
#[must_use]
pub fn normalize_rows(body: Value) -> QueryRows {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("items").or_else(|| map.remove("data")) {
            Some(Value::Array(rows)) => rows,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => return QueryRows::Malformed(format!("expected an array of rows, got {}", kind(&other))),
        },
        Value::Null => Vec::new(),
        other => return QueryRows::Malformed(format!("unexpected response body: {}", kind(&other))),
    };

    if rows.is_empty() {
        return QueryRows::Empty;
    }
    QueryRows::Rows(rows.into_iter().map(unwrap_row).collect())
}

fn unwrap_row(row: Value) -> Value {
    match row {
        Value::Object(mut map) if matches!(map.get("json"), Some(Value::Object(_))) => {
            map.remove("json").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Columns the find page renders for each row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReportRow {
    #[serde(default, deserialize_with = "cell")]
    pub created_at: String,
    #[serde(default, deserialize_with = "cell")]
    pub record_id: String,
    #[serde(default, deserialize_with = "cell")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "cell")]
    pub tumor_location: String,
    #[serde(default, deserialize_with = "cell")]
    pub tumor_size_cm: String,
    #[serde(rename = "T_stage", default, deserialize_with = "cell")]
    pub t_stage: String,
    #[serde(rename = "N_stage", default, deserialize_with = "cell")]
    pub n_stage: String,
    #[serde(rename = "M_stage", default, deserialize_with = "cell")]
    pub m_stage: String,
    #[serde(default, deserialize_with = "cell")]
    pub lung_rads_category: String,
    #[serde(default, deserialize_with = "cell")]
    pub other_findings: String,
    #[serde(default, deserialize_with = "cell")]
    pub report_text: String,
}

impl ReportRow {
    /// Project a normalized row onto the display columns.
    ///
    /// Non-object rows yield an empty row rather than failing the table.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

fn cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
