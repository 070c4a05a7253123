//! File-backed record store.
//!
//! DESIGN
//! ======
//! Each saved record becomes one pretty-printed JSON file named
//! `{record_id}_{imaging_date}.json` under a per-mode subdirectory. Saving the
//! same record again overwrites the previous file; there is no other identity
//! or dedup.

use std::path::{Path, PathBuf};

use records::{SaveMode, StagingRecord};

/// Errors produced by [`RecordStore`].
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    /// The record has no usable id to derive a file name from.
    #[error("record_id is required")]
    MissingRecordId,

    #[error("failed to create records directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write record file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `record` and return the file name it was stored under.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no id or the file cannot be written.
    pub async fn persist(&self, mode: SaveMode, record: &StagingRecord) -> Result<String, RecordStoreError> {
        if record.record_id.trim().is_empty() {
            return Err(RecordStoreError::MissingRecordId);
        }
        let filename = sanitize_filename(&record.derived_filename());
        let dir = self.root.join(mode.as_str());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| RecordStoreError::CreateDir { path: dir.clone(), source })?;

        let path = dir.join(&filename);
        let body = serde_json::to_vec_pretty(record)?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| RecordStoreError::Write { path, source })?;
        Ok(filename)
    }
}

/// Replace anything outside `[A-Za-z0-9._-]` with `_` and strip leading dots,
/// so a record id can never escape the records directory.
pub(crate) fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() { "_".to_owned() } else { trimmed.to_owned() }
}

#[cfg(test)]
#[path = "record_store_test.rs"]
mod tests;
