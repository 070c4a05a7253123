//! Report search page state.

#[cfg(test)]
#[path = "find_test.rs"]
mod find_test;

use records::{DATE_REQUIRED_MESSAGE, INITIAL_MESSAGE, NOT_FOUND_MESSAGE, QueryRows, ReportQuery, ReportRow};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindState {
    pub query: ReportQuery,
    pub rows: Vec<ReportRow>,
    pub message: String,
    pub loading: bool,
}

impl Default for FindState {
    fn default() -> Self {
        Self {
            query: ReportQuery::default(),
            rows: Vec::new(),
            message: INITIAL_MESSAGE.to_owned(),
            loading: false,
        }
    }
}

#[must_use]
pub fn failure_message(reason: &str) -> String {
    format!("Query failed: {reason}")
}

impl FindState {
    /// Query to send, or `None` when no date bound is set. In that case the
    /// rows are cleared and a prompt replaces the message.
    pub fn prepare(&mut self) -> Option<ReportQuery> {
        if !self.query.has_date_bound() {
            self.rows.clear();
            self.message = DATE_REQUIRED_MESSAGE.to_owned();
            return None;
        }
        self.loading = true;
        Some(self.query.trimmed())
    }

    /// Apply a settled query.
    pub fn apply(&mut self, result: Result<QueryRows, String>) {
        self.loading = false;
        match result {
            Ok(QueryRows::Rows(rows)) => {
                self.rows = rows.iter().map(ReportRow::from_value).collect();
                self.message.clear();
            }
            Ok(QueryRows::Empty) => {
                self.rows.clear();
                self.message = NOT_FOUND_MESSAGE.to_owned();
            }
            Ok(QueryRows::Malformed(reason)) | Err(reason) => {
                self.rows.clear();
                self.message = failure_message(&reason);
            }
        }
    }

    /// Clear filters and rows and restore the initial message.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
