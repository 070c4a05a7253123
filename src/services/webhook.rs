//! Forwarding of saved records to the lung-report automation webhook.
//!
//! Delivery is best-effort: one attempt, no retry. The caller reports the
//! result next to the local save instead of failing it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use records::StagingRecord;

use crate::config::WebhookTimeouts;

/// Errors produced when forwarding a record.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The HTTP request could not be sent or the body not read.
    #[error("webhook request failed: {0}")]
    Request(String),

    /// The webhook answered with a non-success status.
    #[error("webhook responded with status {status}")]
    Response { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Destination that accepts saved records.
#[async_trait]
pub trait RecordForwarder: Send + Sync {
    async fn forward(&self, record: &StagingRecord) -> Result<(), ForwardError>;
}

/// `reqwest` client posting records as JSON to one webhook URL.
pub struct WebhookForwarder {
    http: reqwest::Client,
    url: String,
}

impl WebhookForwarder {
    /// # Errors
    ///
    /// Returns [`ForwardError::HttpClientBuild`] if the client cannot be built.
    pub fn new(url: String, timeouts: WebhookTimeouts) -> Result<Self, ForwardError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ForwardError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }

    /// Build a forwarder when a URL is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::HttpClientBuild`] if the client cannot be built.
    pub fn from_config(url: Option<&str>, timeouts: WebhookTimeouts) -> Result<Option<Self>, ForwardError> {
        url.map(|url| Self::new(url.to_owned(), timeouts)).transpose()
    }

    /// Share the forwarder behind the [`RecordForwarder`] seam.
    #[must_use]
    pub fn into_shared(self) -> Arc<dyn RecordForwarder> {
        Arc::new(self)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordForwarder for WebhookForwarder {
    async fn forward(&self, record: &StagingRecord) -> Result<(), ForwardError> {
        let response = self
            .http
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|e| ForwardError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForwardError::Response { status: status.as_u16(), body });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;
