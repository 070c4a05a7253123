//! Server configuration parsed from environment variables.
//!
//! Resolved once in `main` and handed to services, so request handlers never
//! read the process environment.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RECORDS_DIR: &str = "data/records";
pub const DEFAULT_LUNG_REPORT_WEBHOOK_URL: &str = "https://n8n.fcubiolab.com/webhook/lung-report";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub records_dir: PathBuf,
    /// `None` disables forwarding to the lung-report webhook.
    pub lung_report_webhook_url: Option<String>,
    pub webhook_timeouts: WebhookTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RECORDS_DIR`: default `data/records`
    /// - `LUNG_REPORT_WEBHOOK_URL`: default n8n lung-report hook; set empty to disable
    /// - `WEBHOOK_TIMEOUT_SECS`: default 30
    /// - `WEBHOOK_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let port = env_parse("PORT", DEFAULT_PORT);
        let records_dir = std::env::var("RECORDS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_RECORDS_DIR));
        let lung_report_webhook_url = parse_webhook_url(std::env::var("LUNG_REPORT_WEBHOOK_URL").ok().as_deref());
        let webhook_timeouts = WebhookTimeouts {
            request_secs: env_parse("WEBHOOK_TIMEOUT_SECS", DEFAULT_WEBHOOK_TIMEOUT_SECS),
            connect_secs: env_parse("WEBHOOK_CONNECT_TIMEOUT_SECS", DEFAULT_WEBHOOK_CONNECT_TIMEOUT_SECS),
        };

        Self { port, records_dir, lung_report_webhook_url, webhook_timeouts }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_webhook_url(raw: Option<&str>) -> Option<String> {
    match raw.map(str::trim) {
        None => Some(DEFAULT_LUNG_REPORT_WEBHOOK_URL.to_owned()),
        Some("") => None,
        Some(url) => Some(url.to_owned()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
