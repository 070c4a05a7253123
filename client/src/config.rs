//! Build-time client configuration.
//!
//! Webhook URLs and the post-generation navigation delay are baked in at
//! compile time through `option_env!`, so the WASM bundle needs no runtime
//! config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SEND_OBSERVATION_URL: &str = "https://n8n.fcubiolab.com/webhook/send-observation";
pub const DEFAULT_QUERY_REPORTS_URL: &str = "http://172.20.10.2:5678/webhook/query-reports";
pub const DEFAULT_NAV_DELAY_MS: u32 = 2000;

/// Report-generation webhook (`LUNGSTAGE_SEND_OBSERVATION_URL`).
#[must_use]
pub fn send_observation_url() -> &'static str {
    non_blank(option_env!("LUNGSTAGE_SEND_OBSERVATION_URL")).unwrap_or(DEFAULT_SEND_OBSERVATION_URL)
}

/// Report-query webhook (`LUNGSTAGE_QUERY_REPORTS_URL`).
#[must_use]
pub fn query_reports_url() -> &'static str {
    non_blank(option_env!("LUNGSTAGE_QUERY_REPORTS_URL")).unwrap_or(DEFAULT_QUERY_REPORTS_URL)
}

/// Delay before leaving the report page after a generation (`LUNGSTAGE_NAV_DELAY_MS`).
#[must_use]
pub fn nav_delay_ms() -> u32 {
    parse_delay(option_env!("LUNGSTAGE_NAV_DELAY_MS"))
}

fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(DEFAULT_NAV_DELAY_MS)
}

fn non_blank(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
