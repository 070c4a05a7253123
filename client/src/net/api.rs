//! HTTP helpers for the generation webhook, the query webhook, and the
//! server's save endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so webhook failures turn
//! into status text or an alert without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{GenerateResponse, ObservationRequest, QueryRows, ReportQuery, SaveMode, SaveOutcome, StagingRecord};

#[cfg(any(test, feature = "hydrate"))]
fn generate_failed_message(status: u16) -> String {
    format!("generation failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn query_failed_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("query failed: {status}")
    } else {
        format!("query failed: {status} {status_text}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn save_failed_message(mode: SaveMode, status: u16) -> String {
    format!("{} save failed: {status}", mode.as_str())
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> String {
    "not available on server".to_owned()
}

/// Post an observation to the send-observation webhook.
///
/// # Errors
///
/// Returns an error string if the request fails or the reply is not JSON.
pub async fn generate_report(request: &ObservationRequest) -> Result<GenerateResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(crate::config::send_observation_url())
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        // The webhook puts failures in the `error` field, so only non-JSON
        // replies count as transport failures.
        match resp.json::<GenerateResponse>().await {
            Ok(body) => {
                log::debug!("generation reply: {body:?}");
                Ok(body)
            }
            Err(e) if resp.ok() => Err(e.to_string()),
            Err(_) => Err(generate_failed_message(resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Query stored reports through the query-reports webhook.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn query_reports(query: &ReportQuery) -> Result<QueryRows, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(crate::config::query_reports_url())
            .json(query)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(query_failed_message(resp.status(), &resp.status_text()));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        Ok(records::normalize_rows(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(unavailable())
    }
}

/// Save a record through the server (`/api/save-result` or
/// `/api/save-before-result`), which also forwards it to the lung-report
/// webhook.
///
/// # Errors
///
/// Returns an error string when the server cannot be reached or rejects the
/// record. A webhook failure is not an error here; it is reported inside the
/// returned [`SaveOutcome`].
pub async fn save_record(mode: SaveMode, record: &StagingRecord) -> Result<SaveOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(mode.endpoint())
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        // A local write failure still carries an outcome body with a 500.
        match resp.json::<SaveOutcome>().await {
            Ok(outcome) => Ok(outcome),
            Err(_) => Err(save_failed_message(mode, resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mode, record);
        Err(unavailable())
    }
}
