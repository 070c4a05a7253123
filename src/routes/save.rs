//! Record save routes.
//!
//! Both routes run the same save: write the record locally and forward it to
//! the lung-report webhook concurrently, then report both results. Only the
//! mode (and with it the storage subdirectory) differs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use records::{DeliveryStatus, SaveMode, SaveOutcome, StagingRecord};
use tracing::{info, warn};

use crate::services::record_store::RecordStoreError;
use crate::state::AppState;

/// `POST /api/save-result`: save a validated record.
pub async fn save_result(
    State(state): State<AppState>,
    Json(record): Json<StagingRecord>,
) -> Result<(StatusCode, Json<SaveOutcome>), StatusCode> {
    save(&state, SaveMode::Final, record).await
}

/// `POST /api/save-before-result`: save the draft taken after autofill.
pub async fn save_before_result(
    State(state): State<AppState>,
    Json(record): Json<StagingRecord>,
) -> Result<(StatusCode, Json<SaveOutcome>), StatusCode> {
    save(&state, SaveMode::Draft, record).await
}

async fn save(
    state: &AppState,
    mode: SaveMode,
    record: StagingRecord,
) -> Result<(StatusCode, Json<SaveOutcome>), StatusCode> {
    if record.record_id.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let forward = async {
        match &state.forwarder {
            Some(forwarder) => match forwarder.forward(&record).await {
                Ok(()) => DeliveryStatus::Delivered,
                Err(e) => {
                    warn!(error = %e, record_id = %record.record_id, mode = mode.as_str(), "webhook forward failed");
                    DeliveryStatus::Failed { reason: e.to_string() }
                }
            },
            None => DeliveryStatus::Skipped,
        }
    };
    let (local, webhook) = tokio::join!(state.store.persist(mode, &record), forward);

    let (status, filename, local) = match local {
        Ok(filename) => {
            info!(record_id = %record.record_id, mode = mode.as_str(), %filename, "record saved");
            (StatusCode::OK, Some(filename), DeliveryStatus::Delivered)
        }
        Err(RecordStoreError::MissingRecordId) => return Err(StatusCode::BAD_REQUEST),
        Err(e) => {
            warn!(error = %e, record_id = %record.record_id, mode = mode.as_str(), "record save failed");
            (StatusCode::INTERNAL_SERVER_ERROR, None, DeliveryStatus::Failed { reason: e.to_string() })
        }
    };

    Ok((status, Json(SaveOutcome { mode, filename, local, webhook })))
}

#[cfg(test)]
#[path = "save_test.rs"]
mod tests;
