//! Staging form page helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps a `StagingForm` in an `RwSignal`; these functions connect
//! it to storage and to the shared save contract so the page itself only
//! wires events.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use records::{ClientStore, DeliveryStatus, SaveMode, SaveOutcome, StagingForm, StagingRecord, StorageBackend, ValidationError};

/// Fill the form from `generatedReport`.
///
/// Returns `false` and leaves the form untouched when nothing usable is
/// stored.
pub fn autofill<B: StorageBackend>(form: &mut StagingForm, store: &ClientStore<B>) -> bool {
    match store.generated_report() {
        Some(record) => {
            form.apply_record(&record);
            true
        }
        None => false,
    }
}

/// Build the record to save in `mode`. Final saves validate first.
///
/// # Errors
///
/// Returns every missing field when a final save does not validate.
pub fn prepare_save<B: StorageBackend>(
    form: &StagingForm,
    mode: SaveMode,
    store: &ClientStore<B>,
) -> Result<StagingRecord, ValidationError> {
    if mode.requires_validation() {
        form.validate()?;
    }
    Ok(form.to_record(&store.record_context()))
}

/// Alert text after a final save.
#[must_use]
pub fn saved_message(outcome: &SaveOutcome) -> String {
    let headline = match (&outcome.local, outcome.is_success()) {
        (DeliveryStatus::Delivered, true) => "✅ Report saved.",
        (DeliveryStatus::Delivered, false) => "Report saved locally; forwarding failed.",
        _ => "❌ Report was not saved.",
    };
    format!("{headline}\n{}", outcome.summary())
}
