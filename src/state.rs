//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the record store and the optional webhook forwarder; both are cheap
//! to clone.

use std::sync::Arc;

use crate::services::record_store::RecordStore;
use crate::services::webhook::RecordForwarder;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    /// `None` when no lung-report webhook is configured.
    pub forwarder: Option<Arc<dyn RecordForwarder>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: RecordStore, forwarder: Option<Arc<dyn RecordForwarder>>) -> Self {
        Self { store, forwarder }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
