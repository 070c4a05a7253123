//! Shared staging-record model for the lung staging intake.
//!
//! This crate owns the record shape exchanged between the `client` pages, the
//! `lungstage` server, and the `cli`. It also holds the pure form logic
//! (validation, autofill, record building) so every surface applies the same
//! rules, and the typed wrapper around browser local storage.
//!
//! DESIGN
//! ======
//! Nothing in here performs I/O. Network calls live in the callers; storage is
//! reached through the [`store::StorageBackend`] trait so tests can run against
//! [`store::MemoryStorage`].

pub mod form;
pub mod generate;
pub mod query;
pub mod record;
pub mod save;
pub mod stage;
pub mod store;

pub use form::{
    MissingField, Modalities, NON_MEASURABLE, RecordContext, SizeKind, StagingForm, TumorSize, ValidationError,
    normalize_imaging_date,
};
pub use generate::{Classification, GenerateResponse, ObservationRequest};
pub use query::{
    DATE_REQUIRED_MESSAGE, INITIAL_MESSAGE, NOT_FOUND_MESSAGE, QueryRows, ReportQuery, ReportRow, normalize_rows,
};
pub use record::{Impression, StagingRecord};
pub use save::{DeliveryStatus, SaveMode, SaveOutcome};
pub use stage::{CodeSelection, LOCATION_CODES, M_CODES, N_CODES, T_CODES};
pub use store::{ClientStore, MemoryStorage, StorageBackend, StorageKey, StoreError, StoredReport};
