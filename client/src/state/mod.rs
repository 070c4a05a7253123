//! Page state models.
//!
//! DESIGN
//! ======
//! Each page keeps one plain struct (or the shared `StagingForm`) in an
//! `RwSignal`. The structs hold no signals themselves, so every transition
//! is unit-tested against `MemoryStorage`.

pub mod benign;
pub mod find;
pub mod home;
pub mod report;
pub mod response;
