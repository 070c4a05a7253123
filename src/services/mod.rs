//! Server-side services behind the HTTP routes.
//!
//! `record_store` writes saved records to disk and `webhook` forwards them to
//! the automation platform.

pub mod record_store;
pub mod webhook;
