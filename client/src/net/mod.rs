//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds every HTTP call the pages make: the two automation webhooks
//! (generate, query) and the server's save endpoints. Wire types live in the
//! shared `records` crate.

pub mod api;
