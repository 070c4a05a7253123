//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form sections and result tables for the pages, reading
//! and writing the page state signals they are handed.

pub mod code_checklist;
pub mod report_table;
