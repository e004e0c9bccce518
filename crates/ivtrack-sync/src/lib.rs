//! ivtrack-sync
//!
//! Spreadsheet webhook adapter: POSTs the full record list to a
//! user-configured Apps Script endpoint. One best-effort request per call,
//! no retry, no incremental diffing.

pub mod apps_script;
pub mod error;
pub mod payload;
pub mod webhook;

pub use apps_script::APPS_SCRIPT_TEMPLATE;
pub use webhook::{SyncReport, sync_to_sheet};
