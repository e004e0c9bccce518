//! ivtrack-export
//!
//! CSV rendering and timestamped file export of the record list.

pub mod csv;
pub mod error;

pub use csv::{export_to_file, render_csv};
