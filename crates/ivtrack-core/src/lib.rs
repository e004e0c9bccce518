//! ivtrack-core
//!
//! Pure domain types and the aggregation engine for the NICU IV tracker.
//! No I/O, and no clocks beyond what callers pass in.

pub mod error;
pub mod models;
pub mod query;
pub mod stats;
