//! ivtrack-insight
//!
//! Generative-text adapter: sends a compact summary of the record list to
//! Gemini and returns prose observations for the dashboard insight panel.
//! Single best-effort request per invocation, with no retry and no
//! streaming.

pub mod error;
pub mod gemini;
pub mod summary;

pub use gemini::{MIN_RECORDS_FOR_INSIGHTS, generate_insights, insights_or_fallback};
