//! ivtrack-storage
//!
//! The record store and its key-value persistence. Each key is one JSON
//! file in the tracker's data directory; every mutation rewrites the full
//! list snapshot.

pub mod error;
pub mod kv;
pub mod settings;
pub mod store;

pub use store::RecordStore;
