//! The webhook request body. Each sync sends the complete list; the
//! receiving sheet overwrites its data rows rather than appending.

use serde::{Deserialize, Serialize};

use ivtrack_core::models::ProcedureRecord;

pub const SYNC_SOURCE: &str = "Avera NICU Tracker";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Fixed application identifier so the receiving script can reject
    /// posts from anything else.
    pub source: String,
    /// When this sync was sent, ISO-8601.
    pub timestamp: jiff::Timestamp,
    pub data: Vec<ProcedureRecord>,
}

impl SyncPayload {
    pub fn new(records: &[ProcedureRecord]) -> Self {
        Self {
            source: SYNC_SOURCE.to_string(),
            timestamp: jiff::Timestamp::now(),
            data: records.to_vec(),
        }
    }
}
