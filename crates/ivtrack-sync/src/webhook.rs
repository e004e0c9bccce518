//! The sync call itself.
//!
//! Apps Script web-app endpoints answer with redirects and opaque bodies,
//! so the response cannot be used to confirm the write. Reaching the
//! endpoint without a transport error counts as success.

use tracing::{info, warn};

use ivtrack_core::models::ProcedureRecord;

use crate::error::SyncError;
use crate::payload::SyncPayload;

/// What a sync call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of records in the posted snapshot. Zero means the call was
    /// skipped because there was nothing to sync.
    pub sent: usize,
}

/// POST the full record list to the configured webhook.
///
/// An empty list is a successful no-op. Only transport-level failures are
/// errors; any HTTP status from the endpoint counts as delivered.
pub fn sync_to_sheet(
    webhook_url: &str,
    records: &[ProcedureRecord],
) -> Result<SyncReport, SyncError> {
    if webhook_url.is_empty() {
        return Err(SyncError::MissingWebhookUrl);
    }
    if records.is_empty() {
        info!("nothing to sync");
        return Ok(SyncReport { sent: 0 });
    }

    let payload = SyncPayload::new(records);

    match ureq::post(webhook_url).send_json(&payload) {
        Ok(_) => {
            info!(count = records.len(), "record list synced to webhook");
            Ok(SyncReport {
                sent: records.len(),
            })
        }
        // The endpoint was reached; its status is opaque to us (see module
        // docs). Treat as delivered.
        Err(ureq::Error::StatusCode(code)) => {
            warn!(status = code, "webhook answered with a non-success status");
            Ok(SyncReport {
                sent: records.len(),
            })
        }
        Err(e) => Err(SyncError::Transport(e.to_string())),
    }
}
