//! The one user-settable configuration value: the spreadsheet webhook URL.
//! Stored under its own key, separate from the record list.

use std::path::Path;

use tracing::info;

use crate::error::StorageError;
use crate::kv;

pub const WEBHOOK_KEY: &str = "google_sheets_webhook";

/// The configured webhook URL, if any. An unparseable stored value is
/// treated as unset.
pub fn load_webhook_url(dir: &Path) -> Result<Option<String>, StorageError> {
    let Some(raw) = kv::read(dir, WEBHOOK_KEY)? else {
        return Ok(None);
    };
    let url: String = match serde_json::from_str(&raw) {
        Ok(url) => url,
        Err(_) => return Ok(None),
    };
    if url.is_empty() { Ok(None) } else { Ok(Some(url)) }
}

pub fn save_webhook_url(dir: &Path, url: &str) -> Result<(), StorageError> {
    kv::write(dir, WEBHOOK_KEY, &serde_json::to_string(url)?)?;
    info!("webhook URL saved");
    Ok(())
}
