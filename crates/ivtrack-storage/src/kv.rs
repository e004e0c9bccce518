//! Minimal key-value layer over the data directory.
//!
//! One key maps to one `<key>.json` file. Writes go through a temp file
//! and rename so a crash mid-write never leaves a half-written snapshot.

use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Default per-user data directory for the tracker.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(base.join("com.ivtrack.tracker"))
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Read the raw JSON stored under `key`. `Ok(None)` when the key is absent.
pub fn read(dir: &Path, key: &str) -> Result<Option<String>, StorageError> {
    let path = key_path(dir, key);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::Read { path, source: e }),
    }
}

/// Write `contents` under `key`, atomically replacing any previous value.
pub fn write(dir: &Path, key: &str, contents: &str) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir).map_err(|e| StorageError::Write {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = key_path(dir, key);
    let tmp_path = dir.join(format!("{key}.json.tmp"));

    std::fs::write(&tmp_path, contents.as_bytes()).map_err(|e| StorageError::Write {
        path: tmp_path.clone(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, &path).map_err(|e| StorageError::Write { path, source: e })?;

    Ok(())
}
