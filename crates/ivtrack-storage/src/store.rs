//! The in-memory record list and its persistence contract.
//!
//! The store owns the only mutable copy of the list. Readers take immutable
//! snapshots; every mutation is a single list replacement followed by a full
//! snapshot write under [`RECORDS_KEY`].

use std::path::PathBuf;

use tracing::{info, warn};
use uuid::Uuid;

use ivtrack_core::models::ProcedureRecord;

use crate::error::StorageError;
use crate::kv;

/// Key the record list is persisted under. The `v3` suffix is historical;
/// it names the live dataset and must not change.
pub const RECORDS_KEY: &str = "avera_nicu_v3_entries";

pub struct RecordStore {
    data_dir: PathBuf,
    records: Vec<ProcedureRecord>,
}

impl RecordStore {
    /// Open the store rooted at `data_dir`, rehydrating the record list.
    ///
    /// An absent key starts empty. A stored value that fails to parse is
    /// logged and treated as empty, so a corrupt snapshot does not block
    /// startup.
    pub fn open(data_dir: PathBuf) -> Result<Self, StorageError> {
        let records = match kv::read(&data_dir, RECORDS_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(key = RECORDS_KEY, error = %e, "stored records failed to parse, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(count = records.len(), dir = %data_dir.display(), "record store opened");

        Ok(Self { data_dir, records })
    }

    /// Open the store in the default platform data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(kv::default_data_dir()?)
    }

    /// Current snapshot, newest first.
    pub fn records(&self) -> &[ProcedureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prepend a record and persist the full list.
    pub fn add(&mut self, record: ProcedureRecord) -> Result<(), StorageError> {
        info!(id = %record.id, provider = %record.provider_name, "record added");
        self.records.insert(0, record);
        self.persist()
    }

    /// Remove a record by id and persist. Removing an absent id is a no-op
    /// (the snapshot is still rewritten).
    pub fn remove(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() < before;
        if removed {
            info!(%id, "record removed");
        } else {
            warn!(%id, "remove requested for unknown record id");
        }
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        kv::write(&self.data_dir, RECORDS_KEY, &json)
    }
}
