//! Classification history: an ordered list, newest first, persisted as a
//! single JSON array through a pluggable storage slot.

use crate::error::HistoryError;
use crate::types::{EmailClassification, HistoryEntry};
use chrono::{Local, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};

/// A single persisted text slot holding the serialized history
pub trait HistoryStorage {
    /// Stored text, or `None` when nothing has been saved
    fn read(&self) -> Result<Option<String>, HistoryError>;

    fn write(&self, data: &str) -> Result<(), HistoryError>;

    /// Delete the slot; removing an absent slot is not an error
    fn remove(&self) -> Result<(), HistoryError>;
}

/// History kept in a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistoryStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, data: &str) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, data).map_err(|e| self.io_error(e))
    }

    fn remove(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// In-process slot, for tests and sessions that should not touch disk
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `data` already stored
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(data.into())),
        }
    }

    /// Current raw contents of the slot
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HistoryStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, HistoryError> {
        Ok(self.contents())
    }

    fn write(&self, data: &str) -> Result<(), HistoryError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(data.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), HistoryError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Ordered list of past classifications, newest first
#[derive(Debug)]
pub struct History<S> {
    storage: S,
    entries: Vec<HistoryEntry>,
}

impl<S: HistoryStorage> History<S> {
    /// Load whatever `storage` holds.
    ///
    /// Corrupt data is discarded wholesale: the slot is removed and the
    /// history starts empty. A slot that cannot be read is left in place.
    pub fn load(storage: S) -> Self {
        let entries = match storage.read() {
            Ok(None) => Vec::new(),
            Ok(Some(data)) => match serde_json::from_str::<Vec<HistoryEntry>>(&data) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Discarding corrupt history");
                    discard(&storage);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(error = %e, "Failed to read history, starting empty");
                Vec::new()
            }
        };

        debug!(count = entries.len(), "Loaded history");
        Self { storage, entries }
    }

    /// Record a new classification at the front of the list and persist.
    ///
    /// If saving fails the entry is dropped again, so memory and storage agree.
    pub fn append(
        &mut self,
        email_content: impl Into<String>,
        classification: EmailClassification,
    ) -> Result<&HistoryEntry, HistoryError> {
        let entry = HistoryEntry {
            id: self.next_id(),
            timestamp: Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            email_content: email_content.into(),
            classification,
        };
        self.entries.insert(0, entry);
        if let Err(e) = self.save() {
            self.entries.remove(0);
            return Err(e);
        }
        info!(id = %self.entries[0].id, "Recorded classification in history");
        Ok(&self.entries[0])
    }

    /// Drop every entry and delete the persisted slot
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.storage.remove()?;
        info!("Cleared history");
        Ok(())
    }

    /// Write the whole list to storage
    pub fn save(&self) -> Result<(), HistoryError> {
        let data = serde_json::to_string(&self.entries)?;
        self.storage.write(&data)
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    // Millisecond epoch, bumped past any id already in use
    fn next_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

fn discard<S: HistoryStorage>(storage: &S) {
    if let Err(e) = storage.remove() {
        warn!(error = %e, "Failed to remove corrupt history");
    }
}
