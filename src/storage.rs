//! Durable key-value store seam.
//!
//! The manager never touches the filesystem directly; it is constructed
//! with a [`TileStore`] implementation. [`FileStore`] keeps one JSON file
//! per key under a data directory. [`MemoryStore`] backs unit tests and
//! ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;

/// Errors that can occur reading or writing the durable store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read a store file from disk.
    #[error("failed to read store file: {path}")]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write a store file to disk.
    #[error("failed to write store file: {path}")]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Synchronous string-blob store keyed by string.
///
/// `load` returns `Ok(None)` for an absent key. Implementations do not
/// interpret the blob; callers own the JSON shape.
pub trait TileStore {
    /// Loads the blob stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `blob` under `key`, replacing any previous value.
    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file per key inside a directory.
///
/// The directory is created on first save. Writes go through a temp file
/// rename so a crash mid-write never leaves a truncated record behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the backing file path for a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl TileStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { path, source: e }),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Write {
            path: self.dir.clone(),
            source: e,
        })?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, blob).map_err(|e| StorageError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::Write { path, source: e })?;
        Ok(())
    }
}

/// In-memory store for unit tests and ephemeral sessions.
///
/// Clones share the same underlying map, so a test can hand one clone to
/// the manager and inspect the persisted blob through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single key.
    pub fn with_entry(key: &str, blob: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        store
    }

    /// Returns a copy of the blob currently stored under `key`.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl TileStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
