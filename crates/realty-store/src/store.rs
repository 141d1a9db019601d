//! Store accessors
//!
//! Every accessor reads the persisted document in full and rewrites it
//! in full. Nothing is cached between calls; coordination between
//! concurrent writers is the engine's responsibility, not the store's.

use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;

use crate::document::Document;
use crate::error::StoreError;

/// Load/save pair over the persisted document.
pub trait DocumentStore: Send + Sync {
    /// Read persisted state in full.
    fn load(&self) -> Result<Document, StoreError>;

    /// Overwrite persisted state with `document`. A concurrent reader
    /// must never observe a partially written document.
    fn save(&self, document: &Document) -> Result<(), StoreError>;
}

/// JSON-file-backed store.
///
/// `save` writes the serialized document to a temporary file in the
/// target's directory and renames it over the target, so readers see
/// either the old document or the new one, never a torn write. Output
/// is pretty-printed to stay byte-compatible with previously persisted
/// state.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed an empty document if the backing file does not exist yet.
    /// Returns `true` when a file was created. The no-clobber rename
    /// makes the seed safe against a concurrent seeder or writer.
    /// `load` itself never seeds; a missing file is
    /// [`StoreError::Unavailable`].
    pub fn create_if_missing(&self) -> Result<bool, StoreError> {
        let tmp = self.write_temp(&Document::default())?;
        match tmp.persist_noclobber(&self.path) {
            Ok(_) => Ok(true),
            Err(err) if err.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(StoreError::Unavailable(err.error)),
        }
    }

    /// Serialize `document` into a temporary file next to the target.
    fn write_temp(&self, document: &Document) -> Result<NamedTempFile, StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(parent).map_err(StoreError::Unavailable)?;
        let bytes = serde_json::to_vec_pretty(document)?;
        tmp.write_all(&bytes).map_err(StoreError::Unavailable)?;
        Ok(tmp)
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Document, StoreError> {
        let bytes = std::fs::read(&self.path).map_err(StoreError::Unavailable)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let tmp = self.write_temp(document)?;
        tmp.persist(&self.path)
            .map_err(|err| StoreError::Unavailable(err.error))?;
        Ok(())
    }
}

/// In-process store for tests.
///
/// Clones the document in and out, mimicking the full
/// read-modify-write discipline of the file store without touching
/// disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Document>,
}

impl MemoryStore {
    /// Store seeded with `document`.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Document, StoreError> {
        Ok(self.document.lock().clone())
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.lock() = document.clone();
        Ok(())
    }
}
