//! Persistence collaborator.
//!
//! A store hands back the whole collection at once and takes it back at
//! once. There is no incremental append: `save` replaces whatever was
//! persisted before.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::collection::AnagramPair;
use crate::error::CoreError;

/// Whole-collection storage.
///
/// Implementations: JSON file on disk, in-memory.
pub trait Store {
    /// Read every persisted record. A missing source is an empty collection,
    /// not an error.
    fn load(&self) -> Result<Vec<AnagramPair>, CoreError>;

    /// Replace the persisted records with `records`.
    fn save(&mut self, records: &[AnagramPair]) -> Result<(), CoreError>;
}

/// JSON array of `{ "subject1": ..., "subject2": ... }` objects, indented
/// with four spaces.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Vec<AnagramPair>, CoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no database yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<AnagramPair> =
            serde_json::from_str(&text).map_err(|source| CoreError::Format {
                file: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save(&mut self, records: &[AnagramPair]) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut ser)
            .map_err(|source| CoreError::Format {
                file: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, buf)?;
        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}

/// Keeps records in memory only. Useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<AnagramPair>,
}

impl MemoryStore {
    pub fn new(records: Vec<AnagramPair>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AnagramPair] {
        &self.records
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Vec<AnagramPair>, CoreError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[AnagramPair]) -> Result<(), CoreError> {
        self.records = records.to_vec();
        Ok(())
    }
}

impl<S: Store + ?Sized> Store for &mut S {
    fn load(&self) -> Result<Vec<AnagramPair>, CoreError> {
        (**self).load()
    }

    fn save(&mut self, records: &[AnagramPair]) -> Result<(), CoreError> {
        (**self).save(records)
    }
}
