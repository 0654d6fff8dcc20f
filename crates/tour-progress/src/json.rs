//! JSON-file store backend.
//!
//! One small JSON document per tour, e.g.
//!
//! ```json
//! { "visited": [1, 2, 5], "notified": [1, 2, 3, 5] }
//! ```
//!
//! Saves go through a sibling temp file followed by an atomic rename, so a
//! crash mid-write leaves the previously committed record intact rather than
//! a truncated document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{ProgressRecord, ProgressResult, ProgressStore};

/// Stores the progress record as a single JSON file.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store over `path`.  The file need not exist yet; parent
    /// directories must.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProgressStore for JsonStore {
    fn load(&mut self) -> ProgressResult<ProgressRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ProgressRecord::empty());
            }
            Err(e) => return Err(e.into()),
        };

        // Unparseable content degrades to a fresh start; the next save
        // overwrites it.
        Ok(serde_json::from_slice(&bytes).unwrap_or_default())
    }

    fn save(&mut self, record: &ProgressRecord) -> ProgressResult<()> {
        let tmp = self.tmp_path();
        fs::write(&tmp, serde_json::to_vec_pretty(record)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> ProgressResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
