//! In-memory store for tests and ephemeral sessions.

use crate::{ProgressRecord, ProgressResult, ProgressStore};

/// A `ProgressStore` that lives and dies with the process.
///
/// Useful in tests and in try-before-you-save demo modes.  Cloning the store
/// and rebuilding a controller over the clone simulates a process restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<ProgressRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of saves is not tracked; this reports whether anything is
    /// currently stored.
    pub fn is_saved(&self) -> bool {
        self.record.is_some()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&mut self) -> ProgressResult<ProgressRecord> {
        Ok(self.record.clone().unwrap_or_default())
    }

    fn save(&mut self, record: &ProgressRecord) -> ProgressResult<()> {
        self.record = Some(record.clone());
        Ok(())
    }

    fn clear(&mut self) -> ProgressResult<()> {
        self.record = None;
        Ok(())
    }
}
