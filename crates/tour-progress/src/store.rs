//! The `ProgressStore` trait implemented by all backends.

use crate::{ProgressRecord, ProgressResult};

/// A durable key-value home for the [`ProgressRecord`].
///
/// Implementations must make `save` a synchronous, idempotent overwrite of
/// the whole record, and must make `load` degrade to
/// [`ProgressRecord::empty`] when the stored data is absent or unreadable —
/// corrupt persistence is recovered as a fresh start, never propagated as a
/// user-visible failure.
pub trait ProgressStore {
    /// Read the latest committed record.
    ///
    /// Absent or corrupt data yields the empty record.  Errors are reserved
    /// for real I/O failures (permissions, disk).
    fn load(&mut self) -> ProgressResult<ProgressRecord>;

    /// Overwrite the stored record.  Idempotent.
    fn save(&mut self, record: &ProgressRecord) -> ProgressResult<()>;

    /// Remove the stored record entirely; a subsequent `load` returns the
    /// empty record.
    fn clear(&mut self) -> ProgressResult<()>;
}
