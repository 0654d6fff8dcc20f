//! Strongly typed stop identifier.
//!
//! `StopId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` because
//! stop registries are authored by hand in config files and the raw number is
//! the natural spelling there; callers indexing into parallel `Vec`s should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Identifier of a tour stop, unique within a [`StopRegistry`].
///
/// Registry convention: IDs are positive and the terminal stop carries the
/// maximum ID, so "next stop" traversal is a strictly-ascending walk that
/// never wraps.
///
/// [`StopRegistry`]: https://docs.rs/tour-stops
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopId(pub u32);

impl StopId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: StopId = StopId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for StopId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl From<StopId> for usize {
    #[inline(always)]
    fn from(id: StopId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for StopId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<StopId, Self::Error> {
        u32::try_from(n).map(StopId)
    }
}
