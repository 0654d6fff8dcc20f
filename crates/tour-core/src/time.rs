//! Engine time model.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing `Timestamp` in milliseconds,
//! supplied by the caller on every time-sensitive call — the core never reads
//! a wall clock.  Position fixes and orientation changes arrive on whatever
//! callback delivers them; stamping them at the boundary keeps every engine
//! operation deterministic and testable with synthetic clocks.
//!
//! Integer milliseconds (rather than a float seconds value) keep timer
//! arithmetic exact: the only schedulable entity in the engine is the
//! notification auto-dismiss timer, and "has it expired" must not depend on
//! floating-point drift.

use std::fmt;

/// An absolute engine timestamp in milliseconds.
///
/// The epoch is whatever the caller chooses (Unix millis in production,
/// zero-based counters in tests); the engine only ever subtracts timestamps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Return the timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Timestamp {
        Timestamp(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates to zero if `earlier > self` — out-of-order delivery from the
    /// location source must not underflow the timer.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
