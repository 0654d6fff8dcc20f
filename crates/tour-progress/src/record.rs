//! The persisted progress record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tour_core::StopId;

/// Everything the tour persists: which stops were visited, and which have
/// already raised their one proximity notification.
///
/// Raw `u32`s rather than `StopId` so the stored form is independent of the
/// in-memory types; IDs are sorted ascending on construction for stable
/// output.  The two lists are independent — a stop can be notified but never
/// visited, or marked visited without ever having been in range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub visited: Vec<u32>,

    #[serde(default)]
    pub notified: Vec<u32>,
}

impl ProgressRecord {
    /// The fresh-start record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a record from the live sets, sorted ascending.
    pub fn from_sets(visited: &BTreeSet<StopId>, notified: &BTreeSet<StopId>) -> Self {
        Self {
            visited:  visited.iter().map(|id| id.0).collect(),
            notified: notified.iter().map(|id| id.0).collect(),
        }
    }

    /// Rehydrate the live sets from the stored record.
    pub fn into_sets(self) -> (BTreeSet<StopId>, BTreeSet<StopId>) {
        (
            self.visited.into_iter().map(StopId).collect(),
            self.notified.into_iter().map(StopId).collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.notified.is_empty()
    }
}
