//! `tour-stops` — stop records, the validated registry, and the CSV loader.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`stop`]     | `TourStop` — one point of interest on the route         |
//! | [`registry`] | `StopRegistry` — ordered, immutable, validated stop set |
//! | [`loader`]   | `load_stops_csv` / `load_stops_reader`                  |
//! | [`error`]    | `StopsError`, `StopsResult<T>`                          |
//!
//! # Registry model
//!
//! A registry is loaded once at startup and never mutated.  Its order defines
//! "next stop" semantics: traversal walks to the next-higher ID and ends at
//! the stop carrying the maximum ID (no wrap-around).  Construction rejects
//! duplicate IDs, non-positive trigger radii, and empty registries so the
//! rest of the engine can rely on those invariants unconditionally.

pub mod error;
pub mod loader;
pub mod registry;
pub mod stop;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StopsError, StopsResult};
pub use loader::{load_stops_csv, load_stops_reader};
pub use registry::StopRegistry;
pub use stop::TourStop;
