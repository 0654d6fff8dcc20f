//! `tour-map` — geographic map bounds and the percent-coordinate projector.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`bounds`]  | `MapBounds` — normalized geographic rectangle             |
//! | [`project`] | `MapProjector` — GPS → percent position per orientation   |
//! | [`error`]   | `MapError`, `MapResult<T>`                                |
//!
//! # Projection model
//!
//! A rendered map asset covers a geographic rectangle ([`MapBounds`]).  The
//! projector converts a GPS fix into percent offsets from the asset's
//! top-left corner: in landscape, x grows with longitude (optionally
//! mirrored to match the asset) and y grows as latitude decreases.  The
//! portrait asset is the landscape asset rotated a quarter-turn clockwise,
//! so the portrait mapping is `(x, y) → (100 − y, x)`.
//!
//! Positions outside the bounds project to `None` — a visitor off the map is
//! a normal, recoverable state (the marker is simply withheld), not an error.
//! The only projection error is a degenerate (zero-span) bounds rectangle,
//! and that is rejected when the bounds are constructed, long before any
//! projection runs.

pub mod bounds;
pub mod error;
pub mod project;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::MapBounds;
pub use error::{MapError, MapResult};
pub use project::MapProjector;
