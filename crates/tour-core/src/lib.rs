//! `tour-core` — foundational types for the geofenced tour engine workspace.
//!
//! This crate is a dependency of every other `tour-*` crate.  It intentionally
//! has no `tour-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `StopId`                                              |
//! | [`geo`]     | `GeoPoint`, haversine distance                        |
//! | [`time`]    | `Timestamp` (caller-supplied milliseconds)            |
//! | [`orient`]  | `Orientation` enum, `MapPoint` percent pair           |
//! | [`error`]   | `TourError`, `TourResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `tour-progress`.                               |

pub mod error;
pub mod geo;
pub mod ids;
pub mod orient;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TourError, TourResult};
pub use geo::GeoPoint;
pub use ids::StopId;
pub use orient::{MapPoint, Orientation};
pub use time::Timestamp;
