//! `tour-engine` — the tour state controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`controller`] | `TourController<S>` — update cycle + command handlers    |
//! | [`builder`]    | `TourBuilder<S>` — validated construction                |
//! | [`notify`]     | `NotificationState` FSM, `Notification`, `ClearReason`   |
//! | [`observer`]   | `TourObserver` trait, `NoopObserver`                     |
//! | [`status`]     | `MarkerStatus` — per-stop presentation status            |
//! | [`config`]     | `TourConfig`                                             |
//! | [`error`]      | `EngineError`, `EngineResult<T>`                         |
//!
//! # Update cycle
//!
//! Every position update runs four phases, in order:
//!
//! 1. **Position**: the new fix wholesale-replaces the old one; `None`
//!    erases it (a signalled location error must never leave a stale
//!    last-known position behind).
//! 2. **Proximity**: the `ProximitySet` is recomputed from scratch.
//! 3. **Timer**: an on-screen notification past its auto-dismiss deadline is
//!    cleared.
//! 4. **Arbitration**: at most one new notification is raised — for the
//!    nearest in-range stop, only if nothing is currently displayed and the
//!    stop has been neither notified nor visited this progress lifetime.
//!    The notified flag is persisted *before* the observer hears about the
//!    raise, so a crash between the two can only under-notify, never
//!    double-notify.
//!
//! [`TourController::tick`] runs phases 3–4 alone so the auto-dismiss timer
//! advances even when no GPS fix arrives.

pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod observer;
pub mod status;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::TourBuilder;
pub use config::TourConfig;
pub use controller::TourController;
pub use error::{EngineError, EngineResult};
pub use notify::{ClearReason, Notification, NotificationState};
pub use observer::{NoopObserver, TourObserver};
pub use status::MarkerStatus;
