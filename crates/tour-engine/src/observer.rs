//! Tour observer trait for presentation updates and diagnostics.

use tour_core::StopId;
use tour_proximity::ProximitySet;

use crate::ClearReason;

/// Callbacks invoked by [`TourController`][crate::TourController] at the
/// points a presentation layer cares about.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console narrator
///
/// ```rust,ignore
/// struct Narrator;
///
/// impl TourObserver for Narrator {
///     fn on_notification_raised(&mut self, stop: StopId, distance_m: f64) {
///         println!("you are {distance_m:.0} m from {stop}");
///     }
/// }
/// ```
pub trait TourObserver {
    /// Called after every proximity recomputation, with the fresh set.
    fn on_proximity_update(&mut self, _proximity: &ProximitySet) {}

    /// Called when a proximity notification is raised.
    ///
    /// `distance_m` is the live distance to the stop at raise time.  By the
    /// time this fires the stop is already in the persisted notified set.
    fn on_notification_raised(&mut self, _stop: StopId, _distance_m: f64) {}

    /// Called when the on-screen notification leaves the screen, with why.
    fn on_notification_cleared(&mut self, _stop: StopId, _reason: ClearReason) {}

    /// Called when a stop is newly marked visited (not on idempotent
    /// re-marks).
    fn on_visited(&mut self, _stop: StopId) {}

    /// Called when the whole tour progress is reset.
    fn on_reset(&mut self) {}
}

/// A [`TourObserver`] that does nothing.  Use when you need to call an
/// update method but don't want callbacks.
pub struct NoopObserver;

impl TourObserver for NoopObserver {}
