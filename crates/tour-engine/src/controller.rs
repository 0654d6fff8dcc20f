//! The `TourController` — update cycle and command handlers.

use std::collections::BTreeSet;

use tour_core::{GeoPoint, MapPoint, Orientation, StopId, Timestamp};
use tour_map::MapProjector;
use tour_progress::{ProgressRecord, ProgressStore};
use tour_proximity::ProximitySet;
use tour_stops::StopRegistry;

use crate::{
    ClearReason, EngineError, EngineResult, MarkerStatus, Notification, NotificationState,
    TourBuilder, TourConfig, TourObserver,
};

/// Orchestrates proximity evaluation, notification arbitration, and all
/// mutations of the durable visited/notified sets.
///
/// `S` is the persistence backend.  Every observable mutation is saved
/// through it synchronously before the observer hears about the transition,
/// so an interruption never loses state the visitor has already seen.
///
/// The visited/notified sets are private on purpose: the controller is the
/// only mutation path, which is what keeps the in-memory sets and the stored
/// record in lock-step.  Read access goes through [`visited`][Self::visited]
/// / [`notified`][Self::notified].
///
/// Create via [`TourBuilder`].
pub struct TourController<S: ProgressStore> {
    /// The fixed stop registry, in route order.
    pub registry: StopRegistry,

    /// Engine configuration (auto-dismiss timeout, asset mirroring).
    pub config: TourConfig,

    pub(crate) projector:    Option<MapProjector>,
    pub(crate) store:        S,
    pub(crate) visited:      BTreeSet<StopId>,
    pub(crate) notified:     BTreeSet<StopId>,
    pub(crate) proximity:    ProximitySet,
    pub(crate) position:     Option<GeoPoint>,
    pub(crate) orientation:  Orientation,
    pub(crate) selected:     Option<StopId>,
    pub(crate) notification: NotificationState,
}

impl<S: ProgressStore> TourController<S> {
    /// Start building a controller over `registry` and `store`.
    pub fn builder(registry: StopRegistry, store: S) -> TourBuilder<S> {
        TourBuilder::new(registry, store)
    }

    // ── Update cycle ──────────────────────────────────────────────────────

    /// Feed the latest position fix (or its absence) into the engine.
    ///
    /// `None` means the location source reported an error or lost the fix;
    /// it erases the previous position outright so no stale proximity is
    /// ever derived from it.  `now` stamps the update for the notification
    /// timer.
    ///
    /// Runs the full cycle: replace position → recompute proximity →
    /// expire timer → arbitrate.
    pub fn update_position<O: TourObserver>(
        &mut self,
        fix:      Option<GeoPoint>,
        now:      Timestamp,
        observer: &mut O,
    ) -> EngineResult<()> {
        self.position = fix;
        self.proximity = ProximitySet::evaluate(self.position, &self.registry);
        observer.on_proximity_update(&self.proximity);

        self.expire_notification(now, observer);
        self.arbitrate(now, observer)
    }

    /// Advance the timer and arbitration phases without a new fix.
    ///
    /// Call this from a coarse periodic timer so auto-dismiss fires even
    /// when the location source goes quiet.
    pub fn tick<O: TourObserver>(&mut self, now: Timestamp, observer: &mut O) -> EngineResult<()> {
        self.expire_notification(now, observer);
        self.arbitrate(now, observer)
    }

    fn expire_notification<O: TourObserver>(&mut self, now: Timestamp, observer: &mut O) {
        if self.notification.expired(now, self.config.notify_timeout_ms) {
            if let Some(n) = self.notification.clear() {
                observer.on_notification_cleared(n.stop, ClearReason::TimedOut);
            }
        }
    }

    /// At most one new notification per cycle, for the nearest in-range
    /// stop, and only if nothing is displayed and the stop has never
    /// notified nor been visited this progress lifetime.
    fn arbitrate<O: TourObserver>(&mut self, now: Timestamp, observer: &mut O) -> EngineResult<()> {
        let Some(candidate) = self.proximity.nearest_stop() else {
            return Ok(());
        };
        if self.notification.is_displaying()
            || self.notified.contains(&candidate)
            || self.visited.contains(&candidate)
        {
            return Ok(());
        }

        // Persist the dedup flag before anything is shown: a crash between
        // the save and the raise under-notifies, never double-notifies.
        self.notified.insert(candidate);
        if let Err(e) = self.persist() {
            self.notified.remove(&candidate);
            return Err(e.into());
        }

        self.notification.raise(candidate, now);
        observer.on_notification_raised(candidate, self.proximity.distance_to(candidate));
        Ok(())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Mark `stop` as visited and persist immediately.
    ///
    /// Idempotent: re-marking an already-visited stop changes nothing and
    /// fires no observer callback.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownStop`] for IDs not in the registry.
    pub fn mark_visited<O: TourObserver>(
        &mut self,
        stop:     StopId,
        observer: &mut O,
    ) -> EngineResult<()> {
        if !self.registry.contains(stop) {
            return Err(EngineError::UnknownStop(stop));
        }
        if self.visited.insert(stop) {
            if let Err(e) = self.persist() {
                self.visited.remove(&stop);
                return Err(e.into());
            }
            observer.on_visited(stop);
        }
        Ok(())
    }

    /// Clear both durable sets and the stored record — the only operation
    /// that shrinks either set.
    ///
    /// An on-screen notification, if any, is presentation state and stays
    /// until dismissed or timed out; once it clears, its stop is eligible to
    /// notify again.
    pub fn reset<O: TourObserver>(&mut self, observer: &mut O) -> EngineResult<()> {
        self.visited.clear();
        self.notified.clear();
        self.store.clear()?;
        observer.on_reset();
        Ok(())
    }

    /// Explicitly dismiss the on-screen notification.  No-op when idle;
    /// never touches the notified set (dedup outlives dismissal).
    pub fn dismiss_notification<O: TourObserver>(&mut self, observer: &mut O) {
        if let Some(n) = self.notification.clear() {
            observer.on_notification_cleared(n.stop, ClearReason::Dismissed);
        }
    }

    /// Open the notified stop: clears the notification and selects the stop
    /// for the detail view.  Returns the opened stop, or `None` when idle.
    pub fn open_notification<O: TourObserver>(&mut self, observer: &mut O) -> Option<StopId> {
        let n = self.notification.clear()?;
        self.selected = Some(n.stop);
        observer.on_notification_cleared(n.stop, ClearReason::Opened);
        Some(n.stop)
    }

    /// Open `stop` in the detail view.
    pub fn select_stop(&mut self, stop: StopId) -> EngineResult<()> {
        if !self.registry.contains(stop) {
            return Err(EngineError::UnknownStop(stop));
        }
        self.selected = Some(stop);
        Ok(())
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Record an orientation change; affects projection and anchors only.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The stop after `current` in route order; `Ok(None)` is end of tour.
    pub fn next_stop(&self, current: StopId) -> EngineResult<Option<StopId>> {
        self.registry
            .next_after(current)
            .map_err(|_| EngineError::UnknownStop(current))
    }

    /// Derived marker status for `stop` (unknown IDs read as `Unvisited`).
    pub fn marker_status(&self, stop: StopId) -> MarkerStatus {
        if self.selected == Some(stop) {
            MarkerStatus::Active
        } else if self.visited.contains(&stop) {
            MarkerStatus::Visited
        } else if self.proximity.is_nearby(stop) {
            MarkerStatus::Nearby
        } else {
            MarkerStatus::Unvisited
        }
    }

    /// The visitor's dot on the map for the current orientation.
    ///
    /// `None` when there is no fix, no map is configured, or the fix is
    /// outside the map bounds (the marker is withheld, proximity still
    /// runs).
    pub fn projected_position(&self) -> Option<MapPoint> {
        let pos = self.position?;
        self.projector.as_ref()?.project(pos, self.orientation)
    }

    /// The calibrated anchor of `stop` on the current orientation's asset.
    pub fn stop_anchor(&self, stop: StopId) -> EngineResult<MapPoint> {
        let s = self.registry.get(stop).ok_or(EngineError::UnknownStop(stop))?;
        Ok(s.anchor(self.orientation))
    }

    /// The notification currently on screen, with the live distance to its
    /// stop (`f64::INFINITY` once the visitor has wandered back out of
    /// range).
    pub fn active_notification(&self) -> Option<(Notification, f64)> {
        self.notification
            .displayed()
            .map(|n| (n, self.proximity.distance_to(n.stop)))
    }

    /// Stops the visitor has confirmed, ascending.
    pub fn visited(&self) -> &BTreeSet<StopId> {
        &self.visited
    }

    /// Stops that have raised their one notification, ascending.
    pub fn notified(&self) -> &BTreeSet<StopId> {
        &self.notified
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// `true` once every stop in the registry has been visited.
    pub fn is_complete(&self) -> bool {
        self.registry.iter().all(|s| self.visited.contains(&s.id))
    }

    /// The current proximity set (recomputed on every update).
    pub fn proximity(&self) -> &ProximitySet {
        &self.proximity
    }

    /// The latest position fix, if the location source has one.
    pub fn position(&self) -> Option<GeoPoint> {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The stop currently open in the detail view.
    pub fn selected(&self) -> Option<StopId> {
        self.selected
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Read access to the persistence backend (e.g. to clone a
    /// [`MemoryStore`][tour_progress::MemoryStore] when simulating a
    /// restart).
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<(), tour_progress::ProgressError> {
        let record = ProgressRecord::from_sets(&self.visited, &self.notified);
        self.store.save(&record)
    }
}
