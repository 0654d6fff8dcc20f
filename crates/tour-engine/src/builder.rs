//! Fluent builder for constructing a [`TourController`].

use tour_core::Orientation;
use tour_map::{MapBounds, MapProjector};
use tour_progress::ProgressStore;
use tour_proximity::ProximitySet;
use tour_stops::StopRegistry;

use crate::{EngineResult, NotificationState, TourConfig, TourController};

/// Fluent builder for [`TourController<S>`].
///
/// # Required inputs
///
/// - [`StopRegistry`] — already validated by its own constructor
/// - `S: ProgressStore` — the persistence backend
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                     |
/// |-------------------|---------------------------------------------|
/// | `.bounds(b)`      | No map — projection queries return `None`   |
/// | `.config(c)`      | `TourConfig::default()` (10 s timeout)      |
/// | `.orientation(o)` | `Orientation::Landscape`                    |
///
/// # Example
///
/// ```rust,ignore
/// let registry = load_stops_csv(Path::new("stops.csv"))?;
/// let bounds   = MapBounds::new(51.20, 51.21, 6.01, 6.03)?;
/// let mut tour = TourController::builder(registry, JsonStore::new(path))
///     .bounds(bounds)
///     .build()?;
/// tour.update_position(Some(fix), now, &mut NoopObserver)?;
/// ```
pub struct TourBuilder<S: ProgressStore> {
    registry:    StopRegistry,
    store:       S,
    bounds:      Option<MapBounds>,
    config:      TourConfig,
    orientation: Orientation,
}

impl<S: ProgressStore> TourBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(registry: StopRegistry, store: S) -> Self {
        Self {
            registry,
            store,
            bounds:      None,
            config:      TourConfig::default(),
            orientation: Orientation::default(),
        }
    }

    /// Supply the geographic bounds of the map asset.
    ///
    /// `MapBounds` is validated at its own construction (degenerate bounds
    /// never get this far), so this cannot fail.  Without bounds the
    /// controller runs map-less: proximity and notifications work, position
    /// projection returns `None`.
    pub fn bounds(mut self, bounds: MapBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn config(mut self, config: TourConfig) -> Self {
        self.config = config;
        self
    }

    /// Initial viewport orientation (can be changed later via
    /// [`TourController::set_orientation`]).
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Load persisted progress and return a ready controller.
    ///
    /// Stored stop IDs that no longer exist in the registry are dropped
    /// silently — the registry is the source of truth for what exists.  A
    /// corrupt store has already degraded to the empty record inside
    /// [`ProgressStore::load`], so a damaged save file means a fresh start,
    /// not a startup failure.
    pub fn build(mut self) -> EngineResult<TourController<S>> {
        let (mut visited, mut notified) = self.store.load()?.into_sets();
        visited.retain(|id| self.registry.contains(*id));
        notified.retain(|id| self.registry.contains(*id));

        let projector = self.bounds.map(|b| MapProjector {
            bounds:   b,
            mirror_x: self.config.mirror_x,
        });

        Ok(TourController {
            registry: self.registry,
            config: self.config,
            projector,
            store: self.store,
            visited,
            notified,
            proximity:    ProximitySet::empty(),
            position:     None,
            orientation:  self.orientation,
            selected:     None,
            notification: NotificationState::Idle,
        })
    }
}
