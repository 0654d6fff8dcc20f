//! The `StopRegistry` — ordered, immutable, validated stop set.

use tour_core::{GeoPoint, StopId};

use crate::{StopsError, TourStop};

/// The fixed set of stops making up one tour, in route order.
///
/// Construction sorts stops by ascending ID and validates the registry
/// invariants (unique IDs, strictly positive trigger radii, at least one
/// stop).  After that the registry is read-only; the engine never mutates it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct StopRegistry {
    stops: Vec<TourStop>,
}

impl StopRegistry {
    /// Build a registry from `stops`, sorting by ID and validating.
    ///
    /// # Errors
    ///
    /// - [`StopsError::Empty`] if `stops` is empty.
    /// - [`StopsError::DuplicateId`] if two stops share an ID.
    /// - [`StopsError::NonPositiveRadius`] if any trigger radius is `<= 0`
    ///   or not finite.
    pub fn new(mut stops: Vec<TourStop>) -> Result<Self, StopsError> {
        if stops.is_empty() {
            return Err(StopsError::Empty);
        }

        stops.sort_by_key(|s| s.id);

        for pair in stops.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(StopsError::DuplicateId(pair[0].id));
            }
        }
        for stop in &stops {
            if !(stop.trigger_radius_m > 0.0 && stop.trigger_radius_m.is_finite()) {
                return Err(StopsError::NonPositiveRadius {
                    stop:   stop.id,
                    radius: stop.trigger_radius_m,
                });
            }
        }

        Ok(Self { stops })
    }

    /// Number of stops on the tour.
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Look up a stop by ID.
    pub fn get(&self, id: StopId) -> Option<&TourStop> {
        self.stops
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &self.stops[i])
    }

    /// `true` if `id` exists in the registry.
    #[inline]
    pub fn contains(&self, id: StopId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate stops in route (ascending-ID) order.
    pub fn iter(&self) -> impl Iterator<Item = &TourStop> {
        self.stops.iter()
    }

    /// The first stop on the route.
    pub fn first(&self) -> &TourStop {
        &self.stops[0] // registry is never empty
    }

    /// The highest stop ID — by convention the terminal stop of the route.
    pub fn max_id(&self) -> StopId {
        self.stops[self.stops.len() - 1].id
    }

    /// The stop after `current` in route order, or `None` at the end of the
    /// tour.
    ///
    /// # Errors
    ///
    /// [`StopsError::UnknownStop`] if `current` is not in the registry.
    pub fn next_after(&self, current: StopId) -> Result<Option<StopId>, StopsError> {
        let i = self
            .stops
            .binary_search_by_key(&current, |s| s.id)
            .map_err(|_| StopsError::UnknownStop(current))?;
        Ok(self.stops.get(i + 1).map(|s| s.id))
    }

    /// Distance in metres from `pos` to each stop, in route order.
    ///
    /// Convenience for diagnostics and calibration tooling; proximity
    /// decisions go through `tour-proximity` instead.
    pub fn distances_from(&self, pos: GeoPoint) -> Vec<(StopId, f64)> {
        self.stops
            .iter()
            .map(|s| (s.id, s.distance_from(pos)))
            .collect()
    }
}
