//! The `ProximitySet` — stops currently within their own trigger radius.

use std::collections::BTreeMap;

use tour_core::{GeoPoint, StopId};
use tour_stops::StopRegistry;

/// Stops the visitor is currently inside, keyed by ID with the live distance
/// in metres.
///
/// A `BTreeMap` rather than a hash map: iteration in ascending-ID order makes
/// the nearest-stop tie-break (lowest ID wins) fall out of a plain in-order
/// scan instead of needing a secondary sort key.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximitySet {
    inner: BTreeMap<StopId, f64>,
}

impl ProximitySet {
    /// The empty set — what an unknown position always evaluates to.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Evaluate the geofences in `stops` against `pos`.
    ///
    /// `None` (location unavailable) produces the empty set: stale proximity
    /// must never be reported once the location source has signalled an
    /// error.  Otherwise a stop is included iff its distance from `pos` is
    /// within its own trigger radius, boundary inclusive.
    pub fn evaluate(pos: Option<GeoPoint>, stops: &StopRegistry) -> Self {
        let Some(pos) = pos else {
            return Self::empty();
        };

        let mut inner = BTreeMap::new();
        for stop in stops.iter() {
            let distance = stop.distance_from(pos);
            if distance <= stop.trigger_radius_m {
                inner.insert(stop.id, distance);
            }
        }
        Self { inner }
    }

    /// Membership test.
    #[inline]
    pub fn is_nearby(&self, stop: StopId) -> bool {
        self.inner.contains_key(&stop)
    }

    /// Distance to `stop` in metres, or `f64::INFINITY` when the stop is not
    /// currently in range — the sentinel composes directly with min-distance
    /// comparisons.
    #[inline]
    pub fn distance_to(&self, stop: StopId) -> f64 {
        self.inner.get(&stop).copied().unwrap_or(f64::INFINITY)
    }

    /// The in-range stop with the minimum distance, or `None` if the set is
    /// empty.  Ties break to the lowest stop ID: the scan runs in ID order
    /// and only a strictly smaller distance displaces the current minimum.
    pub fn nearest_stop(&self) -> Option<StopId> {
        let mut nearest: Option<(StopId, f64)> = None;
        for (&id, &distance) in &self.inner {
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((id, distance)),
            }
        }
        nearest.map(|(id, _)| id)
    }

    /// Iterate `(StopId, distance_m)` in ascending-ID order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, f64)> + '_ {
        self.inner.iter().map(|(&id, &d)| (id, d))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
