//! The `TourStop` record.

use tour_core::{GeoPoint, MapPoint, Orientation, StopId};

/// One fixed point of interest on the tour.
///
/// Stops are configuration, not runtime state: they are loaded once into a
/// [`StopRegistry`][crate::StopRegistry] and never created or destroyed
/// while the engine runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct TourStop {
    /// Unique positive identifier; registry order is ascending-ID order.
    pub id: StopId,

    /// Full display title, used in notification headlines.
    pub title: String,

    /// Compact label ("Stop 3") for markers and notification subtext.
    pub short_title: String,

    /// Canonical geographic location of the stop.
    pub location: GeoPoint,

    /// Geofence radius in metres.  A visitor within this distance of
    /// `location` counts as "arrived".  Always strictly positive.
    pub trigger_radius_m: f64,

    /// Opaque audio asset reference (URL or path), passed through untouched.
    pub audio: String,

    /// Calibrated marker position on the landscape-oriented map asset.
    pub anchor_landscape: MapPoint,

    /// Calibrated marker position on the portrait-oriented map asset.
    pub anchor_portrait: MapPoint,
}

impl TourStop {
    /// The calibrated marker anchor for `orientation`.
    ///
    /// The two anchors are independent calibrations — the portrait asset is
    /// not derivable from the landscape one pixel-for-pixel, so each stop
    /// carries both.
    #[inline]
    pub fn anchor(&self, orientation: Orientation) -> MapPoint {
        match orientation {
            Orientation::Landscape => self.anchor_landscape,
            Orientation::Portrait  => self.anchor_portrait,
        }
    }

    /// Distance in metres from `pos` to this stop's location.
    #[inline]
    pub fn distance_from(&self, pos: GeoPoint) -> f64 {
        pos.distance_m(self.location)
    }

    /// `true` if `pos` lies inside this stop's geofence.
    #[inline]
    pub fn in_range(&self, pos: GeoPoint) -> bool {
        self.distance_from(pos) <= self.trigger_radius_m
    }
}
