//! GPS → normalized map position, per orientation.

use tour_core::{GeoPoint, MapPoint, Orientation};

use crate::MapBounds;

/// Projects GPS fixes onto the rendered map asset as percent coordinates.
///
/// `mirror_x` is a per-deployment asset property: some printed maps are laid
/// out with east on the left.  It flips the landscape x axis (and therefore
/// the derived portrait y axis) so the on-screen dot moves the same way the
/// visitor walks.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapProjector {
    pub bounds:   MapBounds,
    pub mirror_x: bool,
}

impl MapProjector {
    pub fn new(bounds: MapBounds) -> Self {
        Self { bounds, mirror_x: false }
    }

    pub fn mirrored(bounds: MapBounds) -> Self {
        Self { bounds, mirror_x: true }
    }

    /// Project `pos` onto the asset for `orientation`.
    ///
    /// Returns `None` when `pos` is outside the bounds — the caller withholds
    /// the marker rather than drawing a clamped, misleading position.  For
    /// any in-bounds input both axes land in `[0, 100]`.
    pub fn project(&self, pos: GeoPoint, orientation: Orientation) -> Option<MapPoint> {
        if !self.bounds.contains(pos) {
            return None;
        }

        // Landscape frame: x east-west, y north-south (top of the asset is
        // the northern edge, so y grows as latitude decreases).
        let mut x = (pos.lon - self.bounds.min_lon()) / self.bounds.lon_span() * 100.0;
        let y = (self.bounds.max_lat() - pos.lat) / self.bounds.lat_span() * 100.0;
        if self.mirror_x {
            x = 100.0 - x;
        }

        Some(match orientation {
            Orientation::Landscape => MapPoint::new(x, y),
            // Portrait asset = landscape asset rotated 90° clockwise.
            Orientation::Portrait  => MapPoint::new(100.0 - y, x),
        })
    }

    /// Bounds-containment gate, exposed for callers that only need the
    /// predicate (e.g. deciding whether to show an "outside the map area"
    /// notice).
    #[inline]
    pub fn within_bounds(&self, pos: GeoPoint) -> bool {
        self.bounds.contains(pos)
    }
}
