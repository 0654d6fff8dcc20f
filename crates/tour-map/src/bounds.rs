//! `MapBounds` — the geographic rectangle covered by a map asset.

use tour_core::GeoPoint;

use crate::MapError;

/// A normalized geographic rectangle.
///
/// Fields are private: the constructors normalize whatever corner order the
/// caller supplies into `min ≤ max` on both axes and reject zero-span
/// rectangles, so a `MapBounds` value that exists is always safe to project
/// against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl MapBounds {
    /// Build bounds from two latitudes and two longitudes, in either order.
    ///
    /// # Errors
    ///
    /// [`MapError::DegenerateBounds`] if either axis has zero span (or a
    /// non-finite input collapses it).
    pub fn new(lat_a: f64, lat_b: f64, lon_a: f64, lon_b: f64) -> Result<Self, MapError> {
        let bounds = Self {
            min_lat: lat_a.min(lat_b),
            max_lat: lat_a.max(lat_b),
            min_lon: lon_a.min(lon_b),
            max_lon: lon_a.max(lon_b),
        };

        if !(bounds.max_lat - bounds.min_lat > 0.0) {
            return Err(MapError::DegenerateBounds { axis: "latitude" });
        }
        if !(bounds.max_lon - bounds.min_lon > 0.0) {
            return Err(MapError::DegenerateBounds { axis: "longitude" });
        }
        Ok(bounds)
    }

    /// Build bounds from the four named corners of a map asset.
    ///
    /// Corner naming is taken as documentation, not trusted: every supplied
    /// coordinate participates in the min/max normalization, so a survey that
    /// labelled its corners differently still yields correct bounds.
    pub fn from_corners(
        top_left:     GeoPoint,
        top_right:    GeoPoint,
        bottom_left:  GeoPoint,
        bottom_right: GeoPoint,
    ) -> Result<Self, MapError> {
        let lats = [top_left.lat, top_right.lat, bottom_left.lat, bottom_right.lat];
        let lons = [top_left.lon, top_right.lon, bottom_left.lon, bottom_right.lon];

        let min = |v: &[f64; 4]| v.iter().copied().fold(f64::INFINITY, f64::min);
        let max = |v: &[f64; 4]| v.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self::new(min(&lats), max(&lats), min(&lons), max(&lons))
    }

    /// `true` if `pos` lies inside the rectangle, inclusive on both axes.
    pub fn contains(&self, pos: GeoPoint) -> bool {
        pos.lat >= self.min_lat
            && pos.lat <= self.max_lat
            && pos.lon >= self.min_lon
            && pos.lon <= self.max_lon
    }

    #[inline]
    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    #[inline]
    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    #[inline]
    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    #[inline]
    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Latitude extent in degrees.  Always strictly positive.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees.  Always strictly positive.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}
