//! Unit tests for tour-map.

use tour_core::{GeoPoint, Orientation};

use crate::{MapBounds, MapError, MapProjector};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Bounds of the campus map asset used throughout: 51.20–51.21 N, 6.01–6.03 E.
fn campus_bounds() -> MapBounds {
    MapBounds::new(51.20, 51.21, 6.01, 6.03).unwrap()
}

// ── MapBounds ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use super::*;

    #[test]
    fn normalizes_swapped_axes() {
        let b = MapBounds::new(51.21, 51.20, 6.03, 6.01).unwrap();
        assert_eq!(b.min_lat(), 51.20);
        assert_eq!(b.max_lat(), 51.21);
        assert_eq!(b.min_lon(), 6.01);
        assert_eq!(b.max_lon(), 6.03);
    }

    #[test]
    fn from_corners_ignores_corner_naming() {
        // Corners deliberately mislabelled: "top_left" is the south-east one.
        let b = MapBounds::from_corners(
            GeoPoint::new(51.20, 6.03),
            GeoPoint::new(51.20, 6.01),
            GeoPoint::new(51.21, 6.03),
            GeoPoint::new(51.21, 6.01),
        )
        .unwrap();
        assert_eq!(b, campus_bounds());
    }

    #[test]
    fn rejects_zero_lat_span() {
        assert_eq!(
            MapBounds::new(51.20, 51.20, 6.01, 6.03),
            Err(MapError::DegenerateBounds { axis: "latitude" })
        );
    }

    #[test]
    fn rejects_zero_lon_span() {
        assert_eq!(
            MapBounds::new(51.20, 51.21, 6.02, 6.02),
            Err(MapError::DegenerateBounds { axis: "longitude" })
        );
    }

    #[test]
    fn rejects_nan_input() {
        assert!(MapBounds::new(f64::NAN, 51.21, 6.01, 6.03).is_err());
    }

    #[test]
    fn contains_is_inclusive_at_edges() {
        let b = campus_bounds();
        assert!(b.contains(GeoPoint::new(51.20, 6.01)));
        assert!(b.contains(GeoPoint::new(51.21, 6.03)));
        assert!(b.contains(GeoPoint::new(51.205, 6.02)));
    }

    #[test]
    fn contains_rejects_each_axis_independently() {
        let b = campus_bounds();
        assert!(!b.contains(GeoPoint::new(51.199, 6.02))); // south of bounds
        assert!(!b.contains(GeoPoint::new(51.211, 6.02))); // north of bounds
        assert!(!b.contains(GeoPoint::new(51.205, 6.009))); // west of bounds
        assert!(!b.contains(GeoPoint::new(51.205, 6.031))); // east of bounds
    }
}

// ── MapProjector ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod projector {
    use super::*;

    #[test]
    fn out_of_bounds_projects_to_none() {
        let p = MapProjector::new(campus_bounds());
        assert!(p.project(GeoPoint::new(51.25, 6.02), Orientation::Landscape).is_none());
        assert!(!p.within_bounds(GeoPoint::new(51.25, 6.02)));
    }

    #[test]
    fn landscape_corners() {
        let p = MapProjector::new(campus_bounds());

        // North-west corner of the geography → top-left of the asset.
        let nw = p.project(GeoPoint::new(51.21, 6.01), Orientation::Landscape).unwrap();
        assert!((nw.x - 0.0).abs() < 1e-9 && (nw.y - 0.0).abs() < 1e-9);

        // South-east corner → bottom-right.
        let se = p.project(GeoPoint::new(51.20, 6.03), Orientation::Landscape).unwrap();
        assert!((se.x - 100.0).abs() < 1e-9 && (se.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn landscape_midpoint_centers() {
        let p = MapProjector::new(campus_bounds());
        let mid = p.project(GeoPoint::new(51.205, 6.02), Orientation::Landscape).unwrap();
        assert!((mid.x - 50.0).abs() < 1e-6);
        assert!((mid.y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn in_bounds_always_lands_in_percent_range() {
        let p = MapProjector::new(campus_bounds());
        for i in 0..=10 {
            for j in 0..=10 {
                let pos = GeoPoint::new(51.20 + 0.001 * i as f64, 6.01 + 0.002 * j as f64);
                for o in [Orientation::Landscape, Orientation::Portrait] {
                    let pt = p.project(pos, o).unwrap();
                    assert!((0.0..=100.0).contains(&pt.x), "{o}: x = {}", pt.x);
                    assert!((0.0..=100.0).contains(&pt.y), "{o}: y = {}", pt.y);
                }
            }
        }
    }

    #[test]
    fn portrait_is_quarter_turn_clockwise() {
        let p = MapProjector::new(campus_bounds());
        let pos = GeoPoint::new(51.2075, 6.015); // NW quadrant

        let land = p.project(pos, Orientation::Landscape).unwrap();
        let port = p.project(pos, Orientation::Portrait).unwrap();

        assert!((port.x - (100.0 - land.y)).abs() < 1e-9);
        assert!((port.y - land.x).abs() < 1e-9);
        assert_ne!(land, port);
    }

    #[test]
    fn walking_north_moves_up_in_landscape_left_in_portrait() {
        let p = MapProjector::new(campus_bounds());
        let south = GeoPoint::new(51.202, 6.02);
        let north = GeoPoint::new(51.208, 6.02);

        let land_s = p.project(south, Orientation::Landscape).unwrap();
        let land_n = p.project(north, Orientation::Landscape).unwrap();
        assert!(land_n.y < land_s.y, "north is up (smaller y) in landscape");

        let port_s = p.project(south, Orientation::Portrait).unwrap();
        let port_n = p.project(north, Orientation::Portrait).unwrap();
        assert!(port_n.x > port_s.x, "north is right (larger x) after clockwise rotation");
    }

    #[test]
    fn mirror_flips_landscape_x_only() {
        let plain    = MapProjector::new(campus_bounds());
        let mirrored = MapProjector::mirrored(campus_bounds());
        let pos = GeoPoint::new(51.205, 6.015);

        let a = plain.project(pos, Orientation::Landscape).unwrap();
        let b = mirrored.project(pos, Orientation::Landscape).unwrap();
        assert!((b.x - (100.0 - a.x)).abs() < 1e-9);
        assert!((b.y - a.y).abs() < 1e-9);
    }
}
