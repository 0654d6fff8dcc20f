//! Unit tests for tour-stops.

use tour_core::{GeoPoint, MapPoint, StopId};

use crate::{StopRegistry, TourStop};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn stop(id: u32, lat: f64, lon: f64, radius: f64) -> TourStop {
    TourStop {
        id:               StopId(id),
        title:            format!("Stop number {id}"),
        short_title:      format!("Stop {id}"),
        location:         GeoPoint::new(lat, lon),
        trigger_radius_m: radius,
        audio:            format!("/audio/stop{id}.mp3"),
        anchor_landscape: MapPoint::new(10.0 * id as f64, 50.0),
        anchor_portrait:  MapPoint::new(50.0, 10.0 * id as f64),
    }
}

fn eight_stop_registry() -> StopRegistry {
    let stops = (1..=8)
        .map(|i| stop(i, 51.4495 + 0.0005 * i as f64, 5.4950, 25.0))
        .collect();
    StopRegistry::new(stops).unwrap()
}

// ── StopRegistry ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;
    use crate::StopsError;

    #[test]
    fn sorts_by_id_regardless_of_input_order() {
        let reg = StopRegistry::new(vec![stop(3, 51.0, 5.0, 25.0), stop(1, 51.0, 5.0, 25.0)]).unwrap();
        let ids: Vec<u32> = reg.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, [1, 3]);
        assert_eq!(reg.first().id, StopId(1));
        assert_eq!(reg.max_id(), StopId(3));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(StopRegistry::new(vec![]), Err(StopsError::Empty)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = StopRegistry::new(vec![stop(2, 51.0, 5.0, 25.0), stop(2, 51.1, 5.1, 25.0)]);
        assert!(matches!(result, Err(StopsError::DuplicateId(StopId(2)))));
    }

    #[test]
    fn rejects_non_positive_radius() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = StopRegistry::new(vec![stop(1, 51.0, 5.0, bad)]);
            assert!(
                matches!(result, Err(StopsError::NonPositiveRadius { stop: StopId(1), .. })),
                "radius {bad} accepted"
            );
        }
    }

    #[test]
    fn get_and_contains() {
        let reg = eight_stop_registry();
        assert!(reg.contains(StopId(5)));
        assert_eq!(reg.get(StopId(5)).unwrap().short_title, "Stop 5");
        assert!(!reg.contains(StopId(9)));
        assert!(reg.get(StopId(0)).is_none());
    }

    #[test]
    fn traversal_next_after() {
        let reg = eight_stop_registry();
        assert_eq!(reg.next_after(StopId(3)).unwrap(), Some(StopId(4)));
        assert_eq!(reg.next_after(StopId(8)).unwrap(), None); // end of tour
        assert!(matches!(
            reg.next_after(StopId(42)),
            Err(StopsError::UnknownStop(StopId(42)))
        ));
    }

    #[test]
    fn traversal_skips_gaps_in_ids() {
        let reg = StopRegistry::new(vec![stop(1, 51.0, 5.0, 25.0), stop(4, 51.1, 5.0, 25.0)]).unwrap();
        assert_eq!(reg.next_after(StopId(1)).unwrap(), Some(StopId(4)));
    }

    #[test]
    fn distances_in_route_order() {
        let reg = eight_stop_registry();
        let pos = reg.first().location;
        let dists = reg.distances_from(pos);
        assert_eq!(dists.len(), 8);
        assert_eq!(dists[0].0, StopId(1));
        assert!(dists[0].1 < 1e-6);
        assert!(dists[7].1 > dists[1].1);
    }
}

// ── TourStop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stops {
    use super::*;
    use tour_core::Orientation;

    #[test]
    fn anchor_selects_by_orientation() {
        let s = stop(2, 51.0, 5.0, 25.0);
        assert_eq!(s.anchor(Orientation::Landscape), MapPoint::new(20.0, 50.0));
        assert_eq!(s.anchor(Orientation::Portrait),  MapPoint::new(50.0, 20.0));
    }

    #[test]
    fn in_range_boundary_is_inclusive() {
        let s = stop(1, 51.4495, 5.4950, 11.2);
        // Δlat = 0.0001° ≈ 11.1 m — just inside an 11.2 m fence.
        let near = GeoPoint::new(51.4496, 5.4950);
        assert!(s.in_range(near));
        // Δlat = 0.0002° ≈ 22.2 m — well outside.
        let far = GeoPoint::new(51.4497, 5.4950);
        assert!(!s.in_range(far));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{StopsError, load_stops_reader};

    const STOPS_CSV: &str = "\
id,title,short_title,lat,lon,trigger_radius_m,audio,land_x,land_y,port_x,port_y
2,Batterij & Proeftuin,Stop 2,51.450216,5.496373,25,/audio/stop2.mp3,61.0,48.0,52.0,61.0
1,Begin audiotour,Stop 1,51.449560,5.494960,25,/audio/stop1.mp3,42.0,55.0,45.0,42.0
";

    #[test]
    fn loads_and_sorts() {
        let reg = load_stops_reader(Cursor::new(STOPS_CSV)).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.first().id, StopId(1));
        assert_eq!(reg.first().title, "Begin audiotour");
        assert_eq!(reg.get(StopId(2)).unwrap().audio, "/audio/stop2.mp3");
        assert_eq!(reg.get(StopId(2)).unwrap().anchor_portrait, MapPoint::new(52.0, 61.0));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "id,title,short_title,lat,lon,trigger_radius_m,audio,land_x,land_y,port_x,port_y\n\
                   1,Begin,Stop 1,not-a-number,5.49,25,/a.mp3,0,0,0,0\n";
        assert!(matches!(
            load_stops_reader(Cursor::new(csv)),
            Err(StopsError::Parse(_))
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let csv = "id,title,short_title,lat,lon,trigger_radius_m,audio,land_x,land_y,port_x,port_y\n";
        assert!(matches!(load_stops_reader(Cursor::new(csv)), Err(StopsError::Empty)));
    }
}
