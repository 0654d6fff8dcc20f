//! Unit tests for tour-core primitives.

#[cfg(test)]
mod ids {
    use crate::StopId;

    #[test]
    fn index_roundtrip() {
        let id = StopId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(StopId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StopId(1) < StopId(2));
        assert!(StopId(8) > StopId(3));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(StopId::INVALID.0, u32::MAX);
        assert_eq!(StopId::default(), StopId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(StopId(3).to_string(), "StopId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(51.4495, 5.4950);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(51.4495, 5.4950);
        let b = GeoPoint::new(51.4504, 5.4964);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn one_ten_thousandth_degree_latitude() {
        // Δlat = 0.0001° ≈ 11.1 m; must land within ±1 m.
        let a = GeoPoint::new(51.4495, 5.4950);
        let b = GeoPoint::new(51.4496, 5.4950);
        let d = a.distance_m(b);
        assert!((d - 11.1).abs() < 1.0, "got {d}");
    }

    #[test]
    fn one_degree_latitude_approx() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(51.0, 5.0);
        let b = GeoPoint::new(52.0, 5.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn campus_scale_distance() {
        // Two real stops ~100 m apart must not be off by metres.
        let a = GeoPoint::new(51.44956011298008, 5.4949600537464685);
        let b = GeoPoint::new(51.45021598420962, 5.496372603037956);
        let d = a.distance_m(b);
        assert!((100.0..150.0).contains(&d), "got {d}");
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;

    #[test]
    fn offset_and_since() {
        let t = Timestamp(1_000);
        assert_eq!(t.offset(500), Timestamp(1_500));
        assert_eq!(t + 500, Timestamp(1_500));
        assert_eq!(Timestamp(1_500).since(t), 500);
    }

    #[test]
    fn since_saturates_on_out_of_order_stamps() {
        assert_eq!(Timestamp(100).since(Timestamp(900)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp(250).to_string(), "250ms");
    }
}

#[cfg(test)]
mod orient {
    use crate::{MapPoint, Orientation};

    #[test]
    fn flipped() {
        assert_eq!(Orientation::Landscape.flipped(), Orientation::Portrait);
        assert_eq!(Orientation::Portrait.flipped(), Orientation::Landscape);
    }

    #[test]
    fn default_is_landscape() {
        assert_eq!(Orientation::default(), Orientation::Landscape);
    }

    #[test]
    fn display() {
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
        assert_eq!(MapPoint::new(12.34, 80.5).to_string(), "(12.3%, 80.5%)");
    }
}
