//! Unit tests for gr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CellId, EdgeId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VertexId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VertexId(0) < VertexId(1));
        assert!(EdgeId(100) > EdgeId(99));
        assert!(CellId(7) < CellId(8));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(CellId::INVALID.0, u64::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(VertexId(7).to_string(), "VertexId(7)");
        assert_eq!(CellId(3).to_string(), "CellId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(48.137, 11.575);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_lat_approx() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(48.0, 11.0);
        let b = GeoPoint::new(49.0, 11.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 24.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 11.0).abs() < 1e-5);
        assert!((mid.lon - 22.0).abs() < 1e-5);
    }

    #[test]
    fn validity_domain() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 180.5).is_valid());
        assert!(!GeoPoint::new(f32::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f32::INFINITY).is_valid());
    }
}

#[cfg(test)]
mod tags {
    use crate::{TagFilter, WayClass};

    #[test]
    fn all_allows_everything() {
        let f = TagFilter::all();
        for c in WayClass::ALL {
            assert!(f.allows(c), "all() should allow {c}");
        }
    }

    #[test]
    fn deny_and_allow_roundtrip() {
        let f = TagFilter::all().deny(WayClass::Footway);
        assert!(!f.allows(WayClass::Footway));
        assert!(f.allows(WayClass::Residential));
        let f = f.allow(WayClass::Footway);
        assert!(f.allows(WayClass::Footway));
    }

    #[test]
    fn only_is_exact() {
        let f = TagFilter::only(&[WayClass::Motorway, WayClass::Primary]);
        assert!(f.allows(WayClass::Motorway));
        assert!(f.allows(WayClass::Primary));
        assert!(!f.allows(WayClass::Residential));
        assert!(!f.allows(WayClass::Footway));
    }

    #[test]
    fn drivable_excludes_soft_modes() {
        let f = TagFilter::drivable();
        assert!(!f.allows(WayClass::Footway));
        assert!(!f.allows(WayClass::Cycleway));
        assert!(f.allows(WayClass::Motorway));
        for c in WayClass::ALL {
            assert_eq!(f.allows(c), c.is_drivable());
        }
    }

    #[test]
    fn empty_filter() {
        assert!(TagFilter::only(&[]).is_empty());
        assert!(!TagFilter::all().is_empty());
    }
}
