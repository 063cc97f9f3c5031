//! WGS-84 coordinates and the few geometric operations routing needs.
//!
//! Coordinates are single-precision: about a metre of resolution at the
//! equator, and half the memory of `f64` across the vertex table.  The
//! workspace has no runtime CRS parameter; everything is WGS-84 by type.

const EARTH_RADIUS_M: f32 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        GeoPoint { lat, lon }
    }

    /// `true` if both components are finite and inside
    /// `[-90, 90] × [-180, 180]`.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to `other` in metres (haversine).
    ///
    /// `f32` rounding keeps this within ~0.5 %, which is plenty for
    /// snapping and representative-vertex comparisons at city scale.
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        let half_dlat = 0.5 * (other.lat - self.lat).to_radians();
        let half_dlon = 0.5 * (other.lon - self.lon).to_radians();

        let cos_product = self.lat.to_radians().cos() * other.lat.to_radians().cos();
        let h = half_dlat.sin().powi(2) + cos_product * half_dlon.sin().powi(2);

        EARTH_RADIUS_M * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Linear interpolation between two points at fraction `t ∈ [0, 1]`.
    ///
    /// Plane interpolation in lat/lon space — fine for sampling an edge's
    /// straight-line geometry against cells that are themselves defined in
    /// lat/lon space.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f32) -> GeoPoint {
        GeoPoint {
            lat: self.lat + t * (other.lat - self.lat),
            lon: self.lon + t * (other.lon - self.lon),
        }
    }

    /// Cheap rectangular proximity test, for rejecting far-away candidates
    /// before paying for `distance_m`.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f32) -> bool {
        let dlat = (self.lat - center.lat).abs();
        let dlon = (self.lon - center.lon).abs();
        dlat <= half_deg && dlon <= half_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
