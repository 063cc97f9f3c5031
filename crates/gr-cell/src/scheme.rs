//! The cell-indexing contract shared by all grid implementations.
//!
//! # Pluggability
//!
//! The membership index, meta-graph builder, and pathfinder all consume
//! cells through [`CellScheme`], so the partition strategy (rectangular
//! geohash, hexagonal, …) can be swapped without touching the routing core.
//! A scheme instance is pinned to one resolution; `CellId`s produced by
//! different instances must never be mixed.
//!
//! # Adjacency vs. ring
//!
//! [`neighbors_of`](CellScheme::neighbors_of) returns only cells whose
//! boundary shares a **line segment** with the cell — corner-only contact is
//! excluded, which is what meta-graph adjacency requires.
//! [`ring_of`](CellScheme::ring_of) returns every touching cell including
//! corner-only ones; it exists for coverage expansion, where adjacency
//! semantics do not apply.

use gr_core::{CellId, GeoPoint};

use crate::error::CellResult;

/// A spatial partition of the WGS-84 plane at one fixed resolution.
///
/// Implementations must be `Send + Sync`: one scheme instance is shared
/// read-only across concurrent routing queries.
pub trait CellScheme: Send + Sync {
    /// The resolution this instance was configured with.  Coarser
    /// resolutions shrink the meta-graph but enlarge the fine subgraph
    /// selected per coarse edge.
    fn resolution(&self) -> u8;

    /// Map a coordinate to its containing cell.
    ///
    /// Total and deterministic over valid WGS-84 coordinates; returns
    /// [`CellError::InvalidCoordinate`](crate::CellError::InvalidCoordinate)
    /// for points outside the domain.
    fn cell_of(&self, p: GeoPoint) -> CellResult<CellId>;

    /// Centroid of the cell.  Always `contains(cell, center(cell))`.
    fn center(&self, cell: CellId) -> GeoPoint;

    /// `true` if `p` lies within the cell's boundary.
    fn contains(&self, cell: CellId, p: GeoPoint) -> bool;

    /// Same-resolution cells sharing a boundary segment with `cell`.
    ///
    /// Bounded degree (4 for rectangular grids, 6 for hex grids); computed
    /// arithmetically from the cell key, never by scanning other cells.
    fn neighbors_of(&self, cell: CellId) -> Vec<CellId>;

    /// Every touching cell, including corner-only contact (8 for
    /// rectangular grids).  Defaults to [`neighbors_of`](Self::neighbors_of)
    /// for schemes without corner-only neighbors.
    fn ring_of(&self, cell: CellId) -> Vec<CellId> {
        self.neighbors_of(cell)
    }

    /// Characteristic cell diameter in metres at the cell's latitude: the
    /// smaller of the cell's two dimensions.  Used as the sampling step when
    /// assigning long edges to every cell their geometry crosses — any step
    /// at or below this value cannot skip over a cell.
    fn cell_width_m(&self, cell: CellId) -> f32;
}

// ── Rectangular bounds ────────────────────────────────────────────────────────

/// Axis-aligned lat/lon rectangle, the decoded boundary of a rectangular
/// cell.  `f64` because high geohash precisions exceed `f32` resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl CellBounds {
    /// Midpoint of the rectangle.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            ((self.min_lat + self.max_lat) * 0.5) as f32,
            ((self.min_lon + self.max_lon) * 0.5) as f32,
        )
    }

    /// Point-in-rectangle test.  Lower edges are inclusive, upper edges
    /// exclusive, except at the domain maximum (lat 90 / lon 180) where the
    /// upper edge is inclusive so every valid point belongs to some cell.
    pub fn contains(&self, p: GeoPoint) -> bool {
        let lat = p.lat as f64;
        let lon = p.lon as f64;
        let lat_ok = lat >= self.min_lat
            && (lat < self.max_lat || (self.max_lat >= 90.0 && lat <= self.max_lat));
        let lon_ok = lon >= self.min_lon
            && (lon < self.max_lon || (self.max_lon >= 180.0 && lon <= self.max_lon));
        lat_ok && lon_ok
    }

    /// `true` if the two rectangles' boundaries share a line segment (not
    /// merely a corner point).
    ///
    /// For two cells of a uniform grid this holds exactly when they touch
    /// along one axis and **overlap with positive length** on the other.
    /// Corner-touching cells touch on both axes with zero overlap on each,
    /// and are rejected.  Longitude adjacency wraps across the antimeridian.
    pub fn shares_segment(&self, other: &CellBounds) -> bool {
        const EPS: f64 = 1e-9;

        let lat_touch = (self.max_lat - other.min_lat).abs() < EPS
            || (other.max_lat - self.min_lat).abs() < EPS;
        let lon_touch = (self.max_lon - other.min_lon).abs() < EPS
            || (other.max_lon - self.min_lon).abs() < EPS
            // antimeridian wrap: [.., 180] touches [-180, ..]
            || (self.max_lon >= 180.0 - EPS && other.min_lon <= -180.0 + EPS)
            || (other.max_lon >= 180.0 - EPS && self.min_lon <= -180.0 + EPS);

        let lat_overlap =
            self.max_lat.min(other.max_lat) - self.min_lat.max(other.min_lat) > EPS;
        let lon_overlap =
            self.max_lon.min(other.max_lon) - self.min_lon.max(other.min_lon) > EPS;

        (lat_touch && lon_overlap) || (lon_touch && lat_overlap)
    }

    /// Smaller of the rectangle's two dimensions in metres, evaluated at the
    /// rectangle's mid-latitude.
    pub fn width_m(&self) -> f32 {
        const M_PER_DEG: f64 = 111_195.0; // mean metres per degree of latitude

        let mid_lat = (self.min_lat + self.max_lat) * 0.5;
        let lat_m = (self.max_lat - self.min_lat) * M_PER_DEG;
        let lon_m = (self.max_lon - self.min_lon) * M_PER_DEG * mid_lat.to_radians().cos();
        lat_m.min(lon_m.abs()) as f32
    }
}
