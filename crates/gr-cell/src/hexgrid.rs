//! Hexagonal cells on an axial-coordinate grid.
//!
//! Pointy-top hexagons tiled over the lat/lon plane (equirectangular
//! treatment of WGS-84, adequate for city-to-region extents).  Every hex has
//! exactly 6 neighbors and all of them share a boundary segment, so there is
//! no corner-exclusion step and `ring_of == neighbors_of`.
//!
//! # Key layout
//!
//! Axial coordinates `(q, r)` are stored as two `i32`s packed into the
//! `CellId(u64)`: `q` in the high word, `r` in the low word.

use gr_core::{CellId, GeoPoint};

use crate::error::{CellError, CellResult};
use crate::scheme::CellScheme;

const SQRT3: f64 = 1.732_050_807_568_877_2;
const M_PER_DEG: f64 = 111_195.0;

/// Axial neighbor offsets, fixed order for deterministic enumeration.
const DIRECTIONS: [(i32, i32); 6] =
    [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Pointy-top hexagonal cell scheme.
///
/// `size_deg` is the hex circumradius in degrees; smaller values give a
/// finer partition.  The resolution reported to the routing core is a
/// caller-chosen label (hex grids have no canonical precision scale).
#[derive(Copy, Clone, Debug)]
pub struct HexGrid {
    size_deg: f64,
    resolution: u8,
}

impl HexGrid {
    pub fn new(size_deg: f64, resolution: u8) -> Self {
        assert!(
            size_deg.is_finite() && size_deg > 0.0,
            "hex size must be positive, got {size_deg}"
        );
        Self { size_deg, resolution }
    }

    #[inline]
    fn pack(q: i32, r: i32) -> CellId {
        CellId(((q as u32 as u64) << 32) | r as u32 as u64)
    }

    #[inline]
    fn unpack(cell: CellId) -> (i32, i32) {
        ((cell.0 >> 32) as u32 as i32, cell.0 as u32 as i32)
    }

    /// Fractional axial coordinates of a plane point.
    fn axial_of(&self, p: GeoPoint) -> (f64, f64) {
        let x = p.lon as f64;
        let y = p.lat as f64;
        let q = (SQRT3 / 3.0 * x - y / 3.0) / self.size_deg;
        let r = (2.0 / 3.0 * y) / self.size_deg;
        (q, r)
    }

    /// Round fractional axial coordinates to the containing hex via cube
    /// rounding (largest rounding error is corrected from the q+r+s=0
    /// constraint).
    fn round_axial(q: f64, r: f64) -> (i32, i32) {
        let s = -q - r;
        let (mut rq, mut rr) = (q.round(), r.round());
        let rs = s.round();

        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }
        (rq as i32, rr as i32)
    }
}

impl CellScheme for HexGrid {
    fn resolution(&self) -> u8 {
        self.resolution
    }

    fn cell_of(&self, p: GeoPoint) -> CellResult<CellId> {
        if !p.is_valid() {
            return Err(CellError::InvalidCoordinate { lat: p.lat, lon: p.lon });
        }
        let (q, r) = self.axial_of(p);
        let (q, r) = Self::round_axial(q, r);
        Ok(Self::pack(q, r))
    }

    fn center(&self, cell: CellId) -> GeoPoint {
        let (q, r) = Self::unpack(cell);
        let x = self.size_deg * SQRT3 * (q as f64 + r as f64 / 2.0);
        let y = self.size_deg * 1.5 * r as f64;
        GeoPoint::new(y as f32, x as f32)
    }

    /// Membership by nearest-center rounding — exact for a hex tiling.
    fn contains(&self, cell: CellId, p: GeoPoint) -> bool {
        self.cell_of(p).map(|c| c == cell).unwrap_or(false)
    }

    fn neighbors_of(&self, cell: CellId) -> Vec<CellId> {
        let (q, r) = Self::unpack(cell);
        DIRECTIONS
            .iter()
            .map(|&(dq, dr)| Self::pack(q + dq, r + dr))
            .collect()
    }

    fn cell_width_m(&self, cell: CellId) -> f32 {
        // Width across flats = √3 · circumradius; scale longitude shrink at
        // the cell's latitude and take the conservative minimum.
        let lat = self.center(cell).lat as f64;
        let across = SQRT3 * self.size_deg * M_PER_DEG;
        (across * lat.to_radians().cos().abs().min(1.0)) as f32
    }
}
