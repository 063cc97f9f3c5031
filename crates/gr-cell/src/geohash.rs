//! Uniform rectangular cells keyed by base-32 geohash.
//!
//! # Key layout
//!
//! A geohash of precision `p` is `5p` bits of interleaved longitude/latitude
//! (longitude first), conventionally rendered as `p` base-32 characters.
//! [`GeohashGrid`] packs those bits into a `CellId(u64)`:
//!
//! ```text
//! bits 63..60   precision (1..=12)
//! bits 5p-1..0  interleaved hash bits
//! ```
//!
//! At equal precision the packed integer ordering equals the lexicographic
//! ordering of the textual hashes, so `CellId`'s `Ord` doubles as the
//! Z-order-curve range order used for prefix/range containment checks.
//!
//! # Neighbor computation
//!
//! Neighbors are derived arithmetically: de-interleave the key into its
//! per-axis bit fields, add ±1 (longitude wraps at the antimeridian,
//! latitude stops at the poles), and re-interleave.  No table lookups and
//! no scan over other cells — enumeration cost is constant per cell.

use gr_core::{CellId, GeoPoint};

use crate::error::{CellError, CellResult};
use crate::scheme::{CellBounds, CellScheme};

const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const PRECISION_SHIFT: u32 = 60;
const VALUE_MASK: u64 = (1 << PRECISION_SHIFT) - 1;

/// Uniform rectangular cell scheme at a fixed geohash precision.
///
/// Cells have typically 8 touching neighbors of which only the 4 cardinal
/// ones share a boundary segment; [`CellScheme::neighbors_of`] performs the
/// corner exclusion by explicit boundary-relation testing of the decoded
/// rectangles rather than trusting the candidate directions.
#[derive(Copy, Clone, Debug)]
pub struct GeohashGrid {
    precision: u8,
}

impl GeohashGrid {
    /// Create a grid at `precision` base-32 characters (1..=12).
    ///
    /// Precision 5 cells are roughly 4.9 × 4.9 km at the equator; each
    /// additional character shrinks the cell by a factor of 32.
    pub fn new(precision: u8) -> Self {
        assert!(
            (1..=12).contains(&precision),
            "geohash precision must be in 1..=12, got {precision}"
        );
        Self { precision }
    }

    #[inline]
    fn total_bits(&self) -> u32 {
        5 * self.precision as u32
    }

    #[inline]
    fn lon_bits(&self) -> u32 {
        self.total_bits().div_ceil(2)
    }

    #[inline]
    fn lat_bits(&self) -> u32 {
        self.total_bits() / 2
    }

    /// Pack interleaved hash bits into a `CellId`.
    #[inline]
    fn pack(&self, value: u64) -> CellId {
        CellId(((self.precision as u64) << PRECISION_SHIFT) | value)
    }

    /// Recover the interleaved hash bits, checking the precision nibble.
    #[inline]
    fn unpack(&self, cell: CellId) -> u64 {
        debug_assert_eq!(
            (cell.0 >> PRECISION_SHIFT) as u8,
            self.precision,
            "cell from a different scheme or resolution: {cell}"
        );
        cell.0 & VALUE_MASK
    }

    /// Split the interleaved bits into `(lon_index, lat_index)`.
    fn axes(&self, value: u64) -> (u64, u64) {
        let mut lon = 0u64;
        let mut lat = 0u64;
        // MSB-first: even interleave positions are longitude bits.
        for i in 0..self.total_bits() {
            let bit = (value >> (self.total_bits() - 1 - i)) & 1;
            if i % 2 == 0 {
                lon = (lon << 1) | bit;
            } else {
                lat = (lat << 1) | bit;
            }
        }
        (lon, lat)
    }

    /// Re-interleave per-axis indices into hash bits.
    fn interleave(&self, lon: u64, lat: u64) -> u64 {
        let mut value = 0u64;
        let mut lon_remaining = self.lon_bits();
        let mut lat_remaining = self.lat_bits();
        for i in 0..self.total_bits() {
            value <<= 1;
            if i % 2 == 0 {
                lon_remaining -= 1;
                value |= (lon >> lon_remaining) & 1;
            } else {
                lat_remaining -= 1;
                value |= (lat >> lat_remaining) & 1;
            }
        }
        value
    }

    /// Decoded rectangle of a cell.
    pub fn bounds(&self, cell: CellId) -> CellBounds {
        let (lon_idx, lat_idx) = self.axes(self.unpack(cell));
        let lon_width = 360.0 / (1u64 << self.lon_bits()) as f64;
        let lat_height = 180.0 / (1u64 << self.lat_bits()) as f64;
        CellBounds {
            min_lat: lat_idx as f64 * lat_height - 90.0,
            max_lat: (lat_idx + 1) as f64 * lat_height - 90.0,
            min_lon: lon_idx as f64 * lon_width - 180.0,
            max_lon: (lon_idx + 1) as f64 * lon_width - 180.0,
        }
    }

    /// Offset a cell by whole-cell steps along each axis.
    ///
    /// Returns `None` past the poles; longitude wraps at the antimeridian.
    fn offset(&self, cell: CellId, d_lon: i64, d_lat: i64) -> Option<CellId> {
        let (lon_idx, lat_idx) = self.axes(self.unpack(cell));

        let lat = lat_idx as i64 + d_lat;
        if lat < 0 || lat >= (1i64 << self.lat_bits()) {
            return None; // no cell past the poles
        }

        let lon_cells = 1i64 << self.lon_bits();
        let lon = (lon_idx as i64 + d_lon).rem_euclid(lon_cells);

        Some(self.pack(self.interleave(lon as u64, lat as u64)))
    }

    /// Render the cell as its textual base-32 geohash.
    pub fn to_text(&self, cell: CellId) -> String {
        let mut value = self.unpack(cell);
        let mut out = vec![0u8; self.precision as usize];
        for slot in out.iter_mut().rev() {
            *slot = BASE32[(value & 31) as usize];
            value >>= 5;
        }
        // BASE32 is ASCII, so the bytes are valid UTF-8.
        String::from_utf8(out).unwrap_or_default()
    }

    /// Parse a textual geohash of exactly this grid's precision.
    pub fn parse(&self, text: &str) -> CellResult<CellId> {
        if text.len() != self.precision as usize {
            return Err(CellError::MalformedKey(text.to_owned()));
        }
        let mut value = 0u64;
        for b in text.bytes() {
            let digit = BASE32
                .iter()
                .position(|&c| c == b)
                .ok_or_else(|| CellError::MalformedKey(text.to_owned()))?;
            value = (value << 5) | digit as u64;
        }
        Ok(self.pack(value))
    }

    /// Z-order range containment: `true` if `cell` lies within the packed
    /// key range `[lo, hi]`.
    ///
    /// At equal precision this is exactly the lexicographic range check on
    /// the textual hashes, evaluated on integers.
    pub fn in_key_range(&self, cell: CellId, lo: CellId, hi: CellId) -> bool {
        debug_assert_eq!(lo.0 >> PRECISION_SHIFT, hi.0 >> PRECISION_SHIFT);
        lo <= cell && cell <= hi
    }
}

impl CellScheme for GeohashGrid {
    fn resolution(&self) -> u8 {
        self.precision
    }

    fn cell_of(&self, p: GeoPoint) -> CellResult<CellId> {
        if !p.is_valid() {
            return Err(CellError::InvalidCoordinate { lat: p.lat, lon: p.lon });
        }

        let lon_cells = 1u64 << self.lon_bits();
        let lat_cells = 1u64 << self.lat_bits();

        // Index form of the classic bisection encode: floor into a uniform
        // grid, clamping the domain maximum into the last cell.
        let lon_idx = (((p.lon as f64 + 180.0) / 360.0 * lon_cells as f64) as u64)
            .min(lon_cells - 1);
        let lat_idx = (((p.lat as f64 + 90.0) / 180.0 * lat_cells as f64) as u64)
            .min(lat_cells - 1);

        Ok(self.pack(self.interleave(lon_idx, lat_idx)))
    }

    fn center(&self, cell: CellId) -> GeoPoint {
        self.bounds(cell).center()
    }

    fn contains(&self, cell: CellId, p: GeoPoint) -> bool {
        self.bounds(cell).contains(p)
    }

    /// The 4 cardinal neighbors — the only ring members whose rectangles
    /// share a segment.  The corner exclusion is performed by testing the
    /// decoded boundaries, not by assuming the candidate direction.
    fn neighbors_of(&self, cell: CellId) -> Vec<CellId> {
        let bounds = self.bounds(cell);
        self.ring_of(cell)
            .into_iter()
            .filter(|c| self.bounds(*c).shares_segment(&bounds))
            .collect()
    }

    /// All 8 touching cells (fewer at the poles).
    fn ring_of(&self, cell: CellId) -> Vec<CellId> {
        let mut ring = Vec::with_capacity(8);
        for d_lat in [-1i64, 0, 1] {
            for d_lon in [-1i64, 0, 1] {
                if d_lat == 0 && d_lon == 0 {
                    continue;
                }
                if let Some(c) = self.offset(cell, d_lon, d_lat) {
                    ring.push(c);
                }
            }
        }
        ring
    }

    fn cell_width_m(&self, cell: CellId) -> f32 {
        self.bounds(cell).width_m()
    }
}
