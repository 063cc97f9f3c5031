//! Newtype identifiers for vertices, edges, and cells.
//!
//! Each ID wraps a bare integer and costs nothing at runtime; the wrapper
//! exists so a vertex index can never be handed to an edge-indexed array.
//! The inner value stays `pub` because the routing crates index straight
//! into column vectors, with [`index`](VertexId::index) as the readable
//! spelling of the cast.

use std::fmt;

macro_rules! define_id {
    ($(#[$attr:meta])* $name:ident, $inner:ty) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Reserved "absent" value, the integer maximum.
            pub const INVALID: Self = Self(<$inner>::MAX);

            /// The ID as a vector index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(n: usize) -> Result<Self, Self::Error> {
                <$inner>::try_from(n).map(Self)
            }
        }
    };
}

define_id! {
    /// Position of a vertex in the road network's column vectors.
    VertexId, u32
}

define_id! {
    /// Position of a directed edge in the road network's column vectors.
    EdgeId, u32
}

define_id! {
    /// Opaque key of a spatial cell at some fixed resolution.
    ///
    /// The bit layout is owned by the `CellScheme` that produced the ID
    /// (packed base-32 geohash, packed axial hex coordinates, …); this crate
    /// only guarantees identity, ordering, and hashing.  IDs from different
    /// schemes or resolutions must never be mixed in one collection.
    ///
    /// For the geohash scheme the packed integer preserves lexicographic
    /// order of the textual hashes at equal precision, so `Ord` on `CellId`
    /// doubles as the prefix-range order of the underlying space-filling
    /// curve.
    CellId, u64
}
