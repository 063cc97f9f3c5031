//! `gr-cell` — spatial cell indexing for the gridroute workspace.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`scheme`]  | `CellScheme` trait, `CellBounds` boundary relations      |
//! | [`geohash`] | `GeohashGrid` — uniform rectangular base-32 cells        |
//! | [`hexgrid`] | `HexGrid` — pointy-top axial hexagonal cells             |
//! | [`error`]   | `CellError`, `CellResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Propagates serde derives through `gr-core` types.   |

pub mod error;
pub mod geohash;
pub mod hexgrid;
pub mod scheme;


pub use error::{CellError, CellResult};
pub use geohash::GeohashGrid;
pub use hexgrid::HexGrid;
pub use scheme::{CellBounds, CellScheme};
