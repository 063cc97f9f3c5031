//! `gr-graph` — fine road-network graph and cell-membership indexing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`network`]    | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`    |
//! | [`membership`] | `CellMembershipIndex` — cell → vertices/edges         |
//! | [`view`]       | `FineView` — filtered `CostGraph` over the network    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Propagates serde derives through `gr-core`/`gr-cell`.|
//!
//! Failures surface as [`gr_cell::CellError`] (the only fallible operation
//! here is cell encoding during membership builds), so this crate defines
//! no error enum of its own.

pub mod membership;
pub mod network;
pub mod view;


pub use membership::CellMembershipIndex;
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use view::FineView;
