//! `gr-core` — foundational types for the `gridroute` hierarchical router.
//!
//! This crate is a dependency of every other `gr-*` crate.  It intentionally
//! has no `gr-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                        |
//! |----------|-------------------------------------------------|
//! | [`ids`]  | `VertexId`, `EdgeId`, `CellId`                  |
//! | [`geo`]  | `GeoPoint`, haversine distance, interpolation   |
//! | [`tags`] | `WayClass` enum, `TagFilter` allow/deny mask    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |
//!
//! Error enums live in the crates that produce them (`gr-cell`, `gr-route`)
//! rather than in a shared base type; this keeps `gr-core` free of even a
//! `thiserror` dependency.

pub mod geo;
pub mod ids;
pub mod tags;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{CellId, EdgeId, VertexId};
pub use tags::{TagFilter, WayClass};
