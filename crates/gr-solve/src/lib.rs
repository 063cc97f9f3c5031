//! `gr-solve` — the generic shortest-path oracle.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`graph`]    | `CostGraph` abstraction, `Arc`                  |
//! | [`oracle`]   | `Oracle` trait, `Path`                          |
//! | [`dijkstra`] | `DijkstraOracle` default implementation         |
//!
//! The oracle is deliberately ignorant of cells, tags, and geography: it
//! sees dense `u32` node indices and weighted arcs.  The coarse meta-graph
//! and the restricted fine graph both adapt themselves to [`CostGraph`].

pub mod dijkstra;
pub mod graph;
pub mod oracle;

#[cfg(test)]
mod tests;

pub use dijkstra::DijkstraOracle;
pub use graph::{Arc, CostGraph};
pub use oracle::{Oracle, Path};
