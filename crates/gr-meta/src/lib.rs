//! `gr-meta` — the coarse cell graph and its construction.
//!
//! # Crate layout
//!
//! | Module             | Contents                                         |
//! |--------------------|--------------------------------------------------|
//! | [`metagraph`]      | `MetaGraph` (CSR over cells, `CostGraph` impl)   |
//! | [`representative`] | `select_representative` — cell → anchor vertex   |
//! | [`builder`]        | `MetaGraphBuilder`                               |
//!
//! Built once per (network snapshot, resolution); there is no incremental
//! update path.  Rebuilds happen on a fresh instance while queries continue
//! against the old one.

pub mod builder;
pub mod metagraph;
pub mod representative;

#[cfg(test)]
mod tests;

pub use builder::MetaGraphBuilder;
pub use metagraph::MetaGraph;
pub use representative::select_representative;
