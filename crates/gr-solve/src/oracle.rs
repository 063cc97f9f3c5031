//! The shortest-path oracle trait.
//!
//! # Pluggability
//!
//! The meta-graph builder and the hierarchical pathfinder consume shortest
//! paths only through [`Oracle`], so the default [`DijkstraOracle`](crate::DijkstraOracle)
//! can be replaced by A*, contraction hierarchies, or an external solver
//! without touching either consumer.
//!
//! # Absence is not an error
//!
//! A missing path is an expected outcome (disconnected regions, filtered
//! subgraphs), so both methods return it as `None`/omission rather than an
//! error; callers decide whether absence is fatal for them.

use rustc_hash::FxHashMap;

use crate::graph::CostGraph;

/// The result of a solve: node sequence, arc sequence, and total cost.
///
/// `nodes.len() == arcs.len() + 1`; a trivial `from == to` solve yields one
/// node, no arcs, and zero cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Visited nodes from source to target inclusive.
    pub nodes: Vec<u32>,
    /// Arc identifiers traversed, in order.
    pub arcs: Vec<u32>,
    /// Sum of arc costs.
    pub cost: u32,
}

impl Path {
    /// A zero-cost path staying at `node`.
    pub fn trivial(node: u32) -> Self {
        Self { nodes: vec![node], arcs: Vec::new(), cost: 0 }
    }

    /// `true` if the path has no arcs (source equals target).
    pub fn is_trivial(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Pluggable single-pair / one-to-many shortest-path solver.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one oracle instance is shared by
/// all concurrent routing queries.
pub trait Oracle: Send + Sync {
    /// Minimal-cost path from `from` to `to`, or `None` if unreachable.
    fn solve<G: CostGraph>(&self, graph: &G, from: u32, to: u32) -> Option<Path>;

    /// Minimal-cost paths from `from` to every reachable member of
    /// `targets`, keyed by target node.  Unreachable targets are absent
    /// from the map.
    ///
    /// Used for meta-edge aggregation: one traversal from a cell's
    /// representative vertex serves all of its neighbor cells at once.
    fn solve_to_set<G: CostGraph>(
        &self,
        graph: &G,
        from: u32,
        targets: &[u32],
    ) -> FxHashMap<u32, Path>;
}
