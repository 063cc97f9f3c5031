//! The weighted-graph abstraction the oracle searches.
//!
//! Both resolutions of the hierarchy implement [`CostGraph`]: the restricted
//! fine graph (a `RoadNetwork` view) and the meta-graph of cells.  The
//! oracle never learns which one it is searching.

/// One outgoing weighted arc of a [`CostGraph`] node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arc {
    /// Graph-defined arc identifier (fine graphs: the `EdgeId` value).
    pub id: u32,
    /// Target node.
    pub to: u32,
    /// Non-negative traversal cost.
    pub cost: u32,
}

/// A directed graph with dense `u32` node indices and non-negative arc
/// costs.
///
/// `node_count` bounds the node index space; `out_arcs` must be
/// deterministic for a given graph value so repeated solves are
/// reproducible.
pub trait CostGraph {
    /// Number of nodes; valid node indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Outgoing arcs of `node`, in a stable order.
    fn out_arcs(&self, node: u32) -> impl Iterator<Item = Arc> + '_;
}
