//! Restricted views of the fine graph for the oracle.
//!
//! A [`FineView`] presents a `RoadNetwork` as a [`CostGraph`], optionally
//! restricted to an explicit edge subset (the cell-set subgraph of a
//! hierarchical query) and always filtered by the query's [`TagFilter`].
//! The restriction is a typed collection of `EdgeId`s — the subgraph is
//! never expressed as anything but data.
//!
//! The view borrows; building one allocates nothing, so each query can
//! assemble and discard views freely.

use rustc_hash::FxHashSet;

use gr_core::{EdgeId, TagFilter, VertexId};
use gr_solve::{Arc, CostGraph};

use crate::network::RoadNetwork;

/// Borrowed, filtered view of a [`RoadNetwork`].
#[derive(Copy, Clone)]
pub struct FineView<'a> {
    network: &'a RoadNetwork,
    /// When present, only these edges exist in the view.
    subset: Option<&'a FxHashSet<EdgeId>>,
    filter: TagFilter,
}

impl<'a> FineView<'a> {
    /// The full network under a tag filter.
    pub fn full(network: &'a RoadNetwork, filter: TagFilter) -> Self {
        Self { network, subset: None, filter }
    }

    /// The network restricted to `subset` under a tag filter.
    pub fn restricted(
        network: &'a RoadNetwork,
        subset: &'a FxHashSet<EdgeId>,
        filter: TagFilter,
    ) -> Self {
        Self { network, subset: Some(subset), filter }
    }

    /// `true` if `edge` is visible in this view.
    #[inline]
    pub fn allows(&self, edge: EdgeId) -> bool {
        self.filter.allows(self.network.edge_class[edge.index()])
            && self.subset.is_none_or(|s| s.contains(&edge))
    }

    /// `true` if `vertex` is an endpoint of at least one visible edge —
    /// the snapping eligibility test.  Checks the edge subset directly
    /// (covering inbound-only vertices), not just the vertex's outgoing
    /// CSR slice.
    pub fn vertex_usable(&self, vertex: VertexId) -> bool {
        match self.subset {
            Some(subset) => subset.iter().any(|&e| {
                self.allows(e)
                    && (self.network.edge_from[e.index()] == vertex
                        || self.network.edge_to[e.index()] == vertex)
            }),
            None => self.network.out_edges(vertex).any(|e| self.allows(e)),
        }
    }

    /// Collect every vertex incident to a visible edge.
    ///
    /// Materialized once per snap phase so per-candidate checks during
    /// nearest-neighbor iteration are O(1) instead of a subset scan.
    pub fn usable_vertices(&self) -> FxHashSet<VertexId> {
        let mut usable = FxHashSet::default();
        match self.subset {
            Some(subset) => {
                for &e in subset {
                    if self.allows(e) {
                        usable.insert(self.network.edge_from[e.index()]);
                        usable.insert(self.network.edge_to[e.index()]);
                    }
                }
            }
            None => {
                for e in 0..self.network.edge_count() {
                    let edge = EdgeId(e as u32);
                    if self.allows(edge) {
                        usable.insert(self.network.edge_from[e]);
                        usable.insert(self.network.edge_to[e]);
                    }
                }
            }
        }
        usable
    }
}

impl CostGraph for FineView<'_> {
    fn node_count(&self) -> usize {
        self.network.vertex_count()
    }

    fn out_arcs(&self, node: u32) -> impl Iterator<Item = Arc> + '_ {
        self.network
            .out_edges(VertexId(node))
            .filter(|e| self.allows(*e))
            .map(|e| Arc {
                id: e.0,
                to: self.network.edge_to[e.index()].0,
                cost: self.network.edge_cost[e.index()],
            })
    }
}
