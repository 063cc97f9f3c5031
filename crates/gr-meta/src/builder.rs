//! Meta-graph construction.
//!
//! # Complexity
//!
//! Candidate adjacencies come from the cell scheme's bounded-degree
//! neighbor enumeration — each active cell proposes at most 4 (rectangular)
//! or 6 (hex) neighbors, so construction is O(cells) oracle sources, never
//! an all-pairs comparison of cell geometries.  Each source cell issues a
//! single one-to-many solve covering all of its neighbor representatives.
//!
//! # Failure model
//!
//! A neighbor pair whose representatives have no connecting path simply
//! contributes no adjacency.  Build never fails and never publishes
//! partial state: all working collections are local until the final
//! `MetaGraph` is assembled.

use gr_cell::CellScheme;
use gr_core::{TagFilter, VertexId};
use gr_graph::{CellMembershipIndex, FineView, RoadNetwork};
use gr_solve::Oracle;

use crate::metagraph::MetaGraph;
use crate::representative::select_representative;

/// Builds a [`MetaGraph`] from a network snapshot and its membership index.
///
/// ```rust,ignore
/// let meta = MetaGraphBuilder::new(&network, &membership, &scheme, &oracle)
///     .filter(TagFilter::drivable())
///     .build();
/// ```
pub struct MetaGraphBuilder<'a, S: CellScheme, O: Oracle> {
    network: &'a RoadNetwork,
    membership: &'a CellMembershipIndex,
    scheme: &'a S,
    oracle: &'a O,
    filter: TagFilter,
}

impl<'a, S: CellScheme, O: Oracle> MetaGraphBuilder<'a, S, O> {
    pub fn new(
        network: &'a RoadNetwork,
        membership: &'a CellMembershipIndex,
        scheme: &'a S,
        oracle: &'a O,
    ) -> Self {
        Self { network, membership, scheme, oracle, filter: TagFilter::all() }
    }

    /// Restrict meta-edge aggregation to edges passing `filter` (e.g.
    /// exclude pedestrian-only ways from a drivable meta-graph).
    pub fn filter(mut self, filter: TagFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Enumerate active cells, resolve representatives, and aggregate
    /// adjacency costs over the full fine graph.
    pub fn build(self) -> MetaGraph {
        let active = self.membership.active_cells();
        let view = FineView::full(self.network, self.filter);

        // Representatives, one per active cell, resolved up front.
        let reps: Vec<Option<VertexId>> = active
            .iter()
            .map(|&c| select_representative(c, self.membership, self.network, self.scheme))
            .collect();

        let mut adjacencies: Vec<(u32, u32, u32)> = Vec::new();

        for (i, &cell) in active.iter().enumerate() {
            let Some(rep) = reps[i] else { continue };

            // Active neighbors sharing a boundary segment, with their
            // dense indices and representatives.
            let mut neighbor_idx: Vec<u32> = Vec::new();
            let mut neighbor_rep: Vec<u32> = Vec::new();
            for n in self.scheme.neighbors_of(cell) {
                if let Ok(j) = active.binary_search(&n) {
                    if let Some(r) = reps[j] {
                        neighbor_idx.push(j as u32);
                        neighbor_rep.push(r.0);
                    }
                }
            }
            if neighbor_rep.is_empty() {
                continue;
            }

            // One traversal from this cell's representative reaches every
            // neighbor representative; unreachable ones yield no adjacency.
            let paths = self.oracle.solve_to_set(&view, rep.0, &neighbor_rep);
            for (&j, &r) in neighbor_idx.iter().zip(&neighbor_rep) {
                if let Some(path) = paths.get(&r) {
                    adjacencies.push((i as u32, j, path.cost));
                }
            }
        }

        MetaGraph::from_parts(active.to_vec(), adjacencies)
    }
}
