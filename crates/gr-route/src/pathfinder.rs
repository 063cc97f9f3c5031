//! The hierarchical pathfinder and its query pipeline.
//!
//! A query moves through fixed phases:
//!
//! 1. **Encode**: map both endpoints to cells; reject endpoints whose cell
//!    is not a meta-graph node.
//! 2. **Coarse solve**: shortest cell sequence over the meta-graph (skipped
//!    when both endpoints share a cell).
//! 3. **Subgraph**: union of the membership index's edges over the entire
//!    coarse cell sequence — a typed edge set, the only form the
//!    restriction ever takes.
//! 4. **Snap**: nearest vertex to each endpoint among vertices incident to
//!    an allowed edge of the subgraph.
//! 5. **Fine solve**: oracle over the restricted, tag-filtered view.
//! 6. **Expand or fail**: on a fine-solve miss, grow the cell set by one
//!    ring of neighbors (policy-controlled) and retry steps 3–5 once.
//!
//! The pathfinder is immutable after construction and every phase reads
//! shared state only, so `route` calls run concurrently without
//! coordination.  Rebuilding for a new snapshot or resolution means
//! constructing a fresh pathfinder, never mutating this one.

use rustc_hash::FxHashSet;

use gr_cell::{CellResult, CellScheme};
use gr_core::{CellId, EdgeId, GeoPoint, TagFilter, VertexId};
use gr_graph::{CellMembershipIndex, FineView, RoadNetwork};
use gr_meta::{MetaGraph, MetaGraphBuilder};
use gr_solve::Oracle;

use crate::error::{RouteError, RouteResult};

// ── Query output ──────────────────────────────────────────────────────────────

/// The result of a successful query: fine edges in traversal order plus the
/// coarse context they were found in.  Ephemeral — routes are returned to
/// the caller and never retained by the pathfinder.
#[derive(Debug, Clone)]
pub struct Route {
    /// Fine-graph edges from start to end.
    pub edges: Vec<EdgeId>,
    /// Sum of edge costs, in the network's cost unit.
    pub total_cost: u32,
    /// Coarse cell sequence the fine search was restricted to.
    pub coarse_cells: Vec<CellId>,
    /// `true` if the route was only found after one-ring expansion.
    pub expanded: bool,
}

impl Route {
    /// `true` if start and end snapped to the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Expansion policy ──────────────────────────────────────────────────────────

/// What to do when the fine solve fails inside the coarse cell set.
///
/// The retry is bounded by design: exactly one ring, exactly one retry.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ExpandPolicy {
    /// Report failure immediately.
    Never,
    /// Grow the cell set by one ring of touching neighbors and retry once.
    #[default]
    OneRing,
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

/// Two-level router over a road-network snapshot.
///
/// Owns the snapshot, the cell scheme, the membership index, the
/// meta-graph, and the oracle; all are built once and shared read-only by
/// every query thereafter.
pub struct HierarchicalPathfinder<S: CellScheme, O: Oracle> {
    network: RoadNetwork,
    scheme: S,
    membership: CellMembershipIndex,
    meta: MetaGraph,
    oracle: O,
    policy: ExpandPolicy,
}

/// Outcome of one restricted fine attempt, before policy is applied.
enum FineMiss {
    NoSnap(GeoPoint),
    NoPath,
}

impl<S: CellScheme, O: Oracle> HierarchicalPathfinder<S, O> {
    /// Index the network and build the meta-graph.
    ///
    /// `meta_filter` restricts which edge classes participate in meta-edge
    /// aggregation (pass [`TagFilter::all`] to aggregate over everything).
    /// Fails only on a snapshot vertex outside the scheme's coordinate
    /// domain.
    pub fn build(
        network: RoadNetwork,
        scheme: S,
        oracle: O,
        meta_filter: TagFilter,
    ) -> CellResult<Self> {
        let membership = CellMembershipIndex::build(&network, &scheme)?;
        let meta = MetaGraphBuilder::new(&network, &membership, &scheme, &oracle)
            .filter(meta_filter)
            .build();
        Ok(Self {
            network,
            scheme,
            membership,
            meta,
            oracle,
            policy: ExpandPolicy::default(),
        })
    }

    /// Replace the expansion policy (default: [`ExpandPolicy::OneRing`]).
    pub fn expand_policy(mut self, policy: ExpandPolicy) -> Self {
        self.policy = policy;
        self
    }

    // ── Shared-state accessors ────────────────────────────────────────────

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    pub fn membership(&self) -> &CellMembershipIndex {
        &self.membership
    }

    pub fn meta(&self) -> &MetaGraph {
        &self.meta
    }

    // ── Query ─────────────────────────────────────────────────────────────

    /// Route from `start` to `end` over edges passing `filter`.
    pub fn route(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        filter: TagFilter,
    ) -> RouteResult<Route> {
        // Encode.
        let start_cell = self.scheme.cell_of(start)?;
        let end_cell = self.scheme.cell_of(end)?;
        let start_node = self
            .meta
            .dense_index(start_cell)
            .ok_or(RouteError::UnresolvedEndpoint(start))?;
        let end_node = self
            .meta
            .dense_index(end_cell)
            .ok_or(RouteError::UnresolvedEndpoint(end))?;

        // Coarse solve.  A shared cell needs no meta traversal: the coarse
        // sequence is that single cell.
        let coarse_cells: Vec<CellId> = if start_cell == end_cell {
            vec![start_cell]
        } else {
            let path = self
                .oracle
                .solve(&self.meta, start_node, end_node)
                .ok_or(RouteError::NoMetaPath { from: start_cell, to: end_cell })?;
            path.nodes.iter().map(|&n| self.meta.cell_at(n)).collect()
        };

        // Restricted fine attempt, then the policy-bounded retry.
        match self.fine_attempt(&coarse_cells, start, end, filter, false) {
            Ok(route) => Ok(route),
            Err(FineMiss::NoSnap(p)) => Err(RouteError::NoSnapTarget(p)),
            Err(FineMiss::NoPath) => match self.policy {
                ExpandPolicy::Never => Err(RouteError::Failed {
                    from: start_cell,
                    to: end_cell,
                    expanded: false,
                }),
                ExpandPolicy::OneRing => {
                    let grown = self.grow_one_ring(&coarse_cells);
                    match self.fine_attempt(&grown, start, end, filter, true) {
                        Ok(route) => Ok(route),
                        Err(FineMiss::NoSnap(p)) => Err(RouteError::NoSnapTarget(p)),
                        Err(FineMiss::NoPath) => Err(RouteError::Failed {
                            from: start_cell,
                            to: end_cell,
                            expanded: true,
                        }),
                    }
                }
            },
        }
    }

    // ── Pipeline internals ────────────────────────────────────────────────

    /// Steps 3–5 over one cell set: subgraph, snap, fine solve.
    fn fine_attempt(
        &self,
        cells: &[CellId],
        start: GeoPoint,
        end: GeoPoint,
        filter: TagFilter,
        expanded: bool,
    ) -> Result<Route, FineMiss> {
        let subset = self.membership.edges_in_cells(cells);
        let view = FineView::restricted(&self.network, &subset, filter);
        let usable = view.usable_vertices();

        let from = self.snap(start, &usable).ok_or(FineMiss::NoSnap(start))?;
        let to = self.snap(end, &usable).ok_or(FineMiss::NoSnap(end))?;

        let path = self
            .oracle
            .solve(&view, from.0, to.0)
            .ok_or(FineMiss::NoPath)?;

        Ok(Route {
            edges: path.arcs.iter().map(|&a| EdgeId(a)).collect(),
            total_cost: path.cost,
            coarse_cells: cells.to_vec(),
            expanded,
        })
    }

    /// Nearest usable vertex to `p`, walking the R-tree outward.
    fn snap(&self, p: GeoPoint, usable: &FxHashSet<VertexId>) -> Option<VertexId> {
        if usable.is_empty() {
            return None;
        }
        self.network.nearest_vertices(p).find(|v| usable.contains(v))
    }

    /// The coarse cell set plus one ring of touching neighbors around every
    /// member, deduplicated, original order first.
    fn grow_one_ring(&self, cells: &[CellId]) -> Vec<CellId> {
        let mut seen: FxHashSet<CellId> = cells.iter().copied().collect();
        let mut grown: Vec<CellId> = cells.to_vec();
        for &cell in cells {
            for n in self.scheme.ring_of(cell) {
                if seen.insert(n) {
                    grown.push(n);
                }
            }
        }
        grown
    }
}
