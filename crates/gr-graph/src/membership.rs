//! Cell-membership index: which vertices and edges belong to which cell.
//!
//! Built once per (network snapshot, scheme) pair in a single near-linear
//! pass — one `cell_of` per vertex, plus a bounded number of samples per
//! edge — then consulted read-only by the meta-graph builder and every
//! query.  Never mutated after `build`.
//!
//! # Multi-cell edge assignment
//!
//! An edge longer than the cell diameter can enter cells that contain
//! neither of its endpoints.  Assigning such an edge only to its endpoint
//! (or centroid) cell would silently drop it from any cell-set subgraph that
//! includes the crossed cell but not the endpoint cells.  `build` therefore
//! samples each edge's straight-line geometry at half the cell width and
//! records every distinct cell encountered.

use rustc_hash::FxHashMap;

use gr_cell::{CellResult, CellScheme};
use gr_core::{CellId, EdgeId, VertexId};

use crate::network::RoadNetwork;

/// Immutable mapping `CellId → vertices` and `CellId → edges`.
pub struct CellMembershipIndex {
    /// Containing cell of each vertex.  Indexed by `VertexId`.
    vertex_cell: Vec<CellId>,

    /// Vertices per cell, ascending `VertexId` (push order).
    vertices_by_cell: FxHashMap<CellId, Vec<VertexId>>,

    /// Edges per cell, every cell the edge's geometry enters.
    edges_by_cell: FxHashMap<CellId, Vec<EdgeId>>,

    /// Cells containing at least one vertex, sorted ascending.
    active: Vec<CellId>,
}

impl CellMembershipIndex {
    /// Index every vertex and edge of `network` under `scheme`.
    ///
    /// Fails only if the network contains a vertex with coordinates outside
    /// the scheme's domain — a snapshot defect, reported before any state
    /// is published.
    pub fn build(network: &RoadNetwork, scheme: &impl CellScheme) -> CellResult<Self> {
        let mut vertex_cell = Vec::with_capacity(network.vertex_count());
        let mut vertices_by_cell: FxHashMap<CellId, Vec<VertexId>> = FxHashMap::default();

        for (i, &pos) in network.vertex_pos.iter().enumerate() {
            let cell = scheme.cell_of(pos)?;
            vertex_cell.push(cell);
            vertices_by_cell.entry(cell).or_default().push(VertexId(i as u32));
        }

        let mut edges_by_cell: FxHashMap<CellId, Vec<EdgeId>> = FxHashMap::default();
        let mut touched: Vec<CellId> = Vec::with_capacity(8); // per-edge scratch

        for e in 0..network.edge_count() {
            let edge = EdgeId(e as u32);
            let (a, b) = network.edge_segment(edge);

            touched.clear();
            let start_cell = vertex_cell[network.edge_from[e].index()];
            let end_cell = vertex_cell[network.edge_to[e].index()];
            touched.push(start_cell);
            if end_cell != start_cell {
                touched.push(end_cell);
            }

            // Sample interior points when the edge may span extra cells.
            // Half the cell width guarantees no cell is stepped over.
            let length_m = a.distance_m(b);
            let step_m = scheme.cell_width_m(start_cell) * 0.5;
            if length_m > step_m && step_m > 0.0 {
                let samples = (length_m / step_m).ceil() as u32;
                for i in 1..samples {
                    let p = a.lerp(b, i as f32 / samples as f32);
                    let cell = scheme.cell_of(p)?;
                    if !touched.contains(&cell) {
                        touched.push(cell);
                    }
                }
            }

            for &cell in &touched {
                edges_by_cell.entry(cell).or_default().push(edge);
            }
        }

        let mut active: Vec<CellId> = vertices_by_cell.keys().copied().collect();
        active.sort_unstable();

        Ok(Self { vertex_cell, vertices_by_cell, edges_by_cell, active })
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Cells containing at least one vertex, sorted ascending.  These are
    /// the candidate meta-graph nodes.
    pub fn active_cells(&self) -> &[CellId] {
        &self.active
    }

    /// `true` if the cell contains at least one vertex.
    pub fn is_active(&self, cell: CellId) -> bool {
        self.active.binary_search(&cell).is_ok()
    }

    /// The containing cell of a vertex.
    #[inline]
    pub fn cell_of_vertex(&self, vertex: VertexId) -> CellId {
        self.vertex_cell[vertex.index()]
    }

    /// Vertices located in `cell`, ascending `VertexId`.  Empty for cells
    /// with no vertex.
    pub fn vertices_in(&self, cell: CellId) -> &[VertexId] {
        self.vertices_by_cell.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges whose geometry enters `cell`.  Empty for cells no edge crosses.
    pub fn edges_in(&self, cell: CellId) -> &[EdgeId] {
        self.edges_by_cell.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Union of [`edges_in`](Self::edges_in) over a cell set — the typed
    /// cell-set selection used to materialize a restricted subgraph.
    pub fn edges_in_cells(&self, cells: &[CellId]) -> rustc_hash::FxHashSet<EdgeId> {
        let mut set = rustc_hash::FxHashSet::default();
        for cell in cells {
            set.extend(self.edges_in(*cell).iter().copied());
        }
        set
    }
}
