//! Per-cell representative vertex selection.
//!
//! The representative anchors a cell into the meta-graph: meta-adjacency
//! costs are fine-graph shortest paths between representatives.  It is a
//! pointer into the network snapshot, nothing more — routes are not forced
//! through it.

use gr_cell::CellScheme;
use gr_core::{CellId, VertexId};
use gr_graph::{CellMembershipIndex, RoadNetwork};

/// The vertex that represents `cell` in the meta-graph: nearest to the
/// cell's centroid among the cell's vertices, ties broken by lowest
/// `VertexId`.  `None` only if the cell contains no vertex.
///
/// Deterministic for a fixed (network, scheme) input, so rebuilds produce
/// identical meta-graph edges.
pub fn select_representative(
    cell: CellId,
    membership: &CellMembershipIndex,
    network: &RoadNetwork,
    scheme: &impl CellScheme,
) -> Option<VertexId> {
    let centroid = scheme.center(cell);
    let mut best: Option<(f32, VertexId)> = None;

    // vertices_in is ascending by id, so a strict `<` keeps the lowest id
    // among exact distance ties.
    for &v in membership.vertices_in(cell) {
        let d = network.vertex_pos[v.index()].distance_m(centroid);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, v));
        }
    }
    best.map(|(_, v)| v)
}
