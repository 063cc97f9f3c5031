//! The fine road graph: an immutable snapshot plus a snapping index.
//!
//! Edges live in compressed sparse row (CSR) order: all outgoing edges of a
//! vertex are contiguous, located by the `vertex_out_start` row pointer, so
//! the oracle's relaxation loop is a linear scan.  Four parallel column
//! vectors (`edge_from`, `edge_to`, `edge_cost`, `edge_class`) are indexed
//! by `EdgeId`, which is simply the edge's position in that order.
//!
//! Alongside the columns sits an `rstar` R-tree over vertex positions, used
//! to snap query coordinates onto the graph.  The tree yields candidates in
//! ascending distance; hierarchical queries filter that stream against an
//! eligible-vertex set.
//!
//! A `RoadNetwork` is produced once by [`RoadNetworkBuilder`] from an
//! upstream loading stage and never mutated afterwards; the membership
//! index, meta-graph builder, and all concurrent queries share it read-only.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use gr_core::{EdgeId, GeoPoint, VertexId, WayClass};

// ── Snap index entry ──────────────────────────────────────────────────────────

/// `[lat, lon]` point tagged with its vertex, as stored in the R-tree.
#[derive(Clone)]
struct SnapEntry {
    pos: [f32; 2],
    vertex: VertexId,
}

impl RTreeObject for SnapEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.pos)
    }
}

impl PointDistance for SnapEntry {
    /// Squared planar distance in degrees.  Ranking by this instead of true
    /// metric distance distorts under 0.1 % below 60° latitude, which never
    /// changes a nearest-vertex answer at street spacing.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let d0 = self.pos[0] - point[0];
        let d1 = self.pos[1] - point[1];
        d0 * d0 + d1 * d1
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Immutable directed road graph in CSR layout with a vertex snap index.
///
/// Column vectors are `pub` for direct indexed access on hot paths; the
/// struct is only ever created through [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    /// Position of each vertex, indexed by `VertexId`.
    pub vertex_pos: Vec<GeoPoint>,

    /// CSR row pointer, length `vertex_count + 1`.  The outgoing edges of
    /// vertex `v` occupy `EdgeId`s `vertex_out_start[v] ..
    /// vertex_out_start[v + 1]`.
    pub vertex_out_start: Vec<u32>,

    /// Source vertex per edge.  Redundant with the row pointer but needed
    /// to walk a reconstructed path backwards without a binary search.
    pub edge_from: Vec<VertexId>,

    /// Target vertex per edge.
    pub edge_to: Vec<VertexId>,

    /// Traversal cost per edge.  The unit is whatever the upstream loader
    /// chose (travel milliseconds, length decimetres, …); it flows through
    /// meta-graph weights and route totals unchanged.
    pub edge_cost: Vec<u32>,

    /// Classification per edge, tested against the query's
    /// [`TagFilter`](gr_core::TagFilter).
    pub edge_class: Vec<WayClass>,

    vertices_rtree: RTree<SnapEntry>,
}

impl RoadNetwork {
    /// A network with no vertices and no edges.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_pos.is_empty()
    }

    /// `EdgeId`s of the outgoing edges of `vertex` — a contiguous range,
    /// no allocation.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let row = self.out_row(vertex);
        row.map(|i| EdgeId(i as u32))
    }

    /// Number of outgoing edges of `vertex`.
    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.out_row(vertex).len()
    }

    #[inline]
    fn out_row(&self, vertex: VertexId) -> std::ops::Range<usize> {
        let lo = self.vertex_out_start[vertex.index()] as usize;
        let hi = self.vertex_out_start[vertex.index() + 1] as usize;
        lo..hi
    }

    /// Endpoint positions of an edge's straight-line geometry.
    #[inline]
    pub fn edge_segment(&self, edge: EdgeId) -> (GeoPoint, GeoPoint) {
        (
            self.vertex_pos[self.edge_from[edge.index()].index()],
            self.vertex_pos[self.edge_to[edge.index()].index()],
        )
    }

    /// Nearest vertex to `pos`, or `None` on an empty network.
    pub fn snap_to_vertex(&self, pos: GeoPoint) -> Option<VertexId> {
        self.vertices_rtree
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.vertex)
    }

    /// All vertices in ascending distance from `pos`.
    ///
    /// Callers filter this for restricted snapping ("nearest vertex
    /// incident to an allowed edge inside the current subgraph").
    pub fn nearest_vertices(&self, pos: GeoPoint) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices_rtree
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .map(|e| e.vertex)
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Accumulates vertices and directed edges, then freezes them into a
/// [`RoadNetwork`].
///
/// Insertion order is free; `build()` lays the edges out in CSR order with
/// a counting pass (no comparison sort) and bulk-loads the R-tree.  Edges
/// sharing a source keep their insertion order, so builds are
/// deterministic.
///
/// # Example
///
/// ```
/// use gr_core::{GeoPoint, WayClass};
/// use gr_graph::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_vertex(GeoPoint::new(48.13, 11.57));
/// let c = b.add_vertex(GeoPoint::new(48.14, 11.58));
/// b.add_way(a, c, 90, 90, WayClass::Residential);
/// let net = b.build();
/// assert_eq!(net.vertex_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    vertices: Vec<GeoPoint>,
    pending: Vec<PendingEdge>,
}

struct PendingEdge {
    from: VertexId,
    to: VertexId,
    cost: u32,
    class: WayClass,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { vertices: Vec::new(), pending: Vec::new() }
    }

    /// Reserve space for a snapshot of known size.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            pending: Vec::with_capacity(edges),
        }
    }

    /// Register a vertex; IDs are handed out sequentially from 0.
    pub fn add_vertex(&mut self, pos: GeoPoint) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(pos);
        id
    }

    /// Add a single directed edge.
    pub fn add_one_way(&mut self, from: VertexId, to: VertexId, cost: u32, class: WayClass) {
        self.pending.push(PendingEdge { from, to, cost, class });
    }

    /// Add both directions of a two-way road segment.  Costs may differ per
    /// direction (grade, turn penalties, asymmetric speed limits).
    pub fn add_way(
        &mut self,
        a: VertexId,
        b: VertexId,
        forward_cost: u32,
        backward_cost: u32,
        class: WayClass,
    ) {
        self.add_one_way(a, b, forward_cost, class);
        self.add_one_way(b, a, backward_cost, class);
    }

    /// Position of a previously added vertex.
    pub fn vertex_pos(&self, id: VertexId) -> GeoPoint {
        self.vertices[id.index()]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.pending.len()
    }

    /// Freeze into a [`RoadNetwork`].
    ///
    /// O(V + E) for the CSR layout plus O(V log V) for the R-tree bulk
    /// load.
    pub fn build(self) -> RoadNetwork {
        let vertex_count = self.vertices.len();
        let edge_count = self.pending.len();

        // Row pointer from out-degrees.
        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &self.pending {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for v in 0..vertex_count {
            vertex_out_start[v + 1] += vertex_out_start[v];
        }

        // Scatter edges into their CSR slots; the per-vertex cursor keeps
        // insertion order within a row.
        let mut cursor: Vec<u32> = vertex_out_start[..vertex_count].to_vec();
        let mut edge_from = vec![VertexId::INVALID; edge_count];
        let mut edge_to = vec![VertexId::INVALID; edge_count];
        let mut edge_cost = vec![0u32; edge_count];
        let mut edge_class = vec![WayClass::default(); edge_count];
        for e in self.pending {
            let slot = cursor[e.from.index()] as usize;
            cursor[e.from.index()] += 1;
            edge_from[slot] = e.from;
            edge_to[slot] = e.to;
            edge_cost[slot] = e.cost;
            edge_class[slot] = e.class;
        }

        let entries: Vec<SnapEntry> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, p)| SnapEntry { pos: [p.lat, p.lon], vertex: VertexId(i as u32) })
            .collect();

        RoadNetwork {
            vertex_pos: self.vertices,
            vertex_out_start,
            edge_from,
            edge_to,
            edge_cost,
            edge_class,
            vertices_rtree: RTree::bulk_load(entries),
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
