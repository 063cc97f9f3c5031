//! Unit tests for gr-meta.
//!
//! Fixtures place one or two vertices per geohash cell (precision 3,
//! ≈ 1.4° cells around 10°N 10°E) at known offsets from cell centers, so
//! representative choice and adjacency costs are exact.

#[cfg(test)]
mod helpers {
    use gr_cell::{CellScheme, GeohashGrid};
    use gr_core::{CellId, GeoPoint, TagFilter, WayClass};
    use gr_graph::{CellMembershipIndex, RoadNetwork, RoadNetworkBuilder};
    use gr_solve::DijkstraOracle;
    use crate::{MetaGraph, MetaGraphBuilder};

    pub fn neighbor_towards(
        grid: &GeohashGrid,
        cell: CellId,
        d_lat: f32,
        d_lon: f32,
    ) -> CellId {
        let c = grid.center(cell);
        grid.neighbors_of(cell)
            .into_iter()
            .find(|n| {
                let nc = grid.center(*n);
                let lat_ok = (nc.lat - c.lat - d_lat).abs() < 0.1;
                let lon_ok = (nc.lon - c.lon - d_lon).abs() < 0.1;
                lat_ok && lon_ok
            })
            .expect("directional neighbor must exist for an interior cell")
    }

    pub fn east_of(grid: &GeohashGrid, cell: CellId) -> CellId {
        neighbor_towards(grid, cell, 0.0, 1.40625)
    }

    pub fn north_of(grid: &GeohashGrid, cell: CellId) -> CellId {
        neighbor_towards(grid, cell, 1.40625, 0.0)
    }

    /// One vertex per cell at the cell center; two-way connecting edges of
    /// cost 7 between consecutive chain cells.
    pub struct Chain {
        pub grid: GeohashGrid,
        pub net: RoadNetwork,
        pub idx: CellMembershipIndex,
        pub cells: [CellId; 3],
    }

    pub fn single_vertex_chain() -> Chain {
        let grid = GeohashGrid::new(3);
        let x = grid.cell_of(GeoPoint::new(10.2, 10.2)).unwrap();
        let y = east_of(&grid, x);
        let z = east_of(&grid, y);

        let mut b = RoadNetworkBuilder::new();
        let vx = b.add_vertex(grid.center(x));
        let vy = b.add_vertex(grid.center(y));
        let vz = b.add_vertex(grid.center(z));
        b.add_way(vx, vy, 7, 7, WayClass::Residential);
        b.add_way(vy, vz, 7, 7, WayClass::Residential);
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &grid).unwrap();

        Chain { grid, net, idx, cells: [x, y, z] }
    }

    pub fn build_meta(chain: &Chain, filter: TagFilter) -> MetaGraph {
        MetaGraphBuilder::new(&chain.net, &chain.idx, &chain.grid, &DijkstraOracle)
            .filter(filter)
            .build()
    }
}

#[cfg(test)]
mod representative {
    use gr_cell::{CellScheme, GeohashGrid};
    use gr_core::{GeoPoint, WayClass};
    use gr_graph::{CellMembershipIndex, RoadNetworkBuilder};
    use crate::select_representative;

    #[test]
    fn nearest_to_centroid_wins() {
        let grid = GeohashGrid::new(3);
        let cell = grid.cell_of(GeoPoint::new(10.2, 10.2)).unwrap();
        let center = grid.center(cell);

        let mut b = RoadNetworkBuilder::new();
        let far = b.add_vertex(GeoPoint::new(center.lat + 0.5, center.lon));
        let near = b.add_vertex(GeoPoint::new(center.lat + 0.01, center.lon));
        b.add_way(far, near, 10, 10, WayClass::Residential);
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &grid).unwrap();

        assert_eq!(select_representative(cell, &idx, &net, &grid), Some(near));
    }

    #[test]
    fn exact_tie_breaks_to_lowest_id() {
        let grid = GeohashGrid::new(3);
        let cell = grid.cell_of(GeoPoint::new(10.2, 10.2)).unwrap();
        let center = grid.center(cell);

        let mut b = RoadNetworkBuilder::new();
        // Same position → identical centroid distance.
        let v0 = b.add_vertex(center);
        let v1 = b.add_vertex(center);
        b.add_way(v0, v1, 1, 1, WayClass::Residential);
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &grid).unwrap();

        assert_eq!(select_representative(cell, &idx, &net, &grid), Some(v0));
    }

    #[test]
    fn empty_cell_has_no_representative() {
        let grid = GeohashGrid::new(3);
        let occupied = grid.cell_of(GeoPoint::new(10.2, 10.2)).unwrap();
        let empty = grid.cell_of(GeoPoint::new(-40.0, -40.0)).unwrap();

        let mut b = RoadNetworkBuilder::new();
        b.add_vertex(grid.center(occupied));
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &grid).unwrap();

        assert!(select_representative(empty, &idx, &net, &grid).is_none());
        assert!(select_representative(occupied, &idx, &net, &grid).is_some());
    }

    #[test]
    fn idempotent_across_rebuilds() {
        let grid = GeohashGrid::new(3);
        let cell = grid.cell_of(GeoPoint::new(10.2, 10.2)).unwrap();
        let center = grid.center(cell);

        let build = || {
            let mut b = RoadNetworkBuilder::new();
            let v0 = b.add_vertex(GeoPoint::new(center.lat, center.lon - 0.2));
            let v1 = b.add_vertex(GeoPoint::new(center.lat, center.lon + 0.1));
            b.add_way(v0, v1, 1, 1, WayClass::Residential);
            let net = b.build();
            let idx = CellMembershipIndex::build(&net, &grid).unwrap();
            select_representative(cell, &idx, &net, &grid)
        };
        assert_eq!(build(), build());
        assert!(build().is_some());
    }
}

#[cfg(test)]
mod builder {
    use gr_cell::CellScheme;
    use gr_core::{GeoPoint, TagFilter, WayClass};
    use gr_graph::{CellMembershipIndex, RoadNetworkBuilder};
    use gr_solve::{CostGraph, DijkstraOracle};
    use crate::MetaGraphBuilder;
    use super::helpers;

    #[test]
    fn chain_adjacencies_and_costs() {
        let chain = helpers::single_vertex_chain();
        let meta = helpers::build_meta(&chain, TagFilter::all());
        let [x, y, z] = chain.cells;

        assert_eq!(meta.cell_count(), 3);
        assert!(meta.contains(x) && meta.contains(y) && meta.contains(z));

        // Both directions of both cell pairs, nothing else.
        assert_eq!(meta.adjacency_count(), 4);
        assert_eq!(meta.cost(x, y), Some(7));
        assert_eq!(meta.cost(y, x), Some(7));
        assert_eq!(meta.cost(y, z), Some(7));
        assert_eq!(meta.cost(z, y), Some(7));

        // X and Z do not share a boundary segment.
        assert_eq!(meta.cost(x, z), None);
    }

    #[test]
    fn corner_contact_never_becomes_adjacency() {
        let chain = helpers::single_vertex_chain();
        let [x, ..] = chain.cells;
        // Rebuild the network with an extra vertex in the cell diagonally
        // northeast of X, directly connected to X's vertex.
        let diag = helpers::east_of(&chain.grid, helpers::north_of(&chain.grid, x));

        let mut b = RoadNetworkBuilder::new();
        let vx = b.add_vertex(chain.grid.center(x));
        let vd = b.add_vertex(chain.grid.center(diag));
        b.add_way(vx, vd, 3, 3, WayClass::Residential);
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &chain.grid).unwrap();
        let meta = MetaGraphBuilder::new(&net, &idx, &chain.grid, &DijkstraOracle).build();

        assert!(meta.contains(x) && meta.contains(diag));
        // Connected in the fine graph, corner-touching as cells: no entry.
        assert_eq!(meta.cost(x, diag), None);
        assert_eq!(meta.cost(diag, x), None);
    }

    #[test]
    fn unreachable_representatives_omit_adjacency() {
        let chain = helpers::single_vertex_chain();
        let [x, y, _] = chain.cells;

        // Same cells, but no edge between X's and Y's vertices.
        let mut b = RoadNetworkBuilder::new();
        b.add_vertex(chain.grid.center(x));
        b.add_vertex(chain.grid.center(y));
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &chain.grid).unwrap();
        let meta = MetaGraphBuilder::new(&net, &idx, &chain.grid, &DijkstraOracle).build();

        // Both cells are nodes; the adjacency is simply absent.
        assert!(meta.contains(x) && meta.contains(y));
        assert_eq!(meta.adjacency_count(), 0);
        assert_eq!(meta.cost(x, y), None);
    }

    #[test]
    fn tag_filter_excludes_restricted_connectors() {
        let chain = helpers::single_vertex_chain();
        let [x, y, _] = chain.cells;

        let mut b = RoadNetworkBuilder::new();
        let vx = b.add_vertex(chain.grid.center(x));
        let vy = b.add_vertex(chain.grid.center(y));
        b.add_way(vx, vy, 7, 7, WayClass::Footway);
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &chain.grid).unwrap();

        let open = MetaGraphBuilder::new(&net, &idx, &chain.grid, &DijkstraOracle).build();
        assert_eq!(open.cost(x, y), Some(7));

        let drivable = MetaGraphBuilder::new(&net, &idx, &chain.grid, &DijkstraOracle)
            .filter(TagFilter::drivable())
            .build();
        assert_eq!(drivable.cost(x, y), None);
    }

    #[test]
    fn one_way_connector_gives_directional_costs() {
        let chain = helpers::single_vertex_chain();
        let [x, y, _] = chain.cells;

        let mut b = RoadNetworkBuilder::new();
        let vx = b.add_vertex(chain.grid.center(x));
        let vy = b.add_vertex(chain.grid.center(y));
        b.add_one_way(vx, vy, 9, WayClass::Primary);
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &chain.grid).unwrap();
        let meta = MetaGraphBuilder::new(&net, &idx, &chain.grid, &DijkstraOracle).build();

        assert_eq!(meta.cost(x, y), Some(9));
        assert_eq!(meta.cost(y, x), None);
    }

    #[test]
    fn build_is_deterministic() {
        let a = helpers::build_meta(&helpers::single_vertex_chain(), TagFilter::all());
        let b = helpers::build_meta(&helpers::single_vertex_chain(), TagFilter::all());
        assert_eq!(a.cell_count(), b.cell_count());
        assert_eq!(a.adjacency_count(), b.adjacency_count());
        for i in 0..a.cell_count() as u32 {
            assert_eq!(a.cell_at(i), b.cell_at(i));
            let arcs_a: Vec<_> = a.out_arcs(i).collect();
            let arcs_b: Vec<_> = b.out_arcs(i).collect();
            assert_eq!(arcs_a, arcs_b);
        }
    }

    #[test]
    fn cost_graph_view_matches_neighbors() {
        let chain = helpers::single_vertex_chain();
        let meta = helpers::build_meta(&chain, TagFilter::all());
        let [_, y, _] = chain.cells;

        let dense = meta.dense_index(y).unwrap();
        let arc_targets: Vec<_> = meta.out_arcs(dense).map(|a| meta.cell_at(a.to)).collect();
        let neighbor_cells: Vec<_> = meta.neighbors(y).into_iter().map(|(c, _)| c).collect();
        assert_eq!(arc_targets, neighbor_cells);
        assert_eq!(arc_targets.len(), 2); // x and z
    }

    /// Cells with vertices but whose representative solve crosses another
    /// cell still get a correct aggregated cost (the solve runs on the full
    /// fine graph, not per-cell subgraphs).
    #[test]
    fn aggregation_uses_full_fine_graph() {
        let grid = gr_cell::GeohashGrid::new(3);
        let x = grid.cell_of(GeoPoint::new(10.2, 10.2)).unwrap();
        let y = helpers::east_of(&grid, x);

        let mut b = RoadNetworkBuilder::new();
        let vx = b.add_vertex(grid.center(x));
        let vy = b.add_vertex(grid.center(y));
        // Detour vertex south of the cell boundary midpoint.
        let mid = GeoPoint::new(
            grid.center(x).lat - 0.3,
            (grid.center(x).lon + grid.center(y).lon) * 0.5,
        );
        let vm = b.add_vertex(mid);
        b.add_way(vx, vm, 4, 4, WayClass::Residential);
        b.add_way(vm, vy, 4, 4, WayClass::Residential);
        b.add_way(vx, vy, 20, 20, WayClass::Residential);
        let net = b.build();
        let idx = CellMembershipIndex::build(&net, &grid).unwrap();
        let meta = MetaGraphBuilder::new(&net, &idx, &grid, &DijkstraOracle).build();

        // 4 + 4 beats the direct 20.
        assert_eq!(meta.cost(x, y), Some(8));
    }
}
