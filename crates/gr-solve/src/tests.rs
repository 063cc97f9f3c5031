//! Unit tests for gr-solve, on a small hand-built adjacency-list graph.

#[cfg(test)]
mod helpers {
    use crate::{Arc, CostGraph};

    /// Minimal adjacency-list `CostGraph` for testing; arc ids are assigned
    /// in insertion order.
    pub struct ListGraph {
        adj: Vec<Vec<Arc>>,
        arcs: u32,
    }

    impl ListGraph {
        pub fn new(nodes: usize) -> Self {
            Self { adj: vec![Vec::new(); nodes], arcs: 0 }
        }

        pub fn arc(&mut self, from: u32, to: u32, cost: u32) -> u32 {
            let id = self.arcs;
            self.arcs += 1;
            self.adj[from as usize].push(Arc { id, to, cost });
            id
        }
    }

    impl CostGraph for ListGraph {
        fn node_count(&self) -> usize {
            self.adj.len()
        }
        fn out_arcs(&self, node: u32) -> impl Iterator<Item = Arc> + '_ {
            self.adj[node as usize].iter().copied()
        }
    }

    /// Diamond: 0→1→3 costs 1+1, 0→2→3 costs 1+5, plus direct 0→3 cost 10.
    /// Returns the graph and the arc ids of the cheapest route (0→1, 1→3).
    pub fn diamond() -> (ListGraph, (u32, u32)) {
        let mut g = ListGraph::new(4);
        let a01 = g.arc(0, 1, 1);
        let a13 = g.arc(1, 3, 1);
        g.arc(0, 2, 1);
        g.arc(2, 3, 5);
        g.arc(0, 3, 10);
        (g, (a01, a13))
    }
}

#[cfg(test)]
mod single_pair {
    use crate::{DijkstraOracle, Oracle};
    use super::helpers::{diamond, ListGraph};

    #[test]
    fn trivial_same_node() {
        let (g, _) = diamond();
        let p = DijkstraOracle.solve(&g, 2, 2).unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.cost, 0);
        assert_eq!(p.nodes, vec![2]);
    }

    #[test]
    fn picks_cheapest_of_three_routes() {
        let (g, (a01, a13)) = diamond();
        let p = DijkstraOracle.solve(&g, 0, 3).unwrap();
        assert_eq!(p.cost, 2);
        assert_eq!(p.nodes, vec![0, 1, 3]);
        assert_eq!(p.arcs, vec![a01, a13]);
    }

    #[test]
    fn unreachable_is_none() {
        let mut g = ListGraph::new(3);
        g.arc(0, 1, 1);
        // Node 2 has no incoming arcs.
        assert!(DijkstraOracle.solve(&g, 0, 2).is_none());
    }

    #[test]
    fn directed_arcs_do_not_reverse() {
        let mut g = ListGraph::new(2);
        g.arc(0, 1, 1);
        assert!(DijkstraOracle.solve(&g, 0, 1).is_some());
        assert!(DijkstraOracle.solve(&g, 1, 0).is_none());
    }

    #[test]
    fn deterministic_across_runs() {
        let (g, _) = diamond();
        let a = DijkstraOracle.solve(&g, 0, 3).unwrap();
        let b = DijkstraOracle.solve(&g, 0, 3).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod one_to_many {
    use crate::{DijkstraOracle, Oracle};
    use super::helpers::{diamond, ListGraph};

    #[test]
    fn matches_single_pair_costs() {
        let (g, _) = diamond();
        let many = DijkstraOracle.solve_to_set(&g, 0, &[1, 2, 3]);
        for t in [1u32, 2, 3] {
            let single = DijkstraOracle.solve(&g, 0, t).unwrap();
            assert_eq!(many[&t], single, "target {t}");
        }
    }

    #[test]
    fn unreachable_targets_omitted() {
        let mut g = ListGraph::new(4);
        g.arc(0, 1, 1);
        // 2 and 3 unreachable.
        let many = DijkstraOracle.solve_to_set(&g, 0, &[1, 2, 3]);
        assert_eq!(many.len(), 1);
        assert!(many.contains_key(&1));
    }

    #[test]
    fn source_in_target_set_is_trivial() {
        let (g, _) = diamond();
        let many = DijkstraOracle.solve_to_set(&g, 0, &[0, 3]);
        assert!(many[&0].is_trivial());
        assert_eq!(many[&3].cost, 2);
    }

    #[test]
    fn empty_target_set() {
        let (g, _) = diamond();
        assert!(DijkstraOracle.solve_to_set(&g, 0, &[]).is_empty());
    }
}
