//! Default Dijkstra implementation of the [`Oracle`] trait.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::CostGraph;
use crate::oracle::{Oracle, Path};

const UNREACHED: u32 = u32::MAX;

/// Standard binary-heap Dijkstra over any [`CostGraph`].
///
/// Deterministic: heap ties break on the node index, and arc relaxation
/// follows the graph's stable `out_arcs` order, so identical inputs always
/// produce identical paths.
pub struct DijkstraOracle;

impl Oracle for DijkstraOracle {
    fn solve<G: CostGraph>(&self, graph: &G, from: u32, to: u32) -> Option<Path> {
        if from == to {
            return Some(Path::trivial(from));
        }
        let mut search = Search::new(graph, from);
        search.run_until(graph, |settled| settled == to);
        search.reconstruct(to)
    }

    fn solve_to_set<G: CostGraph>(
        &self,
        graph: &G,
        from: u32,
        targets: &[u32],
    ) -> FxHashMap<u32, Path> {
        let mut pending: FxHashSet<u32> = targets.iter().copied().collect();
        let mut search = Search::new(graph, from);
        // One traversal settles every requested target, stopping as soon as
        // the last one is reached.
        search.run_until(graph, |settled| {
            pending.remove(&settled);
            pending.is_empty()
        });

        let mut paths = FxHashMap::default();
        for &t in targets {
            if let Some(p) = search.reconstruct(t) {
                paths.insert(t, p);
            }
        }
        paths
    }
}

// ── Search state ──────────────────────────────────────────────────────────────

/// One Dijkstra traversal: distance labels, predecessor arcs, and the heap.
struct Search {
    from: u32,
    /// Best known cost per node; `u32::MAX` = unreached.
    dist: Vec<u32>,
    /// Arc that reached each node.
    prev_arc: Vec<u32>,
    /// Source node of `prev_arc` (the `CostGraph` has no arc → source
    /// lookup, so it is recorded during relaxation).
    prev_node: Vec<u32>,
    heap: BinaryHeap<Reverse<(u32, u32)>>,
}

impl Search {
    fn new<G: CostGraph>(graph: &G, from: u32) -> Self {
        let n = graph.node_count();
        let mut dist = vec![UNREACHED; n];
        dist[from as usize] = 0;

        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, from)));

        Self {
            from,
            dist,
            prev_arc: vec![UNREACHED; n],
            prev_node: vec![UNREACHED; n],
            heap,
        }
    }

    /// Pop-and-relax until `stop` returns true for a settled node or the
    /// heap empties.
    fn run_until<G: CostGraph>(&mut self, graph: &G, mut stop: impl FnMut(u32) -> bool) {
        while let Some(Reverse((cost, node))) = self.heap.pop() {
            // Skip stale heap entries.
            if cost > self.dist[node as usize] {
                continue;
            }
            if stop(node) {
                return;
            }

            for arc in graph.out_arcs(node) {
                let new_cost = cost.saturating_add(arc.cost);
                if new_cost < self.dist[arc.to as usize] {
                    self.dist[arc.to as usize] = new_cost;
                    self.prev_arc[arc.to as usize] = arc.id;
                    self.prev_node[arc.to as usize] = node;
                    self.heap.push(Reverse((new_cost, arc.to)));
                }
            }
        }
    }

    /// Walk `prev_arc` back from `to`; `None` if `to` was never reached.
    fn reconstruct(&self, to: u32) -> Option<Path> {
        if to == self.from {
            return Some(Path::trivial(to));
        }
        if self.dist[to as usize] == UNREACHED {
            return None;
        }

        let mut nodes = vec![to];
        let mut arcs = Vec::new();
        let mut cur = to;
        while cur != self.from {
            arcs.push(self.prev_arc[cur as usize]);
            cur = self.prev_node[cur as usize];
            nodes.push(cur);
        }
        nodes.reverse();
        arcs.reverse();
        Some(Path { nodes, arcs, cost: self.dist[to as usize] })
    }
}
