//! The coarse graph of cells.
//!
//! Nodes are the active cells (cells containing at least one vertex) and
//! arcs carry the aggregated fine-graph cost between adjacent cells'
//! representative vertices.  Stored in CSR over dense cell indices, the
//! same layout the fine graph uses, so the oracle searches both levels
//! identically.
//!
//! A `MetaGraph` is immutable.  When the network snapshot or the resolution
//! changes, a new instance is built and swapped in; queries running against
//! the old instance are unaffected.

use rustc_hash::FxHashMap;

use gr_core::CellId;
use gr_solve::{Arc, CostGraph};

/// Immutable coarse graph: cells + directed aggregated-cost adjacencies.
pub struct MetaGraph {
    /// Member cells, sorted ascending; position = dense node index.
    cells: Vec<CellId>,
    /// Reverse lookup cell → dense index.
    index: FxHashMap<CellId, u32>,
    /// CSR row pointer over dense indices.
    adj_start: Vec<u32>,
    /// Target dense index per adjacency.
    adj_to: Vec<u32>,
    /// Aggregated traversal cost per adjacency.
    adj_cost: Vec<u32>,
}

impl MetaGraph {
    /// Assemble from sorted cells and `(from, to, cost)` adjacencies over
    /// dense indices.  Crate-internal; use
    /// [`MetaGraphBuilder`](crate::MetaGraphBuilder).
    pub(crate) fn from_parts(cells: Vec<CellId>, mut adjacencies: Vec<(u32, u32, u32)>) -> Self {
        debug_assert!(cells.is_sorted());
        let n = cells.len();

        let index: FxHashMap<CellId, u32> = cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u32))
            .collect();

        adjacencies.sort_unstable();

        let mut adj_start = vec![0u32; n + 1];
        for &(from, _, _) in &adjacencies {
            adj_start[from as usize + 1] += 1;
        }
        for i in 1..=n {
            adj_start[i] += adj_start[i - 1];
        }

        let adj_to = adjacencies.iter().map(|&(_, to, _)| to).collect();
        let adj_cost = adjacencies.iter().map(|&(_, _, cost)| cost).collect();

        Self { cells, index, adj_start, adj_to, adj_cost }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn adjacency_count(&self) -> usize {
        self.adj_to.len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// `true` if `cell` is a node of the meta-graph.
    pub fn contains(&self, cell: CellId) -> bool {
        self.index.contains_key(&cell)
    }

    /// Dense node index of `cell`.
    pub fn dense_index(&self, cell: CellId) -> Option<u32> {
        self.index.get(&cell).copied()
    }

    /// Cell at a dense node index.
    #[inline]
    pub fn cell_at(&self, index: u32) -> CellId {
        self.cells[index as usize]
    }

    /// Directed aggregated cost of the adjacency `from → to`, if present.
    pub fn cost(&self, from: CellId, to: CellId) -> Option<u32> {
        let f = self.dense_index(from)?;
        let t = self.dense_index(to)?;
        let start = self.adj_start[f as usize] as usize;
        let end = self.adj_start[f as usize + 1] as usize;
        (start..end)
            .find(|&i| self.adj_to[i] == t)
            .map(|i| self.adj_cost[i])
    }

    /// Adjacent cells of `from` with their directed costs.
    pub fn neighbors(&self, from: CellId) -> Vec<(CellId, u32)> {
        match self.dense_index(from) {
            None => Vec::new(),
            Some(f) => {
                let start = self.adj_start[f as usize] as usize;
                let end = self.adj_start[f as usize + 1] as usize;
                (start..end)
                    .map(|i| (self.cell_at(self.adj_to[i]), self.adj_cost[i]))
                    .collect()
            }
        }
    }
}

impl CostGraph for MetaGraph {
    fn node_count(&self) -> usize {
        self.cells.len()
    }

    fn out_arcs(&self, node: u32) -> impl Iterator<Item = Arc> + '_ {
        let start = self.adj_start[node as usize] as usize;
        let end = self.adj_start[node as usize + 1] as usize;
        (start..end).map(move |i| Arc {
            id: i as u32,
            to: self.adj_to[i],
            cost: self.adj_cost[i],
        })
    }
}
