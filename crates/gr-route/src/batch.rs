//! Batch execution of independent origin-destination queries.
//!
//! Queries share the immutable pathfinder and nothing else, so a batch can
//! be partitioned across worker threads freely.  With the `parallel`
//! feature the batch runs on the Rayon pool; otherwise it runs
//! sequentially with identical results.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use gr_cell::CellScheme;
use gr_core::{GeoPoint, TagFilter};
use gr_solve::Oracle;

use crate::error::RouteError;
use crate::pathfinder::{HierarchicalPathfinder, Route};

impl<S: CellScheme, O: Oracle> HierarchicalPathfinder<S, O> {
    /// Route every `(start, end)` pair under one filter.
    ///
    /// Results keep the input order.  Each element carries its own
    /// `Result`; one failed query never affects another.
    pub fn route_batch(
        &self,
        pairs: &[(GeoPoint, GeoPoint)],
        filter: TagFilter,
    ) -> Vec<Result<Route, RouteError>> {
        #[cfg(feature = "parallel")]
        {
            pairs
                .par_iter()
                .map(|&(start, end)| self.route(start, end, filter))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|&(start, end)| self.route(start, end, filter))
                .collect()
        }
    }
}
