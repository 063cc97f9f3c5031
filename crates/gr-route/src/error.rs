//! Routing-query error type.
//!
//! Every variant is fatal to its own query only: queries never mutate the
//! shared meta-graph or membership index, so a failed query leaves no
//! partial state behind.

use thiserror::Error;

use gr_cell::CellError;
use gr_core::{CellId, GeoPoint};

/// Errors returned by [`HierarchicalPathfinder::route`](crate::HierarchicalPathfinder::route).
#[derive(Debug, Error)]
pub enum RouteError {
    /// An endpoint lies outside the supported coordinate domain.
    #[error(transparent)]
    InvalidCoordinate(#[from] CellError),

    /// An endpoint's cell holds no network vertex (absent from the
    /// meta-graph); there is nothing to route to or from near that point.
    #[error("no routable cell at {0}")]
    UnresolvedEndpoint(GeoPoint),

    /// The meta-graph has no path between the endpoint cells — the region
    /// is disconnected at coarse resolution.
    #[error("meta-graph disconnected between cells {from} and {to}")]
    NoMetaPath { from: CellId, to: CellId },

    /// The restricted subgraph offers no vertex incident to an allowed
    /// edge near an endpoint.
    #[error("no snappable vertex near {0} in the restricted subgraph")]
    NoSnapTarget(GeoPoint),

    /// The fine solve found no path inside the coarse cell set, and the
    /// configured expansion (if any) did not recover one.
    #[error("no fine path between cells {from} and {to} (ring expansion tried: {expanded})")]
    Failed { from: CellId, to: CellId, expanded: bool },
}

pub type RouteResult<T> = Result<T, RouteError>;
