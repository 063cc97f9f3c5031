//! `gr-route` — hierarchical point-to-point routing.
//!
//! Composes the rest of the workspace: a coarse solve over the cell
//! meta-graph picks the corridor, and the fine solve runs only on the road
//! edges belonging to that corridor's cells.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`pathfinder`] | `HierarchicalPathfinder`, `Route`, `ExpandPolicy`      |
//! | [`batch`]      | `route_batch` — parallel origin-destination batches    |
//! | [`error`]      | `RouteError`, `RouteResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs `route_batch` on the Rayon thread pool.            |
//! | `serde`    | Propagates serde derives through the `gr-*` stack.      |

pub mod batch;
pub mod error;
pub mod pathfinder;


pub use error::{RouteError, RouteResult};
pub use pathfinder::{ExpandPolicy, HierarchicalPathfinder, Route};
