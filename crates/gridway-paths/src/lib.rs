//! Pathfinding queries for grid-based maps.
//!
//! This crate answers two questions over a [`gridway_core::Grid`] of
//! weighted, passable/impassable cells:
//!
//! - **Shortest/cheapest route** from A to B: A\* search via
//!   [`Pathfinder::astar_path`], with Chebyshev heuristic, diagonal
//!   tie-breaking, and blocked-goal approach handling.
//! - **Line of sight** from A to B: the stepped [`line`] and [`raycast`]
//!   queries.
//!
//! [`Pathfinder`] owns and reuses internal scratch (frontier, cost and
//! predecessor maps) so that repeated queries stop allocating after
//! warm-up; callers that want to inspect a search pass their own
//! [`SearchState`] to [`Pathfinder::astar_path_into`].

mod astar;
mod distance;
mod frontier;
mod neighbors;
mod raycast;

pub use astar::{AstarConfig, DEFAULT_DIAGONAL_COST, Pathfinder, SearchState, step_cost};
pub use distance::chebyshev;
pub use frontier::Frontier;
pub use neighbors::Neighbors;
pub use raycast::{RaycastResult, line, line_into, raycast, raycast_into};
