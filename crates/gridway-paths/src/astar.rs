//! A* shortest-path search over a [`Grid`].

use std::collections::HashMap;

use gridway_core::{Grid, PathCell, Point};

use crate::distance::chebyshev;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;

/// Default diagonal-step multiplier.
///
/// Slightly above 1.0 so diagonal runs are marginally more expensive than
/// an equal-length sequence of cardinal moves. This removes cost ties that
/// would otherwise let the frontier pick visually arbitrary zig-zag paths.
/// It is applied to move costs only, never to the heuristic, so the
/// heuristic stays admissible.
pub const DEFAULT_DIAGONAL_COST: f64 = 1.001;

/// Configuration knobs for [`Pathfinder::astar_path_with`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstarConfig {
    /// Whether the start cell is included in the returned path.
    pub include_start: bool,
    /// Per-move multiplier applied to diagonal steps for tie-breaking.
    pub diagonal_cost: f64,
}

impl Default for AstarConfig {
    #[inline]
    fn default() -> Self {
        Self {
            include_start: false,
            diagonal_cost: DEFAULT_DIAGONAL_COST,
        }
    }
}

impl AstarConfig {
    /// Set whether the start cell is included (builder).
    #[inline]
    pub const fn with_include_start(mut self, include_start: bool) -> Self {
        self.include_start = include_start;
        self
    }

    /// Set the diagonal-step multiplier (builder).
    #[inline]
    pub const fn with_diagonal_cost(mut self, diagonal_cost: f64) -> Self {
        self.diagonal_cost = diagonal_cost;
        self
    }
}

/// Cost of a single step from `from` to the adjacent `to`.
///
/// The destination cell's cost is charged, never the source's; a diagonal
/// step (both axes change) is additionally scaled by `diagonal_cost`.
#[inline]
pub fn step_cost<C: PathCell>(from: Point, to: Point, to_cell: &C, diagonal_cost: f64) -> f64 {
    if from.x != to.x && from.y != to.y {
        to_cell.move_cost() * diagonal_cost
    } else {
        to_cell.move_cost()
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-search scratch state: the cost-so-far and came-from maps.
///
/// A position appears in `came_from` iff the search visited it;
/// `came_from[start] == start` marks the root. Each search clears both
/// maps (keeping their allocations) and fully overwrites prior contents.
///
/// A [`Pathfinder`] owns one `SearchState` for the common case; callers
/// that want to inspect the search afterwards (a debug visualizer, for
/// instance) pass their own to [`Pathfinder::astar_path_into`].
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Best known cumulative cost to reach each visited position.
    pub cost_so_far: HashMap<Point, f64>,
    /// Predecessor pointers for path reconstruction.
    pub came_from: HashMap<Point, Point>,
}

impl SearchState {
    /// Create an empty search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all entries, keeping the allocations.
    pub fn clear(&mut self) {
        self.cost_so_far.clear();
        self.came_from.clear();
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// A* path queries with reusable internal scratch.
///
/// Owns a [`SearchState`], a [`Frontier`], and a neighbor buffer so that
/// repeated queries incur no allocations after warm-up. Needs `&mut self`,
/// so one search per `Pathfinder` is in flight at a time; for concurrent
/// searches over a shared `&Grid`, give each caller its own `Pathfinder`.
#[derive(Debug, Default)]
pub struct Pathfinder {
    state: SearchState,
    frontier: Frontier<Point>,
    neighbors: Neighbors,
}

impl Pathfinder {
    /// Create a new pathfinder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The scratch state left by the most recent
    /// [`astar_path`](Pathfinder::astar_path) /
    /// [`astar_path_with`](Pathfinder::astar_path_with) call.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Compute the shortest path from `from` to `to` with the default
    /// [`AstarConfig`].
    ///
    /// The returned path is ordered start→goal and excludes the start
    /// cell; it is empty when no path exists or either endpoint is out of
    /// bounds. See [`astar_path_into`](Pathfinder::astar_path_into) for
    /// the full semantics.
    pub fn astar_path<C: PathCell>(&mut self, grid: &Grid<C>, from: Point, to: Point) -> Vec<Point> {
        self.astar_path_with(grid, from, to, &AstarConfig::default())
    }

    /// Compute the shortest path from `from` to `to`, using the internal
    /// scratch state.
    pub fn astar_path_with<C: PathCell>(
        &mut self,
        grid: &Grid<C>,
        from: Point,
        to: Point,
        cfg: &AstarConfig,
    ) -> Vec<Point> {
        let mut state = std::mem::take(&mut self.state);
        let path = self.astar_path_into(grid, from, to, cfg, &mut state);
        self.state = state;
        path
    }

    /// Compute the shortest path from `from` to `to`, writing the search's
    /// cost-so-far and came-from maps into a caller-owned [`SearchState`].
    ///
    /// Semantics:
    /// - An out-of-bounds endpoint or an unreachable goal yields an empty
    ///   path; neither is an error, and the two are not distinguished.
    /// - The goal cell is treated as passable for the duration of the
    ///   search, so a route *toward* a blocked goal (say, a cell occupied
    ///   by another entity) is still found. When the goal cell really is
    ///   impassable, the returned path stops at the cell adjacent to it.
    /// - `cfg.include_start` prepends `from`; `cfg.diagonal_cost` scales
    ///   diagonal steps (tie-breaking, see [`DEFAULT_DIAGONAL_COST`]).
    ///
    /// `state` is cleared on entry and holds the completed search's maps
    /// on return, whether or not a path was found.
    pub fn astar_path_into<C: PathCell>(
        &mut self,
        grid: &Grid<C>,
        from: Point,
        to: Point,
        cfg: &AstarConfig,
        state: &mut SearchState,
    ) -> Vec<Point> {
        if !grid.contains(from) || !grid.contains(to) {
            return Vec::new();
        }

        state.clear();
        self.frontier.clear();

        // The goal counts as passable during the search; the cell itself
        // is never touched.
        let goal_passable = grid.passable(to);

        state.cost_so_far.insert(from, 0.0);
        state.came_from.insert(from, from);
        self.frontier.put(from, 0.0);

        while let Some(current) = self.frontier.pop() {
            if current == to {
                // First pop of the goal is the cheapest arrival: the
                // heuristic is admissible and consistent.
                break;
            }

            let current_cost = state.cost_so_far[&current];
            let nbs = self
                .neighbors
                .all(current, |p| p == to || grid.passable(p));

            for &next in nbs {
                let Some(cell) = grid.at(next) else {
                    continue;
                };
                let tentative =
                    current_cost + step_cost(current, next, cell, cfg.diagonal_cost);
                let improved = match state.cost_so_far.get(&next) {
                    Some(&known) => tentative < known,
                    None => true,
                };
                if improved {
                    state.cost_so_far.insert(next, tentative);
                    state.came_from.insert(next, current);
                    self.frontier
                        .put(next, tentative + chebyshev(next, to) as f64);
                }
            }
        }

        if !state.came_from.contains_key(&to) {
            return Vec::new();
        }

        // Walk backward from the goal; came_from[from] == from terminates
        // the walk at the root.
        let mut path = Vec::new();
        let mut cur = to;
        while cur != from {
            path.push(cur);
            cur = state.came_from[&cur];
        }
        path.reverse();

        if cfg.include_start {
            path.insert(0, from);
        }
        if !goal_passable {
            // The goal itself is blocked: end the path on the cell
            // adjacent to the obstruction.
            path.pop();
        }
        path
    }
}
