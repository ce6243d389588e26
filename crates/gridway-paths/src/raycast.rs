//! Stepped line and line-of-sight raycast queries.
//!
//! Both walk the same sequence of cells: `chebyshev(from, to)` evenly
//! spaced samples of the segment, each rounded to the nearest cell. This
//! is the interpolation stepping of the reference design, preserved
//! as-is — including its willingness to cut an exact corner diagonally —
//! rather than a supercover/Bresenham walk.

use gridway_core::{Grid, PathCell, Point};

use crate::distance::chebyshev;

/// Outcome of a [`raycast`] query.
///
/// When `hit` is true, `pos` is the first blocking or out-of-bounds cell
/// along the ray; otherwise `pos` is the queried end position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaycastResult {
    pub hit: bool,
    pub pos: Point,
}

#[inline]
fn step_point(from: Point, to: Point, step: i32, steps: i32) -> Point {
    let t = if steps == 0 {
        0.0
    } else {
        step as f64 / steps as f64
    };
    let x = from.x as f64 + (to.x - from.x) as f64 * t;
    let y = from.y as f64 + (to.y - from.y) as f64 * t;
    Point::new(x.round() as i32, y.round() as i32)
}

/// The stepped cells of the segment from `from` to `to`, inclusive.
///
/// Pure geometry: no grid, no passability checks. The result is a
/// connected, gap-free sequence of cells from `from` to `to`.
pub fn line(from: Point, to: Point) -> Vec<Point> {
    let mut cells = Vec::new();
    line_into(from, to, &mut cells);
    cells
}

/// [`line`], appending into a caller-owned buffer.
pub fn line_into(from: Point, to: Point, cells: &mut Vec<Point>) {
    let steps = chebyshev(from, to);
    cells.reserve(steps as usize + 1);
    for step in 0..=steps {
        cells.push(step_point(from, to, step, steps));
    }
}

/// Line-of-sight query from `from` to `to`.
///
/// Walks the same cells as [`line`] and stops at the first cell that is
/// out of bounds or impassable, reporting it as the hit. If every stepped
/// cell (including `to`) passes, the result is `{hit: false, pos: to}`.
pub fn raycast<C: PathCell>(grid: &Grid<C>, from: Point, to: Point) -> RaycastResult {
    cast(grid, from, to, None)
}

/// [`raycast`], additionally appending every stepped cell — up to and
/// including the terminating one — into `visited`.
pub fn raycast_into<C: PathCell>(
    grid: &Grid<C>,
    from: Point,
    to: Point,
    visited: &mut Vec<Point>,
) -> RaycastResult {
    cast(grid, from, to, Some(visited))
}

fn cast<C: PathCell>(
    grid: &Grid<C>,
    from: Point,
    to: Point,
    mut visited: Option<&mut Vec<Point>>,
) -> RaycastResult {
    let steps = chebyshev(from, to);
    for step in 0..=steps {
        let p = step_point(from, to, step, steps);
        if let Some(buf) = visited.as_deref_mut() {
            buf.push(p);
        }
        if !grid.passable(p) {
            return RaycastResult { hit: true, pos: p };
        }
    }
    RaycastResult {
        hit: false,
        pos: to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::Cell;

    #[test]
    fn horizontal_line() {
        let pts = line(Point::new(0, 0), Point::new(4, 0));
        let expected: Vec<_> = (0..=4).map(|x| Point::new(x, 0)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn diagonal_line() {
        let pts = line(Point::new(0, 0), Point::new(3, 3));
        let expected: Vec<_> = (0..=3).map(|i| Point::new(i, i)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn degenerate_line_is_single_cell() {
        let p = Point::new(2, 2);
        assert_eq!(line(p, p), vec![p]);
    }

    #[test]
    fn line_is_connected_and_gap_free() {
        let cases = [
            (Point::new(0, 0), Point::new(7, 3)),
            (Point::new(5, 1), Point::new(0, 6)),
            (Point::new(-2, -2), Point::new(4, 1)),
        ];
        for (a, b) in cases {
            let pts = line(a, b);
            assert_eq!(pts[0], a);
            assert_eq!(*pts.last().unwrap(), b);
            for w in pts.windows(2) {
                assert_eq!(chebyshev(w[0], w[1]), 1, "gap between {} and {}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn raycast_clear() {
        let g: Grid<Cell> = Grid::new(5, 5);
        let res = raycast(&g, Point::new(0, 0), Point::new(4, 0));
        assert_eq!(
            res,
            RaycastResult {
                hit: false,
                pos: Point::new(4, 0)
            }
        );
    }

    #[test]
    fn raycast_blocked() {
        let mut g: Grid<Cell> = Grid::new(5, 5);
        g.at_mut(Point::new(2, 0)).unwrap().passable = false;
        let res = raycast(&g, Point::new(0, 0), Point::new(4, 0));
        assert_eq!(
            res,
            RaycastResult {
                hit: true,
                pos: Point::new(2, 0)
            }
        );
    }

    #[test]
    fn raycast_stops_at_grid_edge() {
        let g: Grid<Cell> = Grid::new(3, 3);
        let res = raycast(&g, Point::new(0, 0), Point::new(5, 0));
        // First out-of-bounds stepped cell is the hit.
        assert_eq!(
            res,
            RaycastResult {
                hit: true,
                pos: Point::new(3, 0)
            }
        );
    }

    #[test]
    fn raycast_visited_cells_include_terminator() {
        let mut g: Grid<Cell> = Grid::new(5, 5);
        g.at_mut(Point::new(2, 0)).unwrap().passable = false;
        let mut visited = Vec::new();
        let res = raycast_into(&g, Point::new(0, 0), Point::new(4, 0), &mut visited);
        assert!(res.hit);
        assert_eq!(
            visited,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn raycast_visited_cells_on_clear_ray() {
        let g: Grid<Cell> = Grid::new(5, 5);
        let mut visited = Vec::new();
        let res = raycast_into(&g, Point::new(0, 0), Point::new(2, 2), &mut visited);
        assert!(!res.hit);
        assert_eq!(
            visited,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn raycast_from_blocked_cell_hits_immediately() {
        let mut g: Grid<Cell> = Grid::new(3, 3);
        g.at_mut(Point::new(0, 0)).unwrap().passable = false;
        let res = raycast(&g, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(
            res,
            RaycastResult {
                hit: true,
                pos: Point::new(0, 0)
            }
        );
    }
}
