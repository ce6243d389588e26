use gridway_core::Point;

/// Chebyshev (L∞) distance between two points.
///
/// The number of 8-directional steps between `a` and `b`, and the A*
/// heuristic: it never overestimates true path cost, independently of the
/// diagonal tie-break multiplier.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_distances() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(0, 0)), 0);
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(4, 0)), 4);
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(3, 4)), 4);
        assert_eq!(chebyshev(Point::new(2, 2), Point::new(-1, 1)), 3);
    }
}
