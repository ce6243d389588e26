use gridway_core::Point;

/// Cached neighbor computation helper.
///
/// Provides methods for enumerating cardinal (4-way) or all (8-way)
/// neighbors of a grid point, filtered by a predicate. The 8-way order is
/// fixed: cardinal directions first, then diagonals. Callers should not
/// depend on the order beyond its determinism.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

const DIAGONAL: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in CARDINAL {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return 8-directional neighbors of `p` (cardinals first, then
    /// diagonals), keeping only those for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in CARDINAL.into_iter().chain(DIAGONAL) {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
