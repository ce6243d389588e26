//! The [`Grid`] type — an owned 2D grid of path cells.
//!
//! Unlike a shared-view grid, this one hands out real `&mut` references to
//! its cells: toggling passability or adjusting move costs between queries
//! is done directly through [`at_mut`](Grid::at_mut).

use crate::cell::PathCell;
use crate::geom::{Point, Range, RangeIter};

/// A fixed-size 2D grid owning one cell per in-bounds [`Point`].
///
/// Row-major storage. Accessors are bounds-checked and return `Option`;
/// out-of-bounds positions are never dereferenced.
#[derive(Debug, Clone)]
pub struct Grid<C> {
    cells: Vec<C>,
    bounds: Range,
}

impl<C: PathCell + Default + Clone> Grid<C> {
    /// Create a new grid of the given dimensions, filled with default
    /// cells. Negative dimensions are clamped to zero (an empty grid).
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![C::default(); bounds.len()],
            bounds,
        }
    }

    /// Create a new grid filled with copies of `cell`.
    pub fn new_with(width: i32, height: i32, cell: C) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![cell; bounds.len()],
            bounds,
        }
    }

    /// Resize the grid. Reallocates storage and resets every cell to the
    /// default: a reshape is a reset, existing contents are not preserved.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.bounds = Range::new(0, 0, width.max(0), height.max(0));
        self.cells.clear();
        self.cells.resize(self.bounds.len(), C::default());
    }

    /// Overwrite every cell with the default cell.
    pub fn clear(&mut self) {
        self.fill(C::default());
    }

    /// Overwrite every cell with a copy of `cell`.
    pub fn fill(&mut self, cell: C) {
        self.cells.fill(cell);
    }
}

impl<C: PathCell> Grid<C> {
    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is in bounds and its cell is passable.
    ///
    /// Folds the bounds check into the passability read, so callers that
    /// only care about "can this cell be entered" need a single call.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.passable())
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&C> {
        let i = self.idx(p)?;
        Some(&self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    /// This is how external collaborators edit the map between queries.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut C> {
        let i = self.idx(p)?;
        Some(&mut self.cells[i])
    }

    /// Row-major iterator over `(Point, &C)` pairs.
    pub fn iter(&self) -> GridIter<'_, C> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, &C)` pairs in a [`Grid`].
pub struct GridIter<'a, C> {
    grid: &'a Grid<C>,
    inner: RangeIter,
}

impl<'a, C: PathCell> Iterator for GridIter<'a, C> {
    type Item = (Point, &'a C);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let cell = self.grid.at(p)?;
        Some((p, cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
