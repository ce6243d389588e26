//! The [`PathCell`] trait and the default [`Cell`] record.

/// The cell interface the search algorithms read.
///
/// A [`Grid`](crate::Grid) is generic over its cell type so callers can
/// carry arbitrary extra per-cell data (terrain kind, occupant id, …); the
/// pathfinding code only ever looks at these two attributes.
pub trait PathCell {
    /// Whether the cell can be entered at all.
    fn passable(&self) -> bool;

    /// Cost multiplier for entering this cell. Must be > 0 for any cell a
    /// path may traverse.
    fn move_cost(&self) -> f64;
}

/// A plain search cell: a passability flag and a movement cost multiplier.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub passable: bool,
    pub move_cost: f64,
}

impl Cell {
    /// Set the passability flag (builder).
    #[inline]
    pub const fn with_passable(mut self, passable: bool) -> Self {
        self.passable = passable;
        self
    }

    /// Set the movement cost (builder).
    #[inline]
    pub const fn with_move_cost(mut self, move_cost: f64) -> Self {
        self.move_cost = move_cost;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            passable: true,
            move_cost: 1.0,
        }
    }
}

impl PathCell for Cell {
    #[inline]
    fn passable(&self) -> bool {
        self.passable
    }

    #[inline]
    fn move_cost(&self) -> f64 {
        self.move_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_open_unit_cost() {
        let c = Cell::default();
        assert!(c.passable());
        assert_eq!(c.move_cost(), 1.0);
    }

    #[test]
    fn builders() {
        let c = Cell::default().with_passable(false).with_move_cost(3.5);
        assert!(!c.passable());
        assert_eq!(c.move_cost(), 3.5);
    }

    #[test]
    fn custom_cell_type_implements_path_cell() {
        struct Terrain {
            wall: bool,
            swamp: bool,
        }
        impl PathCell for Terrain {
            fn passable(&self) -> bool {
                !self.wall
            }
            fn move_cost(&self) -> f64 {
                if self.swamp { 5.0 } else { 1.0 }
            }
        }
        let t = Terrain {
            wall: false,
            swamp: true,
        };
        assert!(t.passable());
        assert_eq!(t.move_cost(), 5.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::default().with_move_cost(2.0);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
