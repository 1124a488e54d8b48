//! Board coordinates.
//!
//! `x` grows to the right, `y` grows downwards, `(0, 0)` is the upper-left
//! cell of the board.

use serde::{Deserialize, Serialize};

/// Relative offsets of the eight cells surrounding a cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl CellPos {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset.
    ///
    /// Returns `None` if the result would be negative. Upper bounds are the
    /// caller's business.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Coordinates reachable through [`NEIGHBOR_OFFSETS`] without going negative.
    pub fn surrounding(self) -> impl Iterator<Item = CellPos> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_rejects_negative() {
        let origin = CellPos::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(CellPos::new(1, 1)));
    }

    #[test]
    fn test_surrounding_interior() {
        let around: Vec<_> = CellPos::new(5, 5).surrounding().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&CellPos::new(5, 5)));
        assert!(around.contains(&CellPos::new(4, 4)));
        assert!(around.contains(&CellPos::new(6, 6)));
    }

    #[test]
    fn test_surrounding_corner() {
        let around: Vec<_> = CellPos::new(0, 0).surrounding().collect();
        assert_eq!(around, vec![CellPos::new(1, 0), CellPos::new(0, 1), CellPos::new(1, 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CellPos::new(3, 7)), "(3, 7)");
    }
}
