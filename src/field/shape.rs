//! Shape masks ("figures").
//!
//! A shape decides which coordinates of the board rectangle are playable.
//! Bounds are checked by the field; a shape only answers for in-bounds cells.

use rustc_hash::FxHashSet;

use crate::core::CellPos;

/// Predicate selecting playable cells.
pub trait Shape: std::fmt::Debug {
    /// `true` if the cell at `pos` is masked out.
    fn is_excluded(&self, pos: CellPos) -> bool;
}

/// Every cell is playable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn is_excluded(&self, _pos: CellPos) -> bool {
        false
    }
}

/// A rhombus with its diagonals along the board axes.
///
/// `half_width` / `half_height` are the half-diagonals, which also place the
/// centre at `(half_width, half_height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rhombus {
    half_width: f64,
    half_height: f64,
}

impl Rhombus {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// The rhombus inscribed in a `width` x `height` board.
    pub fn inscribed(width: usize, height: usize) -> Self {
        Self::new(width as f64 / 2.0 - 0.5, height as f64 / 2.0 - 0.5)
    }
}

impl Shape for Rhombus {
    fn is_excluded(&self, pos: CellPos) -> bool {
        let a = self.half_width;
        let b = self.half_height;
        let dx = (pos.x as f64 - a).abs();
        let dy = (pos.y as f64 - b).abs();
        dx * b + dy * a > a * b + f64::EPSILON
    }
}

/// Every cell except an explicit set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExcludedCells {
    cells: FxHashSet<CellPos>,
}

impl ExcludedCells {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<CellPos> for ExcludedCells {
    fn from_iter<I: IntoIterator<Item = CellPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Shape for ExcludedCells {
    fn is_excluded(&self, pos: CellPos) -> bool {
        self.cells.contains(&pos)
    }
}
