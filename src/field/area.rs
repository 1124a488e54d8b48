//! Rectangular, lockable windows onto a shared field.
//!
//! A [`FieldArea`] exposes the field's operations but adds its own gate: a
//! cell is *available* through the area iff it lies inside the inclusive
//! rectangle, the area is unlocked and the field's shape does not exclude
//! it. Several areas may alias one field; the lock is advisory and does not
//! arbitrate between overlapping unlocked areas.

use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::debug;

use super::creature::Creature;
use super::grid::Field;
use super::neighbors::NeighborCounts;
use crate::core::{CellPos, ConfigError, FieldError, PlayerId};

/// A lockable rectangle over a shared [`Field`]. Locked on creation.
#[derive(Debug, Clone)]
pub struct FieldArea {
    field: Rc<Field>,
    upper_left: CellPos,
    lower_right: CellPos,
    locked: bool,
}

impl FieldArea {
    /// Create a locked area spanning `upper_left..=lower_right`.
    pub fn new(field: Rc<Field>, upper_left: CellPos, lower_right: CellPos) -> Result<Self, ConfigError> {
        for corner in [upper_left, lower_right] {
            if !field.is_in_bounds(corner) {
                return Err(ConfigError::CornerOutOfBounds(corner));
            }
        }
        if upper_left.x > lower_right.x || upper_left.y > lower_right.y {
            return Err(ConfigError::InvertedArea {
                upper_left,
                lower_right,
            });
        }
        Ok(Self {
            field,
            upper_left,
            lower_right,
            locked: true,
        })
    }

    /// A locked area covering the whole field.
    pub fn whole(field: Rc<Field>) -> Self {
        let lower_right = CellPos::new(field.width() - 1, field.height() - 1);
        Self {
            field,
            upper_left: CellPos::new(0, 0),
            lower_right,
            locked: true,
        }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn upper_left_corner(&self) -> CellPos {
        self.upper_left
    }

    #[must_use]
    pub fn lower_right_corner(&self) -> CellPos {
        self.lower_right
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.lower_right.x - self.upper_left.x + 1
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.lower_right.y - self.upper_left.y + 1
    }

    #[must_use]
    pub fn field(&self) -> &Rc<Field> {
        &self.field
    }

    /// `true` if the area spans the whole field.
    #[must_use]
    pub fn covers_field(&self) -> bool {
        self.width() == self.field.width() && self.height() == self.field.height()
    }

    /// Rectangle test only; ignores the lock and the shape.
    #[must_use]
    pub fn contains(&self, pos: CellPos) -> bool {
        (self.upper_left.x..=self.lower_right.x).contains(&pos.x)
            && (self.upper_left.y..=self.lower_right.y).contains(&pos.y)
    }

    #[must_use]
    pub fn is_cell_available(&self, pos: CellPos) -> bool {
        self.contains(pos) && !self.locked && !self.field.is_excluded_cell(pos)
    }

    fn verify_cell_pos(&self, pos: CellPos) -> Result<(), FieldError> {
        if !self.contains(pos) {
            return Err(FieldError::OutsideArea {
                pos,
                upper_left: self.upper_left,
                lower_right: self.lower_right,
            });
        }
        if self.locked {
            return Err(FieldError::Locked(pos));
        }
        self.field.verify_cell_pos(pos).map(|_| ())
    }

    pub fn set_creature_in_cell(&self, pos: CellPos, owner: PlayerId) -> Result<(), FieldError> {
        self.verify_cell_pos(pos)?;
        self.field.set_creature_in_cell(pos, owner)
    }

    pub fn remove_creature_in_cell(&self, pos: CellPos) -> Result<(), FieldError> {
        self.verify_cell_pos(pos)?;
        self.field.remove_creature_in_cell(pos)
    }

    pub fn get_creature_by_cell(&self, pos: CellPos) -> Result<Creature, FieldError> {
        self.verify_cell_pos(pos)?;
        self.field.get_creature_by_cell(pos)
    }

    pub fn has_creature_in_cell(&self, pos: CellPos) -> Result<bool, FieldError> {
        self.verify_cell_pos(pos)?;
        self.field.has_creature_in_cell(pos)
    }

    pub fn count_cell_neighbors_creatures(&self, pos: CellPos) -> Result<NeighborCounts, FieldError> {
        self.verify_cell_pos(pos)?;
        self.field.count_cell_neighbors_creatures(pos)
    }

    /// Playable coordinates inside the rectangle, row-major. Ignores the lock.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (self.upper_left.y..=self.lower_right.y)
            .flat_map(move |y| (self.upper_left.x..=self.lower_right.x).map(move |x| CellPos::new(x, y)))
            .filter(move |&pos| !self.field.is_excluded_cell(pos))
    }

    /// Remove every creature inside the area.
    ///
    /// A whole-field area clears the field in one go (one `Cleared` event);
    /// a partial area removes occupied cells one by one and leaves the rest
    /// of the field alone. Not subject to the lock.
    pub fn clear(&self) {
        if self.covers_field() {
            self.field.clear();
            return;
        }
        let occupied: Vec<CellPos> = self
            .cells()
            .filter(|&pos| self.field.has_creature_in_cell(pos).unwrap_or(false))
            .collect();
        debug!(
            upper_left = %self.upper_left,
            lower_right = %self.lower_right,
            removed = occupied.len(),
            "area cleared"
        );
        for pos in occupied {
            // `cells()` only yields playable coordinates
            let _ = self.field.remove_creature_in_cell(pos);
        }
    }

    /// Distinct owners of living creatures inside the area. Ignores the lock.
    #[must_use]
    pub fn check_creature_in_area(&self) -> FxHashSet<PlayerId> {
        self.cells()
            .filter_map(|pos| self.field.get_creature_by_cell(pos).ok())
            .filter(Creature::is_alive)
            .map(|creature| creature.owner())
            .collect()
    }
}
