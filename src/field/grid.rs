//! The shared board.
//!
//! A [`Field`] is a `width` x `height` grid of [`Cell`]s plus a [`Shape`]
//! mask. It is shared (`Rc<Field>`) between every [`FieldArea`] built over
//! it, so mutation goes through `&self`: the grid sits in a `RefCell` whose
//! borrow is always released before observers are notified. Observers may
//! therefore query the field from inside `update`.
//!
//! Every accessor passes the same gate, [`Field::verify_cell_pos`]: an
//! out-of-bounds or shape-excluded coordinate is a [`FieldError`] and the
//! call has no effect.
//!
//! [`FieldArea`]: super::FieldArea

use std::cell::RefCell;
use std::fmt;

use tracing::{debug, trace};

use super::cell::{Cell, NeighborList};
use super::creature::{Creature, CreatureFactory, LivingCreatureFactory};
use super::neighbors::NeighborCounts;
use super::shape::Shape;
use crate::core::{CellPos, ConfigError, FieldError, PlayerId};
use crate::events::{FieldEvent, Subject};

/// The board: cells, shape mask, creature factory and an event subject.
pub struct Field {
    width: usize,
    height: usize,
    shape: Box<dyn Shape>,
    factory: Box<dyn CreatureFactory>,
    /// Row-major.
    cells: RefCell<Vec<Cell>>,
    last_affected: RefCell<Option<CellPos>>,
    events: Subject<FieldEvent>,
}

impl Field {
    /// Build a field whose cells receive living creatures.
    pub fn new(width: usize, height: usize, shape: Box<dyn Shape>) -> Result<Self, ConfigError> {
        Self::with_factory(width, height, shape, Box::new(LivingCreatureFactory))
    }

    /// Build a field with a custom creature factory.
    pub fn with_factory(
        width: usize,
        height: usize,
        shape: Box<dyn Shape>,
        factory: Box<dyn CreatureFactory>,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        let cells = build_cells(width, height, shape.as_ref());
        Ok(Self {
            width,
            height,
            shape,
            factory,
            cells: RefCell::new(cells),
            last_affected: RefCell::new(None),
            events: Subject::new(),
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_in_bounds(&self, pos: CellPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// `true` if `pos` is out of bounds or masked out by the shape.
    #[must_use]
    pub fn is_excluded_cell(&self, pos: CellPos) -> bool {
        !self.is_in_bounds(pos) || self.shape.is_excluded(pos)
    }

    /// The single access gate: returns the grid index of a playable `pos`.
    pub fn verify_cell_pos(&self, pos: CellPos) -> Result<usize, FieldError> {
        if !self.is_in_bounds(pos) {
            return Err(FieldError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        if self.shape.is_excluded(pos) {
            return Err(FieldError::Excluded(pos));
        }
        Ok(pos.y * self.width + pos.x)
    }

    /// The creature in `pos`. Empty cells are an error.
    pub fn get_creature_by_cell(&self, pos: CellPos) -> Result<Creature, FieldError> {
        let index = self.verify_cell_pos(pos)?;
        self.cells.borrow()[index]
            .creature()
            .copied()
            .ok_or(FieldError::NoCreature(pos))
    }

    pub fn has_creature_in_cell(&self, pos: CellPos) -> Result<bool, FieldError> {
        let index = self.verify_cell_pos(pos)?;
        Ok(self.cells.borrow()[index].has_creature())
    }

    /// Place a new creature owned by `owner`, replacing any occupant.
    pub fn set_creature_in_cell(&self, pos: CellPos, owner: PlayerId) -> Result<(), FieldError> {
        let index = self.verify_cell_pos(pos)?;
        let creature = self.factory.create_creature(owner);
        self.cells.borrow_mut()[index].set_creature(creature);
        *self.last_affected.borrow_mut() = Some(pos);
        trace!(%pos, %owner, "creature set");
        self.events.notify(&FieldEvent::CreatureSet { pos, owner });
        Ok(())
    }

    /// Empty the cell at `pos`. Fires even if the cell was already empty.
    pub fn remove_creature_in_cell(&self, pos: CellPos) -> Result<(), FieldError> {
        let index = self.verify_cell_pos(pos)?;
        self.cells.borrow_mut()[index].remove_creature();
        *self.last_affected.borrow_mut() = Some(pos);
        trace!(%pos, "creature removed");
        self.events.notify(&FieldEvent::CreatureRemoved { pos });
        Ok(())
    }

    /// Living neighbor creatures of `pos`, grouped by owner.
    pub fn count_cell_neighbors_creatures(&self, pos: CellPos) -> Result<NeighborCounts, FieldError> {
        let index = self.verify_cell_pos(pos)?;
        let cells = self.cells.borrow();
        let mut counts = NeighborCounts::new();
        for neighbor in cells[index].neighbors() {
            let creature = cells[neighbor.y * self.width + neighbor.x].creature();
            if let Some(creature) = creature.filter(|c| c.is_alive()) {
                counts.add(creature.owner());
            }
        }
        Ok(counts)
    }

    /// Neighbor coordinates of `pos` as fixed at construction.
    pub fn neighbors(&self, pos: CellPos) -> Result<NeighborList, FieldError> {
        let index = self.verify_cell_pos(pos)?;
        Ok(NeighborList::from_slice(self.cells.borrow()[index].neighbors()))
    }

    /// Remove every creature. The grid is rebuilt with the same adjacency rule.
    pub fn clear(&self) {
        *self.cells.borrow_mut() = build_cells(self.width, self.height, self.shape.as_ref());
        *self.last_affected.borrow_mut() = None;
        debug!(width = self.width, height = self.height, "field cleared");
        self.events.notify(&FieldEvent::Cleared);
    }

    /// Coordinate touched by the last set/remove, `None` after construction or `clear`.
    #[must_use]
    pub fn last_affected_cell(&self) -> Option<CellPos> {
        *self.last_affected.borrow()
    }

    /// Subject the field publishes [`FieldEvent`]s through.
    #[must_use]
    pub fn events(&self) -> &Subject<FieldEvent> {
        &self.events
    }

    /// Every playable coordinate, row-major.
    pub fn playable_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| CellPos::new(x, y)))
            .filter(move |&pos| !self.shape.is_excluded(pos))
    }

    /// Every occupied cell with its owner, row-major.
    #[must_use]
    pub fn occupancy(&self) -> Vec<(CellPos, PlayerId)> {
        let cells = self.cells.borrow();
        cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let creature = cell.creature()?;
                let pos = CellPos::new(index % self.width, index / self.width);
                Some((pos, creature.owner()))
            })
            .collect()
    }
}

fn build_cells(width: usize, height: usize, shape: &dyn Shape) -> Vec<Cell> {
    let playable = |pos: CellPos| pos.x < width && pos.y < height && !shape.is_excluded(pos);

    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let pos = CellPos::new(x, y);
            if !playable(pos) {
                cells.push(Cell::default());
                continue;
            }
            let neighbors: NeighborList = pos.surrounding().filter(|&n| playable(n)).collect();
            cells.push(Cell::with_neighbors(neighbors));
        }
    }
    cells
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("shape", &self.shape)
            .field("occupied", &self.occupancy().len())
            .field("events", &self.events)
            .finish()
    }
}

/// One line per row: `#` excluded, `.` empty, owner index otherwise
/// (base 36, `*` past 35).
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells.borrow();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = CellPos::new(x, y);
                let glyph = if self.shape.is_excluded(pos) {
                    '#'
                } else {
                    match cells[y * self.width + x].creature() {
                        None => '.',
                        Some(c) => std::char::from_digit(u32::from(c.owner().0), 36).unwrap_or('*'),
                    }
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
