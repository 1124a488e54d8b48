//! A single board cell.

use smallvec::SmallVec;

use super::creature::Creature;
use crate::core::CellPos;

/// Neighbor coordinates of one cell. Never more than eight.
pub type NeighborList = SmallVec<[CellPos; 8]>;

/// An optional creature slot plus the cell's precomputed neighbors.
///
/// The neighbor list is fixed when the field is built and only holds
/// in-bounds, playable coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    creature: Option<Creature>,
    neighbors: NeighborList,
}

impl Cell {
    pub(crate) fn with_neighbors(neighbors: NeighborList) -> Self {
        Self {
            creature: None,
            neighbors,
        }
    }

    #[must_use]
    pub fn creature(&self) -> Option<&Creature> {
        self.creature.as_ref()
    }

    #[must_use]
    pub fn has_creature(&self) -> bool {
        self.creature.is_some()
    }

    /// Put a creature in the cell, returning the previous occupant.
    pub fn set_creature(&mut self, creature: Creature) -> Option<Creature> {
        self.creature.replace(creature)
    }

    /// Empty the cell, returning the previous occupant.
    pub fn remove_creature(&mut self) -> Option<Creature> {
        self.creature.take()
    }

    #[must_use]
    pub fn neighbors(&self) -> &[CellPos] {
        &self.neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use smallvec::smallvec;

    #[test]
    fn test_set_replaces_occupant() {
        let mut cell = Cell::default();
        assert!(!cell.has_creature());

        assert_eq!(cell.set_creature(Creature::new(PlayerId::new(0))), None);
        let previous = cell.set_creature(Creature::new(PlayerId::new(1)));
        assert_eq!(previous.map(|c| c.owner()), Some(PlayerId::new(0)));
        assert_eq!(cell.creature().map(|c| c.owner()), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_remove_empties_cell() {
        let mut cell = Cell::with_neighbors(smallvec![CellPos::new(0, 1)]);
        cell.set_creature(Creature::new(PlayerId::new(0)));
        assert!(cell.remove_creature().is_some());
        assert!(cell.remove_creature().is_none());
        assert_eq!(cell.neighbors(), &[CellPos::new(0, 1)]);
    }
}
