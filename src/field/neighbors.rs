//! Per-player tallies of a cell's living neighbors.

use smallvec::SmallVec;

use crate::core::PlayerId;

/// Living neighbor creatures of one cell, grouped by owner.
///
/// Entries keep the order in which owners were first seen; `leaders`
/// sorts by `PlayerId` so tie sets are stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    counts: SmallVec<[(PlayerId, u32); 4]>,
}

impl NeighborCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more neighbor for `player`.
    pub fn add(&mut self, player: PlayerId) {
        match self.counts.iter_mut().find(|(p, _)| *p == player) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((player, 1)),
        }
    }

    /// Neighbors owned by `player`.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> u32 {
        self.counts
            .iter()
            .find(|(p, _)| *p == player)
            .map_or(0, |&(_, count)| count)
    }

    /// Living neighbors over all players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Players sharing the largest contribution, sorted by id.
    #[must_use]
    pub fn leaders(&self) -> SmallVec<[PlayerId; 4]> {
        let Some(max) = self.counts.iter().map(|&(_, count)| count).max() else {
            return SmallVec::new();
        };
        let mut tied: SmallVec<[PlayerId; 4]> = self
            .counts
            .iter()
            .filter(|&&(_, count)| count == max)
            .map(|&(player, _)| player)
            .collect();
        tied.sort_unstable();
        tied
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.counts.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let mut counts = NeighborCounts::new();
        counts.add(PlayerId::new(1));
        counts.add(PlayerId::new(0));
        counts.add(PlayerId::new(1));

        assert_eq!(counts.get(PlayerId::new(1)), 2);
        assert_eq!(counts.get(PlayerId::new(0)), 1);
        assert_eq!(counts.get(PlayerId::new(5)), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_single_leader() {
        let mut counts = NeighborCounts::new();
        counts.add(PlayerId::new(0));
        counts.add(PlayerId::new(1));
        counts.add(PlayerId::new(1));
        assert_eq!(counts.leaders().as_slice(), &[PlayerId::new(1)]);
    }

    #[test]
    fn test_tied_leaders_sorted() {
        let mut counts = NeighborCounts::new();
        for id in [2, 0, 2, 0, 1] {
            counts.add(PlayerId::new(id));
        }
        assert_eq!(
            counts.leaders().as_slice(),
            &[PlayerId::new(0), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_empty_has_no_leaders() {
        let counts = NeighborCounts::new();
        assert!(counts.is_empty());
        assert!(counts.leaders().is_empty());
        assert_eq!(counts.total(), 0);
    }
}
