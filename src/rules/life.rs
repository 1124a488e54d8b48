//! Life rule, newborn ownership and round judgement.

use rustc_hash::FxHashSet;

use crate::core::{GameRng, PlayerId};
use crate::field::NeighborCounts;

/// Decides whether a cell holds a living creature next generation.
///
/// Implementations must be pure: the same inputs always give the same answer.
pub trait LifeRule: std::fmt::Debug {
    fn next_alive(&self, is_alive: bool, neighbor_total: u32) -> bool;
}

/// Conway's B3/S23: birth on exactly 3 neighbors, survival on 2 or 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Conway;

impl LifeRule for Conway {
    fn next_alive(&self, is_alive: bool, neighbor_total: u32) -> bool {
        neighbor_total == 3 || (is_alive && neighbor_total == 2)
    }
}

/// Owner of a creature born from `counts`.
///
/// The player with the most contributing neighbors wins the cell; a tie is
/// broken uniformly at random among the tied players. `None` if there are
/// no neighbors at all.
pub fn attribute_newborn(counts: &NeighborCounts, rng: &mut GameRng) -> Option<PlayerId> {
    let leaders = counts.leaders();
    match leaders.as_slice() {
        [] => None,
        [only] => Some(*only),
        tied => rng.choose(tied).copied(),
    }
}

/// Result of judging the board after a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Exactly one player has creatures left.
    Winner(PlayerId),
    /// No creatures left.
    Draw,
    /// Two or more players still have creatures.
    Continue,
}

impl RoundOutcome {
    /// Judge from the set of players with at least one living creature.
    #[must_use]
    pub fn from_survivors(survivors: &FxHashSet<PlayerId>) -> Self {
        let mut iter = survivors.iter();
        match (iter.next(), iter.next()) {
            (None, _) => RoundOutcome::Draw,
            (Some(&player), None) => RoundOutcome::Winner(player),
            _ => RoundOutcome::Continue,
        }
    }

    /// `true` for a winner or a draw.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, RoundOutcome::Continue)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, RoundOutcome::Winner(p) if *p == player)
    }
}
