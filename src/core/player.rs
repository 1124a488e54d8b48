//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. Ids are handed out
//! in roster order and never reused within a process.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! The roster entry: id, display name and the player's private
//! [`FieldArea`](crate::field::FieldArea).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::{debug, warn};

use super::position::CellPos;
use crate::field::FieldArea;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use life_arena::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players.len(), 3);
    /// assert_eq!(players[2], PlayerId::new(2));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use life_arena::core::{PlayerId, PlayerMap};
///
/// let mut placed: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// placed[PlayerId::new(1)] += 3;
/// assert_eq!(placed[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// What a tap on the board did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// A new creature owned by the tapping player was placed.
    Placed,
    /// The tapping player's own creature was taken back.
    Removed,
    /// The cell is not available to this player, or holds somebody else's creature.
    Rejected,
}

/// A participant: stable id, display name and a private board area.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    area: Option<FieldArea>,
}

impl Player {
    /// Create a player without an area. The model assigns one at setup.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            area: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assign (or replace) the player's area.
    pub fn set_field_area(&mut self, area: FieldArea) {
        self.area = Some(area);
    }

    #[must_use]
    pub fn field_area(&self) -> Option<&FieldArea> {
        self.area.as_ref()
    }

    pub fn field_area_mut(&mut self) -> Option<&mut FieldArea> {
        self.area.as_mut()
    }

    /// Toggle a creature at `pos` through the player's area.
    ///
    /// Never errors: anything the area would refuse comes back as
    /// [`TapOutcome::Rejected`].
    pub fn tap_on_creature(&self, pos: CellPos) -> TapOutcome {
        let Some(area) = &self.area else {
            warn!(player = %self.id, %pos, "tap without an assigned area");
            return TapOutcome::Rejected;
        };
        if !area.is_cell_available(pos) {
            debug!(player = %self.id, %pos, "tap outside the available area");
            return TapOutcome::Rejected;
        }

        match area.get_creature_by_cell(pos) {
            Ok(creature) if creature.owner() == self.id => {
                match area.remove_creature_in_cell(pos) {
                    Ok(()) => TapOutcome::Removed,
                    Err(_) => TapOutcome::Rejected,
                }
            }
            Ok(_) => TapOutcome::Rejected,
            Err(_) => match area.set_creature_in_cell(pos, self.id) {
                Ok(()) => TapOutcome::Placed,
                Err(_) => TapOutcome::Rejected,
            },
        }
    }
}
