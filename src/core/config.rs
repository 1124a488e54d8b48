//! Session configuration.
//!
//! The wiring layer owns the values; the engine only defines their shape:
//! - `BoardConfig`: board size and shape mask
//! - `RoundConfig`: creature budgets and generations per round
//! - `LifeConfig`: everything above plus the roster and the RNG seed
//!
//! All types are `serde` values so a front end can load them from whatever
//! format it likes.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::position::CellPos;
use crate::field::{ExcludedCells, Rectangle, Rhombus, Shape};

/// Which cells of the board rectangle are playable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeConfig {
    /// Every cell is playable.
    Rectangle,
    /// The rhombus inscribed in the board rectangle.
    Rhombus,
    /// Every cell except the listed ones.
    Excluded { cells: Vec<CellPos> },
}

impl ShapeConfig {
    /// Build the shape mask for a `width` x `height` board.
    #[must_use]
    pub fn build(&self, width: usize, height: usize) -> Box<dyn Shape> {
        match self {
            ShapeConfig::Rectangle => Box::new(Rectangle),
            ShapeConfig::Rhombus => Box::new(Rhombus::inscribed(width, height)),
            ShapeConfig::Excluded { cells } => {
                Box::new(cells.iter().copied().collect::<ExcludedCells>())
            }
        }
    }
}

/// Board geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub shape: ShapeConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            shape: ShapeConfig::Rhombus,
        }
    }
}

/// Per-round budgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Creatures each player places in the first round (`K`).
    pub first_round_creatures: u32,
    /// Creatures each player places in every later round (`N`).
    pub round_creatures: u32,
    /// Generations computed per round (`T`).
    pub generations_per_round: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            first_round_creatures: 10,
            round_creatures: 10,
            generations_per_round: 10,
        }
    }
}

impl RoundConfig {
    /// Creature budget for the given 0-based round.
    #[must_use]
    pub fn creatures_for_round(&self, round: u32) -> u32 {
        if round == 0 {
            self.first_round_creatures
        } else {
            self.round_creatures
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_round_creatures == 0 {
            return Err(ConfigError::ZeroBudget("first_round_creatures"));
        }
        if self.round_creatures == 0 {
            return Err(ConfigError::ZeroBudget("round_creatures"));
        }
        if self.generations_per_round == 0 {
            return Err(ConfigError::ZeroBudget("generations_per_round"));
        }
        Ok(())
    }
}

/// Complete session configuration. Omitted sections take their defaults.
///
/// ```
/// use life_arena::core::LifeConfig;
///
/// let config = LifeConfig::default()
///     .with_players(["Red", "Blue", "Green"])
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.players.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub board: BoardConfig,
    pub rounds: RoundConfig,
    /// Display names, in seating order. Ids follow this order.
    pub players: Vec<String>,
    /// Seed for the ownership tie-break.
    pub seed: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            rounds: RoundConfig::default(),
            players: vec!["Player 0".to_string(), "Player 1".to_string()],
            seed: 42,
        }
    }
}

impl LifeConfig {
    #[must_use]
    pub fn with_board(mut self, width: usize, height: usize, shape: ShapeConfig) -> Self {
        self.board = BoardConfig { width, height, shape };
        self
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: RoundConfig) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.players = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every parameter the model relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 || self.board.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.board.width,
                height: self.board.height,
            });
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.players.len()));
        }
        if self.players.len() > self.board.width {
            return Err(ConfigError::TooManyStrips {
                columns: self.board.width,
                strips: self.players.len(),
            });
        }
        self.rounds.validate()
    }
}
