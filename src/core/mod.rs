//! Core types: coordinates, players, errors, RNG, configuration.
//!
//! Nothing here knows about the life rule; the field and the model build on
//! these types.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{BoardConfig, LifeConfig, RoundConfig, ShapeConfig};
pub use error::{ConfigError, FieldError};
pub use player::{Player, PlayerId, PlayerMap, TapOutcome};
pub use position::{CellPos, NEIGHBOR_OFFSETS};
pub use rng::{GameRng, GameRngState};
