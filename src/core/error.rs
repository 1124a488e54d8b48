//! Error types.
//!
//! `FieldError` is raised at the point of a forbidden cell access and the
//! attempted operation has no effect. `ConfigError` rejects construction
//! parameters before any field or model exists.

use thiserror::Error;

use super::player::PlayerId;
use super::position::CellPos;

/// Forbidden access to a cell of the field, directly or through an area.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The coordinate lies outside the board rectangle.
    #[error("cell {pos} is outside the {width}x{height} field")]
    OutOfBounds {
        pos: CellPos,
        width: usize,
        height: usize,
    },

    /// The coordinate is masked out by the field shape.
    #[error("cell {0} is excluded by the field shape")]
    Excluded(CellPos),

    /// The coordinate lies outside the area rectangle.
    #[error("cell {pos} is outside the area {upper_left}..={lower_right}")]
    OutsideArea {
        pos: CellPos,
        upper_left: CellPos,
        lower_right: CellPos,
    },

    /// The area is locked.
    #[error("cell {0} belongs to a locked area")]
    Locked(CellPos),

    /// The cell holds no creature.
    #[error("no creature in cell {0}")]
    NoCreature(CellPos),
}

/// Invalid construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    #[error("area corner {0} lies outside the board")]
    CornerOutOfBounds(CellPos),

    #[error("area corners are inverted: {upper_left} is not above-left of {lower_right}")]
    InvertedArea {
        upper_left: CellPos,
        lower_right: CellPos,
    },

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("{0} is seated twice")]
    DuplicatePlayer(PlayerId),

    #[error("{id} is out of range for a roster of {players}")]
    PlayerOutOfRange { id: PlayerId, players: usize },

    #[error("the area of {0} belongs to another field")]
    ForeignArea(PlayerId),

    #[error("cannot split {columns} columns into {strips} strips")]
    TooManyStrips { columns: usize, strips: usize },

    #[error("{0} must be greater than zero")]
    ZeroBudget(&'static str),
}
