//! # life-arena
//!
//! Territorial, multi-player Game of Life.
//!
//! Players take turns seeding creatures inside their own region of a shared
//! board, then the board evolves by Conway's rule. Newborn creatures belong
//! to the player contributing the most neighbors. The last player with
//! creatures on the board wins the round; if nobody is left it is a draw.
//!
//! ## Design Principles
//!
//! 1. **Handles, not pointers**: players are an arena indexed by
//!    [`PlayerId`]; cells store an optional [`Creature`] carrying that id.
//!
//! 2. **Areas gate access**: every write goes through a lockable
//!    [`FieldArea`]. A player's area is unlocked only during their setup
//!    slice; the model judges through an area spanning the whole board.
//!
//! 3. **Typed events**: the field and the model publish [`FieldEvent`] and
//!    [`ModelEvent`] payloads through weakly-held [`Subject`]s. Views
//!    subscribe; the core never draws.
//!
//! 4. **Deterministic**: the only randomness (breaking ties over newborn
//!    ownership) comes from a seeded [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: coordinates, players, errors, RNG, configuration
//! - `field`: creatures, cells, shape masks, the field and its areas
//! - `events`: event codes, payloads, subject/observer
//! - `rules`: life rule, newborn attribution, round outcome
//! - `model`: the session state machine and its input collaborator

pub mod core;
pub mod events;
pub mod field;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, CellPos, ConfigError, FieldError, GameRng, GameRngState, LifeConfig, Player,
    PlayerId, PlayerMap, RoundConfig, ShapeConfig, TapOutcome,
};

pub use crate::field::{
    AreaFactory, Cell, Creature, CreatureFactory, ExcludedCells, Field, FieldArea,
    LivingCreatureFactory, NeighborCounts, Rectangle, Rhombus, Shape,
};

pub use crate::events::{Event, EventKind, FieldEvent, ModelEvent, Observer, Subject};

pub use crate::rules::{attribute_newborn, Conway, LifeRule, RoundOutcome};

pub use crate::model::{GameModel, InputEvent, ModelState, ScriptedInput, SetupTracker, UserInput};
