//! Event codes and typed event payloads.
//!
//! Subscriptions are keyed by [`EventKind`], a small integer code. What a
//! subscriber receives is the payload enum of the subject it listens to
//! ([`FieldEvent`] or [`ModelEvent`]), carrying everything needed to react
//! without going back to the source.

use serde::{Deserialize, Serialize};

use crate::core::{CellPos, PlayerId};

/// Event code used as the subscription key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum EventKind {
    /// Every creature was removed from the field.
    FieldCleared = 0,
    /// A creature was placed into a cell.
    CreatureSet = 1,
    /// A cell was emptied.
    CreatureRemoved = 2,
    /// A player is placing creatures.
    PlayerTurn = 3,
    /// The model waits for one user action.
    InputRequired = 4,
    /// One generation was applied to the board.
    GenerationComputed = 5,
    /// Exactly one player has creatures left.
    WinnerDetermined = 6,
    /// Nobody has creatures left.
    DrawDetermined = 7,
}

impl EventKind {
    /// The integer code.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({:?}={})", self, self.code())
    }
}

/// A payload that can be published through a [`Subject`](super::Subject).
pub trait Event {
    /// Code this payload is published under.
    fn kind(&self) -> EventKind;
}

/// Published by the field after every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldEvent {
    Cleared,
    CreatureSet { pos: CellPos, owner: PlayerId },
    CreatureRemoved { pos: CellPos },
}

impl FieldEvent {
    /// Cell touched by the event, if it concerns a single cell.
    #[must_use]
    pub fn pos(&self) -> Option<CellPos> {
        match self {
            FieldEvent::Cleared => None,
            FieldEvent::CreatureSet { pos, .. } | FieldEvent::CreatureRemoved { pos } => Some(*pos),
        }
    }
}

impl Event for FieldEvent {
    fn kind(&self) -> EventKind {
        match self {
            FieldEvent::Cleared => EventKind::FieldCleared,
            FieldEvent::CreatureSet { .. } => EventKind::CreatureSet,
            FieldEvent::CreatureRemoved { .. } => EventKind::CreatureRemoved,
        }
    }
}

/// Published by the game model on phase transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelEvent {
    PlayerTurn { player: PlayerId, remaining: u32 },
    InputRequired { player: PlayerId },
    GenerationComputed { remaining: u32 },
    WinnerDetermined { player: PlayerId },
    DrawDetermined,
}

impl Event for ModelEvent {
    fn kind(&self) -> EventKind {
        match self {
            ModelEvent::PlayerTurn { .. } => EventKind::PlayerTurn,
            ModelEvent::InputRequired { .. } => EventKind::InputRequired,
            ModelEvent::GenerationComputed { .. } => EventKind::GenerationComputed,
            ModelEvent::WinnerDetermined { .. } => EventKind::WinnerDetermined,
            ModelEvent::DrawDetermined => EventKind::DrawDetermined,
        }
    }
}
