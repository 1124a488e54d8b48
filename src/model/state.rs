use crate::core::{CellPos, PlayerId};
use crate::rules::RoundOutcome;

/// Where the model is in its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelState {
    /// About to hand the board to the given player.
    AwaitingSetup(PlayerId),
    /// `player` is placing creatures; `remaining` are still to place.
    SetupInProgress { player: PlayerId, remaining: u32 },
    /// Generations are being computed.
    Computing { generations_remaining: u32 },
    /// The round ended with a winner or a draw.
    RoundOver(RoundOutcome),
    /// Waiting for the user to restart or close.
    AwaitingUserDecision,
    /// Terminal.
    Closed,
}

impl ModelState {
    #[must_use]
    pub fn is_setup(&self) -> bool {
        matches!(self, ModelState::AwaitingSetup(_) | ModelState::SetupInProgress { .. })
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, ModelState::Closed)
    }
}

/// A pending change computed from the current generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AsideOp {
    Spawn { pos: CellPos, owner: PlayerId },
    Clear { pos: CellPos },
}
