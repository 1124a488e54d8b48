//! The input collaborator the model blocks on during setup.

use std::collections::VecDeque;

use crate::core::CellPos;

/// One user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the session.
    Close,
    /// Throw the board away and start again from the first round.
    Restart,
    /// Place or take back a creature at [`UserInput::last_coord_input`].
    SetCreature,
    /// Nothing actionable happened.
    Idle,
}

/// Source of user actions.
///
/// `read_input` blocks until one action is available. After a
/// [`InputEvent::SetCreature`], `last_coord_input` names the grid cell the
/// user tapped, or `None` if the tap did not land on the board.
pub trait UserInput {
    fn read_input(&mut self) -> InputEvent;

    fn last_coord_input(&self) -> Option<CellPos>;
}

/// Replays a fixed script of actions.
///
/// Reports [`InputEvent::Close`] forever once the script runs out.
///
/// ```
/// use life_arena::core::CellPos;
/// use life_arena::model::{InputEvent, ScriptedInput, UserInput};
///
/// let mut input = ScriptedInput::new().tap(CellPos::new(1, 2)).restart();
/// assert_eq!(input.read_input(), InputEvent::SetCreature);
/// assert_eq!(input.last_coord_input(), Some(CellPos::new(1, 2)));
/// assert_eq!(input.read_input(), InputEvent::Restart);
/// assert_eq!(input.read_input(), InputEvent::Close);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<(InputEvent, Option<CellPos>)>,
    last_coord: Option<CellPos>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a tap on `pos`.
    #[must_use]
    pub fn tap(mut self, pos: CellPos) -> Self {
        self.script.push_back((InputEvent::SetCreature, Some(pos)));
        self
    }

    /// Queue a tap on every position in order.
    #[must_use]
    pub fn taps(self, positions: impl IntoIterator<Item = CellPos>) -> Self {
        positions.into_iter().fold(self, Self::tap)
    }

    /// Queue a tap that missed the board.
    #[must_use]
    pub fn miss(mut self) -> Self {
        self.script.push_back((InputEvent::SetCreature, None));
        self
    }

    #[must_use]
    pub fn idle(mut self) -> Self {
        self.script.push_back((InputEvent::Idle, None));
        self
    }

    #[must_use]
    pub fn restart(mut self) -> Self {
        self.script.push_back((InputEvent::Restart, None));
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.script.push_back((InputEvent::Close, None));
        self
    }

    /// Actions not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl UserInput for ScriptedInput {
    fn read_input(&mut self) -> InputEvent {
        match self.script.pop_front() {
            Some((event, coord)) => {
                if event == InputEvent::SetCreature {
                    self.last_coord = coord;
                }
                event
            }
            None => InputEvent::Close,
        }
    }

    fn last_coord_input(&self) -> Option<CellPos> {
        self.last_coord
    }
}
