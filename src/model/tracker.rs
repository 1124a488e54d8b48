//! Counts down a player's placement budget from field events.

use std::cell::Cell;

use tracing::trace;

use crate::core::PlayerId;
use crate::events::{FieldEvent, Observer};

/// Setup bookkeeping shared between the model and the field's subject.
///
/// While active, every creature the acting player places takes one from
/// `remaining` and every creature removed gives one back. Inactive trackers
/// ignore all events, so generation updates never touch the budget.
#[derive(Debug, Default)]
pub struct SetupTracker {
    player: Cell<Option<PlayerId>>,
    remaining: Cell<u32>,
}

impl SetupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting for `player` with `budget` creatures to place.
    pub fn begin(&self, player: PlayerId, budget: u32) {
        self.player.set(Some(player));
        self.remaining.set(budget);
    }

    /// Stop counting. The remaining count is reset.
    pub fn finish(&self) {
        self.player.set(None);
        self.remaining.set(0);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.player.get().is_some()
    }

    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        self.player.get()
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining.get()
    }
}

impl Observer<FieldEvent> for SetupTracker {
    fn update(&self, event: &FieldEvent) {
        let Some(player) = self.player.get() else {
            return;
        };
        match *event {
            FieldEvent::CreatureSet { owner, .. } if owner == player => {
                self.remaining.set(self.remaining.get().saturating_sub(1));
            }
            FieldEvent::CreatureRemoved { .. } => {
                self.remaining.set(self.remaining.get() + 1);
            }
            _ => return,
        }
        trace!(%player, remaining = self.remaining.get(), "setup budget");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellPos;

    fn set(owner: u8) -> FieldEvent {
        FieldEvent::CreatureSet {
            pos: CellPos::new(0, 0),
            owner: PlayerId::new(owner),
        }
    }

    #[test]
    fn test_inactive_ignores_events() {
        let tracker = SetupTracker::new();
        tracker.update(&set(0));
        tracker.update(&FieldEvent::CreatureRemoved { pos: CellPos::new(0, 0) });
        assert_eq!(tracker.remaining(), 0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_toggles_remaining() {
        let tracker = SetupTracker::new();
        tracker.begin(PlayerId::new(1), 2);

        tracker.update(&set(1));
        assert_eq!(tracker.remaining(), 1);
        tracker.update(&FieldEvent::CreatureRemoved { pos: CellPos::new(0, 0) });
        assert_eq!(tracker.remaining(), 2);
        tracker.update(&set(0));
        assert_eq!(tracker.remaining(), 2);
        tracker.update(&FieldEvent::Cleared);
        assert_eq!(tracker.remaining(), 2);

        tracker.update(&set(1));
        tracker.update(&set(1));
        tracker.update(&set(1));
        assert_eq!(tracker.remaining(), 0);

        tracker.finish();
        assert_eq!(tracker.player(), None);
    }
}
