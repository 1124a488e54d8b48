//! Creatures and the factory the field builds them with.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A creature: liveness plus the id of the owning player.
///
/// There is no creature-level identity beyond the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Creature {
    alive: bool,
    owner: PlayerId,
}

impl Creature {
    /// A living creature owned by `owner`.
    #[must_use]
    pub const fn new(owner: PlayerId) -> Self {
        Self { alive: true, owner }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }
}

/// Builds the creatures placed into the field.
pub trait CreatureFactory: std::fmt::Debug {
    fn create_creature(&self, owner: PlayerId) -> Creature;
}

/// Default factory: living creatures.
#[derive(Clone, Copy, Debug, Default)]
pub struct LivingCreatureFactory;

impl CreatureFactory for LivingCreatureFactory {
    fn create_creature(&self, owner: PlayerId) -> Creature {
        Creature::new(owner)
    }
}
