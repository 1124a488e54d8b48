//! Cellular-automaton rules.
//!
//! - [`LifeRule`]: liveness of a cell in the next generation
//! - [`attribute_newborn`]: which player owns a newborn creature
//! - [`RoundOutcome`]: what the surviving players mean for the round
//!
//! The model applies these; nothing here touches the field.

pub mod life;

pub use life::{attribute_newborn, Conway, LifeRule, RoundOutcome};
