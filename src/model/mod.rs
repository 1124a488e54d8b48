//! The game model and its input collaborator.
//!
//! - [`GameModel`]: setup rounds, generation computing, win/draw detection
//! - [`ModelState`]: observable phase of the session
//! - [`UserInput`] / [`InputEvent`]: what the model blocks on during setup
//! - [`ScriptedInput`]: replayable input for tests and headless drivers
//! - [`SetupTracker`]: placement budget kept in step with field events

mod game;
mod input;
mod state;
mod tracker;

pub use game::GameModel;
pub use input::{InputEvent, ScriptedInput, UserInput};
pub use state::ModelState;
pub use tracker::SetupTracker;

pub use crate::rules::RoundOutcome;
