//! Core run types: state, actions, RNG, configuration.
//!
//! These are passive data holders. All rule decisions live in `rules`.

pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use rng::GameRng;
pub use config::{GameConfig, MAX_HEALTH, REFILL_DRAW, REFILL_THRESHOLD, ROOM_SIZE};
pub use action::{Action, ActionRecord};
pub use state::RunState;
