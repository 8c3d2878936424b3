//! Rules: how cards move and how each one changes the run.
//!
//! `GameEngine` is the single entry point for a presentation layer:
//! - Queries: room, health, weapon, stack, whether skip/discard are allowed
//! - Actions: play a card, skip the room, discard the weapon
//!
//! Refused actions come back as `Rejection` values inside an
//! `ActionOutcome`; nothing in this module panics on bad input.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::GameEngine;
pub use error::Rejection;
pub use outcome::{ActionOutcome, Event, GameResult};
