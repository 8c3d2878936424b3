//! # scoundrel
//!
//! Rules engine for Scoundrel, a single-player dungeon crawl played with a
//! 44-card deck.
//!
//! ## The Game
//!
//! Four cards are dealt face up as a room. Each card is resolved by suit:
//!
//! - **Clubs / Spades** are monsters and hit for their rank
//! - **Hearts** heal for their rank, once per room, up to 20 health
//! - **Diamonds** are weapons; a weapon keeps blocking monsters for free as
//!   long as each one is weaker than the last it defeated
//!
//! When one card is left the room is topped back up from the deck. A room
//! may be skipped once, sending it to the bottom of the deck. The run is
//! won by resolving every card and lost at zero health.
//!
//! ## Design Principles
//!
//! 1. **One owner**: A `GameEngine` owns its `RunState`; all mutation goes
//!    through it and each call fully settles before returning.
//!
//! 2. **Rejections are values**: Illegal moves come back as `Rejection`s in
//!    an `ActionOutcome`. Nothing panics on player input.
//!
//! 3. **Deterministic**: Every shuffle comes from a seeded `GameRng`, so a
//!    seed and an action list replay a run exactly.
//!
//! ## Modules
//!
//! - `core`: Run state, actions, RNG, configuration
//! - `cards`: Card values and the dungeon deck
//! - `zones`: Deck and room
//! - `combat`: Weapon and defeated-monster stack
//! - `rules`: The engine that ties them together

pub mod core;
pub mod cards;
pub mod zones;
pub mod combat;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, RunState,
    MAX_HEALTH, ROOM_SIZE,
};

pub use crate::cards::{Card, CardError, CardKind, Color, Suit};

pub use crate::zones::{Deck, DeckError, Room};

pub use crate::combat::{Attack, CombatState, Strike};

pub use crate::rules::{ActionOutcome, Event, GameEngine, GameResult, Rejection};
