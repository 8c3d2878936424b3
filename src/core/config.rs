//! Rule constants and game configuration.
//!
//! The rules themselves are fixed; `GameConfig` only chooses where the
//! randomness comes from and, optionally, a scripted deck order.

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Health at the start of a run and the cap for healing.
pub const MAX_HEALTH: i32 = 20;

/// Cards dealt into a fresh room. Also the smallest deck that can still
/// guarantee a full room; anything thinner is discarded.
pub const ROOM_SIZE: usize = 4;

/// Room size at which the room is topped back up.
pub const REFILL_THRESHOLD: usize = 1;

/// Cards drawn when the room is topped back up.
pub const REFILL_DRAW: usize = ROOM_SIZE - REFILL_THRESHOLD;

/// Configuration for a new run.
///
/// ```
/// use scoundrel::cards::{Card, Suit};
/// use scoundrel::core::GameConfig;
///
/// let config = GameConfig::new(42);
/// assert_eq!(config.seed, 42);
/// assert!(config.deck.is_none());
///
/// let scripted = GameConfig::new(42).with_deck(Card::dungeon_deck());
/// assert_eq!(scripted.deck.map(|d| d.len()), Some(44));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for every shuffle in the run.
    pub seed: u64,

    /// Undealt deck order, top first. `None` deals a shuffled dungeon deck.
    pub deck: Option<Vec<Card>>,
}

impl GameConfig {
    /// Create a configuration with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed, deck: None }
    }

    /// Create a configuration seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }

    /// Deal from `cards` in the given order instead of a shuffled deck.
    ///
    /// The seed still drives shuffles when a room is skipped.
    #[must_use]
    pub fn with_deck(mut self, cards: Vec<Card>) -> Self {
        self.deck = Some(cards);
        self
    }
}
