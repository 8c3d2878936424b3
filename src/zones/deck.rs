//! The undealt deck.
//!
//! Cards are dealt from the front (top) and returned to the back (bottom).
//! Once a deal leaves fewer than `ROOM_SIZE` cards behind, the remainder is
//! cleared: a deck that cannot fill a room is treated as exhausted.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::Card;
use crate::core::config::ROOM_SIZE;
use crate::core::rng::GameRng;

/// Errors raised when building a deck from a card list.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("card {0} appears more than once")]
    Duplicate(Card),

    #[error("a scripted deck needs at least one card")]
    Empty,
}

/// Cards dealt in one go. Never more than a room's worth.
pub type Hand = SmallVec<[Card; ROOM_SIZE]>;

/// Ordered sequence of undealt cards, top first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full 44-card dungeon deck, unshuffled.
    #[must_use]
    pub fn dungeon() -> Self {
        Self {
            cards: Card::dungeon_deck(),
        }
    }

    /// Build a deck from cards in top-to-bottom order.
    ///
    /// Fails if any card appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = FxHashSet::default();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(DeckError::Duplicate(card));
            }
        }
        Ok(Self { cards })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in top-to-bottom order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Shuffle the whole deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove up to `n` cards from the top.
    ///
    /// Returns fewer than `n` if the deck runs out.
    pub fn draw(&mut self, n: usize) -> Hand {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Put cards on the bottom, in the order given.
    pub fn put_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Clear the deck if it can no longer fill a room.
    ///
    /// Returns the cleared cards (empty if the deck was kept).
    pub fn deplete_if_thin(&mut self) -> Vec<Card> {
        if self.cards.len() < ROOM_SIZE {
            std::mem::take(&mut self.cards)
        } else {
            Vec::new()
        }
    }

    /// Draw up to `n` cards, then apply the depletion rule.
    ///
    /// Returns the drawn cards and whatever the depletion rule cleared.
    pub fn deal(&mut self, n: usize) -> (Hand, Vec<Card>) {
        let hand = self.draw(n);
        let cleared = self.deplete_if_thin();
        log::trace!(
            "dealt {} card(s), {} cleared, {} left in deck",
            hand.len(),
            cleared.len(),
            self.cards.len()
        );
        (hand, cleared)
    }
}
