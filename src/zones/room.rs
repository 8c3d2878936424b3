//! The room: up to four face-up cards the player chooses from.
//!
//! A room is a small ordered set keyed by card identity. Order only matters
//! for display.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::ROOM_SIZE;
use crate::zones::deck::Hand;

/// Currently selectable cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    cards: SmallVec<[Card; ROOM_SIZE]>,
}

impl Room {
    /// Create an empty room.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Whether any card other than a heal is on offer.
    #[must_use]
    pub fn has_non_heal(&self) -> bool {
        self.cards.iter().any(|c| !c.is_heal())
    }

    /// Add cards to the end of the room.
    ///
    /// Panics if the room would exceed `ROOM_SIZE` or a card is already
    /// present.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            if self.cards.contains(&card) {
                panic!("Card {} already in room", card);
            }
            if self.cards.len() == ROOM_SIZE {
                panic!("Room already holds {} cards", ROOM_SIZE);
            }
            self.cards.push(card);
        }
    }

    /// Remove a card. Returns true if it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    /// Empty the room, returning its cards in display order.
    pub fn take_all(&mut self) -> Hand {
        std::mem::take(&mut self.cards)
    }
}
