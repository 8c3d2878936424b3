//! Run state: everything that changes during one game.
//!
//! ## RunState
//!
//! - Health and the per-room flags (heart played, room skipped)
//! - Deck, room, and discard pile (card locations)
//! - Weapon and defeated-monster stack
//! - Action log
//! - RNG
//!
//! `RunState` holds data and enforces only structural invariants. The rules
//! live in `rules::GameEngine`, which owns exactly one `RunState`.

use im::Vector;

use super::action::{Action, ActionRecord};
use super::config::{MAX_HEALTH, ROOM_SIZE};
use super::rng::GameRng;
use crate::cards::Card;
use crate::combat::CombatState;
use crate::zones::{Deck, Room};

/// Complete state of one run.
#[derive(Clone, Debug)]
pub struct RunState {
    /// Current health, within `0..=MAX_HEALTH` whenever the engine reports.
    pub health: i32,

    /// A heart has healed during this room.
    pub heart_played: bool,

    /// This room was dealt by a skip.
    pub skipped: bool,

    /// Undealt cards.
    pub deck: Deck,

    /// Selectable cards.
    pub room: Room,

    /// Weapon and stack.
    pub combat: CombatState,

    /// Resolved cards and cards cleared by the depletion rule.
    pub discard: Vec<Card>,

    /// Every attempted action, in order.
    pub history: Vector<ActionRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl RunState {
    /// Start a run: full health, unarmed, first room dealt from `deck`.
    ///
    /// The deck is dealt as given; shuffle it first for a random game.
    #[must_use]
    pub fn new(mut deck: Deck, rng: GameRng) -> Self {
        let (hand, cleared) = deck.deal(ROOM_SIZE);
        let mut room = Room::new();
        room.extend(hand);

        Self {
            health: MAX_HEALTH,
            heart_played: false,
            skipped: false,
            deck,
            room,
            combat: CombatState::new(),
            discard: cleared,
            history: Vector::new(),
            rng,
        }
    }

    /// No cards left to play anywhere.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.room.is_empty()
    }

    /// Start a fresh room-life: the heart and skip allowances come back.
    pub fn reset_room_flags(&mut self) {
        self.heart_played = false;
        self.skipped = false;
    }

    /// Every card still tracked by this run: deck, room, then discard pile.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.deck
            .cards()
            .iter()
            .chain(self.room.cards())
            .chain(&self.discard)
            .copied()
            .collect()
    }

    /// Append an action to the log.
    pub fn record(&mut self, action: Action, accepted: bool, message: impl Into<String>) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(sequence, action, accepted, message));
    }

    /// Copy the run with an independent RNG branch.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(names: &[&str]) -> Vec<Card> {
        names.iter().map(|s| Card::try_from(*s).unwrap()).collect()
    }

    #[test]
    fn test_new_deals_first_room() {
        let state = RunState::new(Deck::dungeon(), GameRng::new(42));

        assert_eq!(state.health, MAX_HEALTH);
        assert_eq!(state.room.len(), 4);
        assert_eq!(state.deck.len(), 40);
        assert!(!state.combat.is_armed());
        assert!(state.discard.is_empty());
        assert!(state.history.is_empty());
        assert!(!state.heart_played);
        assert!(!state.skipped);
    }

    #[test]
    fn test_new_with_thin_deck() {
        // 6 cards: 4 dealt, 2 left cannot fill a room
        let deck = Deck::from_cards(cards(&["2c", "3c", "4c", "5c", "6c", "7c"])).unwrap();
        let state = RunState::new(deck, GameRng::new(42));

        assert_eq!(state.room.cards(), cards(&["2c", "3c", "4c", "5c"]).as_slice());
        assert!(state.deck.is_empty());
        assert_eq!(state.discard, cards(&["6c", "7c"]));
    }

    #[test]
    fn test_all_cards_is_conserved() {
        let state = RunState::new(Deck::dungeon(), GameRng::new(42));
        let mut all = state.all_cards();
        all.sort();
        assert_eq!(all, Card::dungeon_deck());
    }

    #[test]
    fn test_is_exhausted() {
        let mut state = RunState::new(Deck::new(), GameRng::new(42));
        assert!(state.is_exhausted());

        state.room.extend(cards(&["2c"]));
        assert!(!state.is_exhausted());
    }

    #[test]
    fn test_record() {
        let mut state = RunState::new(Deck::dungeon(), GameRng::new(42));
        state.record(Action::Skip, true, "Room skipped. New room dealt.");
        state.record(Action::Skip, false, "already skipped");

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].sequence, 0);
        assert_eq!(state.history[1].sequence, 1);
        assert!(!state.history[1].accepted);
    }

    #[test]
    fn test_fork_copies_state() {
        let mut state = RunState::new(Deck::dungeon(), GameRng::new(42));
        state.health = 7;
        state.record(Action::DiscardWeapon, true, "No weapon to discard.");

        let forked = state.fork();

        assert_eq!(forked.health, 7);
        assert_eq!(forked.room, state.room);
        assert_eq!(forked.deck, state.deck);
        assert_eq!(forked.history, state.history);
        assert_ne!(forked.rng.seed(), state.rng.seed());
    }
}
