//! The rules engine.
//!
//! `GameEngine` owns one `RunState` and is the only thing that mutates it.
//! Each call runs to completion, including refills and the end-of-game
//! check, before its `ActionOutcome` is returned.
//!
//! ## Turn structure
//!
//! 1. Validate: game still running, card in the room
//! 2. Resolve by suit: heal, equip, or fight
//! 3. Move the card to the discard pile
//! 4. Down to one card: reset the room flags and deal three more
//! 5. Report, with the game result if the run just ended

use im::Vector;

use super::error::Rejection;
use super::outcome::{ActionOutcome, Event, GameResult};
use crate::cards::{Card, CardKind};
use crate::core::config::{GameConfig, MAX_HEALTH, REFILL_DRAW, REFILL_THRESHOLD, ROOM_SIZE};
use crate::core::{Action, ActionRecord, GameRng, RunState};
use crate::zones::{Deck, DeckError};

/// Drives a single run.
///
/// ## Example
///
/// ```
/// use scoundrel::rules::GameEngine;
///
/// let mut engine = GameEngine::with_seed(42);
/// assert_eq!(engine.health(), 20);
/// assert_eq!(engine.room().len(), 4);
///
/// let card = engine.room()[0];
/// let outcome = engine.play_card(card);
/// println!("{}", outcome.message);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: RunState,
}

impl GameEngine {
    /// Start a run from a configuration.
    ///
    /// Fails if a scripted deck is empty or holds duplicate cards.
    pub fn new_game(config: GameConfig) -> Result<Self, DeckError> {
        let mut rng = GameRng::new(config.seed);
        let deck = match config.deck {
            Some(cards) if cards.is_empty() => return Err(DeckError::Empty),
            Some(cards) => Deck::from_cards(cards)?,
            None => {
                let mut deck = Deck::dungeon();
                deck.shuffle(&mut rng);
                deck
            }
        };
        log::debug!("new run, seed {}, {} cards", config.seed, deck.len());
        Ok(Self::from_state(RunState::new(deck, rng)))
    }

    /// Start a run with a shuffled dungeon deck.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::dungeon();
        deck.shuffle(&mut rng);
        Self::from_state(RunState::new(deck, rng))
    }

    /// Start a run seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_seed(GameRng::from_entropy().seed())
    }

    /// Drive an existing run.
    #[must_use]
    pub fn from_state(state: RunState) -> Self {
        Self { state }
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Selectable cards, in display order.
    #[must_use]
    pub fn room(&self) -> &[Card] {
        self.state.room.cards()
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.state.health
    }

    /// Weapon rank, 0 when unarmed.
    #[must_use]
    pub fn weapon(&self) -> u8 {
        self.state.combat.weapon()
    }

    /// Monsters defeated by the current weapon, most recent first.
    #[must_use]
    pub fn stack(&self) -> &[u8] {
        self.state.combat.stack()
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.state.deck.len()
    }

    /// Resolved cards and cards cleared from a thin deck.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.state.discard
    }

    /// Every attempted action with its message.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.history
    }

    /// How the run ended, or `None` while it continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state.health < 1 {
            Some(GameResult::Loss)
        } else if self.state.is_exhausted() {
            Some(GameResult::Win)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    /// Whether `skip_room` would be accepted.
    #[must_use]
    pub fn is_skip_allowed(&self) -> bool {
        !self.is_game_over() && !self.state.skipped
    }

    /// Whether `discard_weapon` would be accepted.
    #[must_use]
    pub fn is_discard_allowed(&self) -> bool {
        !self.is_game_over()
    }

    /// Actions that would be accepted and change the run.
    ///
    /// Discarding while unarmed is accepted but does nothing, so it is not
    /// listed.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_game_over() {
            return Vec::new();
        }

        let mut actions: Vec<Action> = self
            .room()
            .iter()
            .filter(|card| self.can_play(**card))
            .map(|&card| Action::Play(card))
            .collect();

        if self.is_skip_allowed() {
            actions.push(Action::Skip);
        }
        if self.state.combat.is_armed() {
            actions.push(Action::DiscardWeapon);
        }

        actions
    }

    fn can_play(&self, card: Card) -> bool {
        match card.kind() {
            CardKind::Monster => true,
            CardKind::Heal => !self.state.heart_played || !self.state.room.has_non_heal(),
            CardKind::Weapon => !self.state.combat.is_armed(),
        }
    }

    // === Actions ===

    /// Dispatch an action.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::Play(card) => self.play_card(card),
            Action::Skip => self.skip_room(),
            Action::DiscardWeapon => self.discard_weapon(),
        }
    }

    /// Resolve a card from the room.
    pub fn play_card(&mut self, card: Card) -> ActionOutcome {
        let event = self.try_play(card);
        self.finish(Action::Play(card), event)
    }

    /// Send the room to the bottom of the deck and deal a new one.
    ///
    /// Allowed once per room.
    pub fn skip_room(&mut self) -> ActionOutcome {
        let event = self.try_skip();
        self.finish(Action::Skip, event)
    }

    /// Drop the weapon and its stack.
    pub fn discard_weapon(&mut self) -> ActionOutcome {
        let event = self.try_discard();
        self.finish(Action::DiscardWeapon, event)
    }

    /// Copy the run for lookahead, with an independent RNG branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            state: self.state.fork(),
        }
    }

    fn ensure_running(&self) -> Result<(), Rejection> {
        match self.result() {
            Some(_) => Err(Rejection::GameOver),
            None => Ok(()),
        }
    }

    fn try_play(&mut self, card: Card) -> Result<Event, Rejection> {
        self.ensure_running()?;
        if !self.state.room.contains(card) {
            return Err(Rejection::NotInRoom(card));
        }

        let event = match card.kind() {
            CardKind::Heal => self.heal(card)?,
            CardKind::Weapon => self.equip(card)?,
            CardKind::Monster => self.fight(card),
        };

        self.consume(card);
        Ok(event)
    }

    fn heal(&mut self, card: Card) -> Result<Event, Rejection> {
        if !self.state.heart_played {
            self.state.health = (self.state.health + i32::from(card.rank())).min(MAX_HEALTH);
            self.state.heart_played = true;
            Ok(Event::Healed {
                card,
                health: self.state.health,
            })
        } else if !self.state.room.has_non_heal() {
            Ok(Event::HeartDiscarded { card })
        } else {
            Err(Rejection::HeartAlreadyPlayed(card))
        }
    }

    fn equip(&mut self, card: Card) -> Result<Event, Rejection> {
        self.state
            .combat
            .equip(card.rank())
            .map_err(|weapon| Rejection::WeaponEquipped { card, weapon })?;
        Ok(Event::Equipped { card })
    }

    fn fight(&mut self, card: Card) -> Event {
        let weapon = self.state.combat.weapon();
        let previous = self.state.combat.last_defeated();
        let attack = self.state.combat.resolve_attack(card.rank());

        // Health bottoms out at zero; zero ends the run.
        self.state.health = (self.state.health - i32::from(attack.damage)).max(0);

        Event::Fought {
            card,
            weapon,
            previous,
            attack,
            health: self.state.health,
        }
    }

    /// Move a resolved card out of the room and top the room up.
    fn consume(&mut self, card: Card) {
        self.state.room.remove(card);
        self.state.discard.push(card);

        if self.state.room.len() == REFILL_THRESHOLD {
            self.state.reset_room_flags();
            let (hand, cleared) = self.state.deck.deal(REFILL_DRAW);
            self.state.room.extend(hand);
            self.state.discard.extend(cleared);
        }
    }

    fn try_skip(&mut self) -> Result<Event, Rejection> {
        self.ensure_running()?;
        if self.state.skipped {
            return Err(Rejection::AlreadySkipped);
        }

        let mut returned = self.state.room.take_all();
        self.state.rng.shuffle(&mut returned);
        self.state.deck.put_bottom(returned);

        let (hand, cleared) = self.state.deck.deal(ROOM_SIZE);
        self.state.room.extend(hand);
        self.state.discard.extend(cleared);
        self.state.skipped = true;

        Ok(Event::RoomSkipped)
    }

    fn try_discard(&mut self) -> Result<Event, Rejection> {
        self.ensure_running()?;
        Ok(match self.state.combat.discard() {
            Some(weapon) => Event::WeaponDiscarded { weapon },
            None => Event::NoWeapon,
        })
    }

    fn finish(&mut self, action: Action, event: Result<Event, Rejection>) -> ActionOutcome {
        let ended_now = event.is_ok() && self.is_game_over();
        let outcome = ActionOutcome::new(event, self.result());

        if outcome.accepted() {
            log::debug!("{}", outcome.message);
        } else {
            log::debug!("rejected {}: {}", action, outcome.message);
        }
        // The action that ends the run also logs the end-of-game line.
        let mut logged = outcome.message.clone();
        if let (true, Some(result)) = (ended_now, outcome.terminal) {
            log::info!("{} (health {})", result, self.state.health);
            logged = format!("{}\n{}", logged, result);
        }

        self.state.record(action, outcome.accepted(), logged);
        outcome
    }
}
