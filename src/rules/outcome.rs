//! What an action did, and how a run ends.

use serde::{Deserialize, Serialize};

use super::error::Rejection;
use crate::cards::Card;
use crate::combat::{Attack, Strike};

/// Result of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every card resolved with health to spare.
    Win,
    /// Health reached zero.
    Loss,
}

impl GameResult {
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Win
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win => write!(f, "No more cards and you are alive. You win!"),
            GameResult::Loss => write!(f, "You ran out of health."),
        }
    }
}

/// An accepted action's effect.
///
/// Health values are reported after the end-of-turn checks, so they never
/// drop below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A heart restored health.
    Healed { card: Card, health: i32 },
    /// A second heart was thrown away because nothing else was playable.
    HeartDiscarded { card: Card },
    /// A diamond became the weapon.
    Equipped { card: Card },
    /// A monster was fought.
    Fought {
        card: Card,
        /// Weapon rank at the time, 0 when unarmed.
        weapon: u8,
        /// Most recently defeated monster before this fight.
        previous: Option<u8>,
        attack: Attack,
        health: i32,
    },
    /// The room went to the bottom of the deck and a new one was dealt.
    RoomSkipped,
    /// The weapon and its stack were dropped.
    WeaponDiscarded { weapon: u8 },
    /// Discard was asked for while unarmed. Nothing changed.
    NoWeapon,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Event::Healed { card, health } => write!(f, "Played {}: healed to {}", card, health),
            Event::HeartDiscarded { card } => {
                write!(f, "Discarded {} since only hearts left", card)
            }
            Event::Equipped { card } => {
                write!(f, "Played {}: equipped weapon {}", card, card.rank())
            }
            Event::Fought {
                card,
                weapon,
                previous,
                attack,
                health,
            } => match (attack.strike, previous) {
                (Strike::FirstBlood, _) => write!(
                    f,
                    "Played {}: first attack with weapon {}, took {} damage -> health {}",
                    card, weapon, attack.damage, health
                ),
                (Strike::Parried, Some(on)) => write!(
                    f,
                    "Played {}: stacked {} on {}, no damage",
                    card, attack.monster, on
                ),
                (Strike::Overpowered, _) => write!(
                    f,
                    "Played {}: too high to stack, took {} damage -> health {}",
                    card, attack.damage, health
                ),
                _ => write!(
                    f,
                    "Played {}: took {} damage -> health {}",
                    card, attack.damage, health
                ),
            },
            Event::RoomSkipped => write!(f, "Room skipped. New room dealt."),
            Event::WeaponDiscarded { weapon } => write!(f, "Discarded weapon {}", weapon),
            Event::NoWeapon => write!(f, "No weapon to discard."),
        }
    }
}

/// What the caller learns after any mutating call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The effect, or why nothing happened.
    pub event: Result<Event, Rejection>,

    /// Message for the player's log.
    pub message: String,

    /// Set once the run has ended, including by this action.
    pub terminal: Option<GameResult>,
}

impl ActionOutcome {
    #[must_use]
    pub fn new(event: Result<Event, Rejection>, terminal: Option<GameResult>) -> Self {
        let message = match &event {
            Ok(event) => event.to_string(),
            Err(rejection) => rejection.to_string(),
        };
        Self {
            event,
            message,
            terminal,
        }
    }

    /// Whether the rules accepted the action.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.event.is_ok()
    }
}
