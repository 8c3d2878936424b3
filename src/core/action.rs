//! Player actions and the action log.
//!
//! There are only three things a player can do:
//! - Play a card from the room
//! - Skip the room (once per room)
//! - Discard the equipped weapon
//!
//! Every attempt, accepted or not, is logged as an `ActionRecord` so a front
//! end can show the running message log.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A player action.
///
/// ```
/// use scoundrel::cards::Card;
/// use scoundrel::core::Action;
///
/// let card = Card::try_from("10c").unwrap();
/// assert_eq!(Action::Play(card).to_string(), "play 10♣");
/// assert_eq!(Action::Skip.to_string(), "skip room");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Resolve a card from the room.
    Play(Card),
    /// Send the room to the bottom of the deck and deal a new one.
    Skip,
    /// Drop the equipped weapon and its stack.
    DiscardWeapon,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(card) => write!(f, "play {}", card),
            Action::Skip => write!(f, "skip room"),
            Action::DiscardWeapon => write!(f, "discard weapon"),
        }
    }
}

/// A logged action with the message it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the run's log, starting at 0.
    pub sequence: u32,

    /// The action attempted.
    pub action: Action,

    /// Whether the rules accepted it.
    pub accepted: bool,

    /// Message reported to the player. The action that ends the run adds
    /// the end-of-game line after a newline.
    pub message: String,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action, accepted: bool, message: impl Into<String>) -> Self {
        Self {
            sequence,
            action,
            accepted,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let card = Card::try_from("Qs").unwrap();
        assert_eq!(Action::Play(card).to_string(), "play Q♠");
        assert_eq!(Action::DiscardWeapon.to_string(), "discard weapon");
    }

    #[test]
    fn test_action_equality() {
        let a = Card::try_from("5h").unwrap();
        let b = Card::try_from("6h").unwrap();

        assert_eq!(Action::Play(a), Action::Play(a));
        assert_ne!(Action::Play(a), Action::Play(b));
        assert_ne!(Action::Skip, Action::DiscardWeapon);
    }

    #[test]
    fn test_action_record_serialization() {
        let card = Card::try_from("5h").unwrap();
        let record = ActionRecord::new(3, Action::Play(card), true, "Played 5♥: healed to 20");

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
