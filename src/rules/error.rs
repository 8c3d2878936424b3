//! Rejected actions.
//!
//! A rejection leaves the run untouched. The player simply picks another
//! action.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;

/// Why an action was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("The game is over")]
    GameOver,

    #[error("{0} is not in the room")]
    NotInRoom(Card),

    #[error("Played {0}: already healed this room, card not used")]
    HeartAlreadyPlayed(Card),

    #[error("Played {card}: already have weapon {weapon}, card not used")]
    WeaponEquipped { card: Card, weapon: u8 },

    #[error("Room already skipped, clear it before skipping again")]
    AlreadySkipped,
}
