//! Card locations: the undealt deck and the face-up room.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered undealt cards with shuffle, draw, and the depletion rule
//! - `Room`: The up-to-four cards the player can choose from

pub mod deck;
pub mod room;

pub use deck::{Deck, DeckError, Hand};
pub use room::Room;
