//! Card values.
//!
//! ## Key Types
//!
//! - `Suit`: Clubs, Hearts, Spades, Diamonds
//! - `Color`: Black or Red, derived from the suit
//! - `CardKind`: Monster, Heal, or Weapon, derived from the suit
//! - `Card`: Immutable suit + rank pair
//!
//! Use `Card::dungeon_deck()` for the 44-card starting deck.

pub mod card;

pub use card::{Card, CardError, CardKind, Color, Suit};
