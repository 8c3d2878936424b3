//! Card values: suit, rank, and the roles they play in a dungeon.
//!
//! A `Card` is an immutable suit/rank pair. The suit decides what the card
//! does when played from the room:
//! - Clubs and Spades are monsters (attack for their rank)
//! - Hearts heal for their rank
//! - Diamonds are weapons worth their rank
//!
//! Red suits carry no face cards or aces, which leaves 44 cards in play.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a card from raw parts or text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rank {0} is outside 2..=14")]
    RankOutOfRange(u8),

    #[error("{suit:?} has no card of rank {rank}")]
    NoRedFace { suit: Suit, rank: u8 },

    #[error("cannot parse card from {0:?}")]
    Parse(String),
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Role a card of this suit plays when resolved.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Suit::Clubs | Suit::Spades => CardKind::Monster,
            Suit::Hearts => CardKind::Heal,
            Suit::Diamonds => CardKind::Weapon,
        }
    }

    /// Highest rank this suit carries in a dungeon deck.
    #[must_use]
    pub const fn max_rank(self) -> u8 {
        match self.color() {
            Color::Black => Card::MAX_RANK,
            Color::Red => Card::MAX_RED_RANK,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
        }
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::Clubs),
            "h" | "♥" => Ok(Suit::Hearts),
            "s" | "♠" => Ok(Suit::Spades),
            "d" | "♦" => Ok(Suit::Diamonds),
            _ => Err(CardError::Parse(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// What a card does when played from the room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Clubs and Spades: deals damage equal to its rank.
    Monster,
    /// Hearts: restores health equal to its rank.
    Heal,
    /// Diamonds: equips a weapon of its rank.
    Weapon,
}

/// A single dungeon card.
///
/// Cards are plain values compared by suit and rank. A dungeon deck never
/// holds two cards with the same suit and rank, so equality doubles as
/// identity.
///
/// ## Example
///
/// ```
/// use scoundrel::cards::{Card, CardKind, Suit};
///
/// let queen = Card::new(Suit::Spades, 12).unwrap();
/// assert_eq!(queen.kind(), CardKind::Monster);
/// assert_eq!(queen.to_string(), "Q♠");
///
/// // Red suits stop at 10
/// assert!(Card::new(Suit::Hearts, 11).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: u8,
}

/// Unchecked wire form; deserialized cards go through `Card::new`.
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.suit, raw.rank)
    }
}

impl Card {
    pub const MIN_RANK: u8 = 2;
    pub const MAX_RANK: u8 = 14;
    pub const MAX_RED_RANK: u8 = 10;

    /// Number of cards in a full dungeon deck.
    pub const DECK_SIZE: usize = 44;

    /// Create a card, checking the rank against its suit.
    pub fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return Err(CardError::RankOutOfRange(rank));
        }
        if rank > suit.max_rank() {
            return Err(CardError::NoRedFace { suit, rank });
        }
        Ok(Self { suit, rank })
    }

    /// Build the full 44-card dungeon deck, unshuffled.
    ///
    /// Ordered by suit (Clubs, Hearts, Spades, Diamonds), then ascending rank.
    #[must_use]
    pub fn dungeon_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| (Self::MIN_RANK..=suit.max_rank()).map(move |rank| Card { suit, rank }))
            .collect()
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Rank: 2-10, then 11 = J, 12 = Q, 13 = K, 14 = A.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn kind(self) -> CardKind {
        self.suit.kind()
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.kind(), CardKind::Monster)
    }

    #[must_use]
    pub const fn is_heal(self) -> bool {
        matches!(self.kind(), CardKind::Heal)
    }

    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(self.kind(), CardKind::Weapon)
    }

    fn rank_label(self) -> std::borrow::Cow<'static, str> {
        match self.rank {
            11 => "J".into(),
            12 => "Q".into(),
            13 => "K".into(),
            14 => "A".into(),
            n => n.to_string().into(),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    /// Parse forms like `10♣`, `Qs`, `ah` (rank first, suit last).
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| CardError::Parse(s.to_string()))?;
        let (rank, suit) = s.split_at(split);
        let suit = Suit::try_from(suit)?;
        let rank = match rank.to_uppercase().as_str() {
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => 14,
            n => n.parse::<u8>().map_err(|_| CardError::Parse(s.to_string()))?,
        };
        Card::new(suit, rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.glyph())
    }
}
