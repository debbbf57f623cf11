//! Card types and the ordering used by every comparison in the game.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card rank, lowest to highest.
///
/// In Big 2 the three is the lowest rank and the two is the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Two.
    Two,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Textual symbol of the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
        }
    }

    /// Looks up a rank by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.symbol() == symbol)
    }
}

/// Card suit, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Suit {
    /// Diamonds (lowest).
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades (highest).
    Spades,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Textual symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♢',
            Self::Clubs => '♣',
            Self::Hearts => '♡',
            Self::Spades => '♠',
        }
    }

    /// Looks up a suit by its symbol.
    ///
    /// The ASCII letters `D`, `C`, `H` and `S` are accepted as aliases.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♢' | '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♣' | '♧' | 'C' | 'c' => Some(Self::Clubs),
            '♡' | '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♠' | '♤' | 'S' | 's' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Cards are ordered by their ordinal alone, which is fixed at construction:
/// `rank.index() * 4 + suit.index()`. The 3♢ is ordinal 0 and the 2♠ is
/// ordinal 51.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "CardParts", from = "CardParts"))]
pub struct Card {
    rank: Rank,
    suit: Suit,
    ordinal: u8,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            ordinal: rank.index() * SUIT_COUNT + suit.index(),
        }
    }

    /// Creates a card from its rank and suit symbols.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if either symbol is not recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use big2::{Card, Rank, Suit};
    ///
    /// let card = Card::from_symbols("10", '♠').unwrap();
    /// assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
    /// ```
    pub fn from_symbols(rank: &str, suit: char) -> Result<Self, CardError> {
        let rank = Rank::from_symbol(rank).ok_or(CardError::InvalidCard)?;
        let suit = Suit::from_symbol(suit).ok_or(CardError::InvalidCard)?;
        Ok(Self::new(rank, suit))
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the ordinal used for ordering, in `0..52`.
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        self.ordinal
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Parses a card code: everything but the last character is the rank and the
/// last character is the suit.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        let (split, suit) = code.char_indices().next_back().ok_or(CardError::InvalidFormat)?;
        let rank = &code[..split];
        if rank.is_empty() {
            return Err(CardError::InvalidFormat);
        }
        Self::from_symbols(rank, suit)
    }
}

/// Serialized shape of a card; the ordinal is always recomputed.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CardParts {
    rank: Rank,
    suit: Suit,
}

#[cfg(feature = "serde")]
impl From<Card> for CardParts {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
        }
    }
}

#[cfg(feature = "serde")]
impl From<CardParts> for Card {
    fn from(parts: CardParts) -> Self {
        Self::new(parts.rank, parts.suit)
    }
}

const SUIT_COUNT: u8 = Suit::ALL.len() as u8;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
