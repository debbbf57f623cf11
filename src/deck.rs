//! An ordered collection of cards, used both for the stock and for hands.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered, mutable sequence of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in ascending order (ranks outer, suits inner).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a full 52-card deck grouped by suit (suits outer, ranks inner).
    #[must_use]
    pub fn by_suit() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Wraps the given cards without reordering them.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    /// Sorts the deck in place by ascending ordinal.
    pub fn order(&mut self) -> &mut Self {
        self.cards.sort_unstable();
        self
    }

    /// Removes and returns the first `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `count` cards
    /// remain. The deck is left untouched in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards);
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Returns the card with the smallest ordinal strictly above `threshold`.
    ///
    /// A `None` threshold matches any card, so the result is the smallest card
    /// in the deck.
    #[must_use]
    pub fn smallest_above(&self, threshold: Option<u8>) -> Option<Card> {
        self.cards
            .iter()
            .filter(|card| threshold.is_none_or(|ordinal| card.ordinal() > ordinal))
            .min()
            .copied()
    }

    /// Removes a specific card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotFound`] if the card is not in the deck.
    pub fn remove(&mut self, card: Card) -> Result<Card, DeckError> {
        let index = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(DeckError::CardNotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Looks up and removes the smallest card above `threshold` in one step.
    pub fn draw_smallest_above(&mut self, threshold: Option<u8>) -> Option<Card> {
        let card = self.smallest_above(threshold)?;
        let index = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(index))
    }

    /// Returns whether the deck holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
