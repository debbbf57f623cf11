//! Seated players and their hands.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::PlayError;

/// A player at the table.
///
/// A player starts without a hand. Once dealt, the hand stays assigned (even
/// when it runs out of cards) until it is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Option<Deck>,
}

impl Player {
    /// Creates a player with no hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: None,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand, if one has been dealt.
    #[must_use]
    pub const fn hand(&self) -> Option<&Deck> {
        self.hand.as_ref()
    }

    /// Assigns a hand, replacing any previous one.
    pub fn dealt(&mut self, hand: Deck) {
        self.hand = Some(hand);
    }

    /// Plays the smallest card that beats `last_played`.
    ///
    /// With no `last_played` card any card may be played, so the smallest card
    /// in the hand is chosen. Returns `None` when the player passes, leaving the
    /// hand unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NoHand`] if the player has not been dealt a hand.
    pub fn play(&mut self, last_played: Option<Card>) -> Result<Option<Card>, PlayError> {
        let hand = self.hand.as_mut().ok_or(PlayError::NoHand)?;
        let threshold = last_played.as_ref().map(Card::ordinal);

        let Some(card) = hand.smallest_above(threshold) else {
            return Ok(None);
        };
        hand.remove(card)?;
        Ok(Some(card))
    }

    /// Returns whether the player holds at least one card.
    #[must_use]
    pub fn has_card(&self) -> bool {
        self.hand.as_ref().is_some_and(|hand| !hand.is_empty())
    }

    /// Returns whether the player was dealt a hand and has played it out.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand.as_ref().is_some_and(Deck::is_empty)
    }

    /// Drops the hand entirely.
    pub fn discard_all_cards(&mut self) {
        self.hand = None;
    }
}
