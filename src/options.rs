//! Game configuration options.

/// Number of cards dealt to each player by default.
pub const MAX_CARDS_PER_PLAYER: usize = 12;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use big2::GameOptions;
///
/// let options = GameOptions::default()
///     .with_cards_per_player(10)
///     .with_shuffle(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of cards dealt to each player.
    pub cards_per_player: usize,
    /// Whether the stock is shuffled before dealing.
    ///
    /// When disabled, hands are dealt from the stock in its current order.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            cards_per_player: MAX_CARDS_PER_PLAYER,
            shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use big2::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_per_player(13);
    /// assert_eq!(options.cards_per_player, 13);
    /// ```
    #[must_use]
    pub const fn with_cards_per_player(mut self, cards: usize) -> Self {
        self.cards_per_player = cards;
        self
    }

    /// Sets whether the stock is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use big2::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Returns the number of cards dealt in total for `players` players, or
    /// `None` if the deal does not fit in a single deck.
    #[must_use]
    pub const fn cards_dealt(&self, players: usize) -> Option<usize> {
        match players.checked_mul(self.cards_per_player) {
            Some(total) if total <= crate::card::DECK_SIZE => Some(total),
            _ => None,
        }
    }
}
