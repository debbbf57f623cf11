use crate::deck::Deck;
use crate::error::{DeckError, SetupError};

use super::{Game, GamePhase};

impl Game {
    /// Shuffles the stock, deals every player a hand, and rotates the seating
    /// so the holder of the smallest card sits first.
    ///
    /// A finished game is gathered back into a fresh stock first, so `setup`
    /// can be called again after every round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still being dealt or played, or if the
    /// stock cannot cover every hand. Nothing is dealt in that case.
    pub fn setup(&mut self) -> Result<&mut Self, SetupError> {
        match self.phase {
            GamePhase::Uninitialized => {}
            GamePhase::Finished => self.collect_cards(),
            GamePhase::Dealt | GamePhase::InProgress => return Err(SetupError::InvalidState),
        }
        self.deal()
    }

    /// Discards every hand, rebuilds a full stock, and deals again.
    ///
    /// Works from any phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be dealt from a full stock.
    pub fn reset(&mut self) -> Result<&mut Self, SetupError> {
        self.collect_cards();
        self.deal()
    }

    fn collect_cards(&mut self) {
        for player in &mut self.players {
            player.discard_all_cards();
        }
        self.stock = Deck::new();
        self.last_played = None;
        self.history.clear();
        self.phase = GamePhase::Uninitialized;
    }

    fn deal(&mut self) -> Result<&mut Self, SetupError> {
        let per_player = self.options.cards_per_player;
        let total = self
            .options
            .cards_dealt(self.players.len())
            .ok_or(SetupError::InvalidOptions)?;
        if self.stock.len() < total {
            return Err(DeckError::InsufficientCards.into());
        }
        let remaining = self.stock.len() - total;

        if self.options.shuffle {
            self.stock.shuffle(&mut self.rng);
        }

        for player in &mut self.players {
            let mut hand = Deck::from_cards(self.stock.draw(per_player)?);
            hand.order();
            log::debug!("initial hand: {}: {hand}", player.name());
            player.dealt(hand);
        }
        // The stock was checked against `total` above, so every draw succeeded.
        debug_assert_eq!(self.stock.len(), remaining);

        if let Some(seat) = self.starting_seat() {
            self.players.rotate_left(seat);
        }
        log::debug!(
            "seating: {:?}",
            self.players.iter().map(|p| p.name()).collect::<alloc::vec::Vec<_>>()
        );

        self.last_played = None;
        self.history.clear();
        self.phase = GamePhase::Dealt;
        Ok(self)
    }

    /// Seat of the player holding the smallest card across all hands.
    fn starting_seat(&self) -> Option<usize> {
        self.players
            .iter()
            .enumerate()
            .filter_map(|(seat, player)| {
                let smallest = player.hand()?.smallest_above(None)?;
                Some((seat, smallest))
            })
            .min_by_key(|&(_, card)| card)
            .map(|(seat, _)| seat)
    }
}
