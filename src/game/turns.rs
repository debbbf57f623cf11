use alloc::string::{String, ToString};

use crate::error::TurnError;
use crate::player::Player;
use crate::result::RoundResult;

use super::{Game, GamePhase, LastPlay, Turn};

impl Game {
    fn ensure_playing(&self) -> Result<(), TurnError> {
        match self.phase {
            GamePhase::Dealt | GamePhase::InProgress => Ok(()),
            GamePhase::Uninitialized | GamePhase::Finished => Err(TurnError::InvalidState),
        }
    }

    /// Resolves one turn for the player in the given seat.
    ///
    /// If that player set the card to beat and everyone else has passed since,
    /// the card is cleared first and the player may lead with any card.
    ///
    /// This does not end the game when the player runs out of cards; the
    /// turn loop finishes the current lap first.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, the seat does not exist,
    /// or the player has no hand.
    pub fn next_turn(&mut self, seat: usize) -> Result<Turn, TurnError> {
        self.ensure_playing()?;
        self.take_turn(seat)
    }

    /// Resolves one turn for the named player and ends the game if that
    /// player has run out of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is being played, the player is not seated,
    /// or the player has no hand.
    pub fn play(&mut self, name: &str) -> Result<Turn, TurnError> {
        self.ensure_playing()?;
        let seat = self.seat_of(name).ok_or(TurnError::PlayerNotFound)?;
        let turn = self.take_turn(seat)?;
        if self.players[seat].is_out() {
            self.finish();
        }
        Ok(turn)
    }

    /// Plays laps around the table until some player runs out of cards.
    ///
    /// A lap is always completed, even after a player has gone out during it.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt or the round is already
    /// finished.
    pub fn start(&mut self) -> Result<RoundResult, TurnError> {
        self.ensure_playing()?;

        let mut laps = 0;
        let mut cards_played = 0;
        let mut passes = 0;

        while self.players.iter().all(Player::has_card) {
            laps += 1;
            for seat in 0..self.players.len() {
                match self.take_turn(seat)? {
                    Turn::Played { .. } => cards_played += 1,
                    Turn::Passed { .. } => passes += 1,
                }
            }
        }

        let winner = self.finish().ok_or(TurnError::InvalidState)?;
        Ok(RoundResult {
            winner,
            laps,
            cards_played,
            passes,
        })
    }

    fn take_turn(&mut self, seat: usize) -> Result<Turn, TurnError> {
        let player = self.players.get_mut(seat).ok_or(TurnError::SeatNotFound)?;

        let leads = self
            .last_played
            .as_ref()
            .is_some_and(|last| last.player == player.name());
        let threshold = if leads {
            None
        } else {
            self.last_played.as_ref().map(|last| last.card)
        };

        let played = player.play(threshold)?;
        if leads {
            log::trace!("everyone passed, {} leads", player.name());
            self.last_played = None;
        }
        let name = player.name().to_string();
        self.phase = GamePhase::InProgress;

        let turn = match played {
            Some(card) => {
                self.last_played = Some(LastPlay {
                    card,
                    player: name.clone(),
                });
                Turn::Played { player: name, card }
            }
            None => Turn::Passed { player: name },
        };
        log::trace!("{turn}");

        self.history.push(turn.clone());
        Ok(turn)
    }

    fn finish(&mut self) -> Option<String> {
        let winner = self.winner()?.name().to_string();
        self.phase = GamePhase::Finished;
        log::info!("game over, the winner is {winner}");
        Some(winner)
    }
}
