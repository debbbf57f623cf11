//! Game engine and round state.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;
use crate::player::Player;

mod deal;
pub mod state;
mod turns;

pub use state::{GamePhase, LastPlay, Turn};

/// A Simple Big 2 game: one stock, a fixed roster, and the card to beat.
///
/// The game owns its players. The last play refers back to its player by
/// name only, so players never hold a reference to the game.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not dealt to any player.
    stock: Deck,
    /// Game options.
    options: GameOptions,
    /// Current phase.
    phase: GamePhase,
    /// Players in seating order. Rotated on every deal.
    players: Vec<Player>,
    /// The card to beat, if any.
    last_played: Option<LastPlay>,
    /// Turns resolved since the last deal.
    history: Vec<Turn>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a full stock and the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty, contains duplicate names, or
    /// cannot be dealt with the given options.
    ///
    /// # Example
    ///
    /// ```
    /// use big2::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(["Adam", "Ben", "Charlie", "Derek"], GameOptions::default(), 42)
    ///     .unwrap();
    /// assert_eq!(game.phase(), GamePhase::Uninitialized);
    /// ```
    pub fn new<I, S>(roster: I, options: GameOptions, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stock(roster, Deck::new(), options, seed)
    }

    /// Creates a new game that deals from the given stock.
    ///
    /// Combined with [`GameOptions::with_shuffle`] set to `false` this gives a
    /// fully predetermined deal.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_stock<I, S>(
        roster: I,
        stock: Deck,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = roster.into_iter().map(Player::new).collect();

        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        let duplicate = players
            .iter()
            .enumerate()
            .any(|(seat, player)| players[..seat].iter().any(|p| p.name() == player.name()));
        if duplicate {
            return Err(SetupError::DuplicatePlayer);
        }
        if options.cards_per_player == 0 || options.cards_dealt(players.len()).is_none() {
            return Err(SetupError::InvalidOptions);
        }

        Ok(Self {
            stock,
            options,
            phase: GamePhase::Uninitialized,
            players,
            last_played: None,
            history: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the undealt cards.
    pub const fn stock(&self) -> &Deck {
        &self.stock
    }

    /// Returns the players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name() == name)
    }

    /// Returns the player with the given name, mutably.
    ///
    /// Names cannot be changed through this handle, only hands.
    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.name() == name)
    }

    /// Returns the seat index of the player with the given name.
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|player| player.name() == name)
    }

    /// Returns the card to beat and who played it.
    pub const fn last_played(&self) -> Option<&LastPlay> {
        self.last_played.as_ref()
    }

    /// Returns the card to beat.
    pub fn last_played_card(&self) -> Option<Card> {
        self.last_played.as_ref().map(|last| last.card)
    }

    /// Returns the player who played the card to beat.
    pub fn last_played_player(&self) -> Option<&Player> {
        self.last_played
            .as_ref()
            .and_then(|last| self.player(&last.player))
    }

    /// Returns the turns resolved since the last deal.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Returns the winner: the first player in seating order who has played
    /// out their hand.
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|player| player.is_out())
    }
}
