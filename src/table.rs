//! A shared handle around one game, for request/response front ends.
//!
//! [`Table`] serializes every call behind a lock and exchanges plain strings
//! and [`TableState`] snapshots, so an HTTP or WASM layer only needs to map
//! them onto its own wire format.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{SetupError, TableError};
use crate::game::{Game, GamePhase, Turn};
use crate::options::GameOptions;
use crate::sync::Mutex;

/// Read view of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    /// Player name.
    pub name: String,
    /// Remaining cards as card codes, in hand order.
    pub cards: Vec<String>,
    /// Whether the player still holds a card.
    pub has_card: bool,
}

/// Read view of the whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableState {
    /// Players in seating order.
    pub players: Vec<PlayerView>,
    /// Code of the card to beat.
    pub last_played_card: Option<String>,
    /// Name of the player who played the card to beat.
    pub last_played_player: Option<String>,
    /// Current game phase.
    pub phase: GamePhase,
    /// Name of the winner, once someone has played out their hand.
    pub winner: Option<String>,
}

impl From<&Game> for TableState {
    fn from(game: &Game) -> Self {
        let players = game
            .players()
            .iter()
            .map(|player| PlayerView {
                name: player.name().to_string(),
                cards: player
                    .hand()
                    .map(|hand| hand.cards().iter().map(ToString::to_string).collect())
                    .unwrap_or_default(),
                has_card: player.has_card(),
            })
            .collect();

        Self {
            players,
            last_played_card: game.last_played_card().map(|card| card.to_string()),
            last_played_player: game.last_played().map(|last| last.player.clone()),
            phase: game.phase(),
            winner: game.winner().map(|player| player.name().to_string()),
        }
    }
}

/// A single game shared between callers.
pub struct Table {
    game: Mutex<Game>,
}

impl Table {
    /// Wraps an existing game.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self {
            game: Mutex::new(game),
        }
    }

    /// Creates a game for the roster and deals the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be created or dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use big2::{GameOptions, GamePhase, Table};
    ///
    /// let table = Table::seated(["Adam", "Ben", "Charlie", "Derek"], GameOptions::default(), 7)
    ///     .unwrap();
    /// assert_eq!(table.state().phase, GamePhase::Dealt);
    /// ```
    pub fn seated<I, S>(roster: I, options: GameOptions, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut game = Game::new(roster, options, seed)?;
        game.setup()?;
        Ok(Self::new(game))
    }

    /// Returns a snapshot of the table.
    pub fn state(&self) -> TableState {
        TableState::from(&*self.game.lock())
    }

    /// Plays one turn for the named player.
    ///
    /// The card code is validated, but the player always plays the smallest
    /// card that beats the table, or passes. The returned turn renders as the
    /// response message, e.g. `"Adam played 5♣"`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::PlayerNotFound`] for an unknown name,
    /// [`TableError::InvalidCardFormat`] for a malformed code, or the game's
    /// error if the turn cannot be played.
    pub fn play_card(&self, player_name: &str, card_code: &str) -> Result<Turn, TableError> {
        let mut game = self.game.lock();
        if game.player(player_name).is_none() {
            return Err(TableError::PlayerNotFound);
        }
        let requested: Card = card_code.parse()?;
        log::trace!("{player_name} asked to play {requested}");

        Ok(game.play(player_name)?)
    }

    /// Runs the current round to completion and returns the final table.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is dealt or the round is already over.
    pub fn start_game(&self) -> Result<TableState, TableError> {
        let mut game = self.game.lock();
        game.start()?;
        Ok(TableState::from(&*game))
    }

    /// Deals a fresh round to the same roster and returns the new table.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be dealt.
    pub fn reset_game(&self) -> Result<TableState, TableError> {
        let mut game = self.game.lock();
        game.reset()?;
        Ok(TableState::from(&*game))
    }

    /// Runs `f` with shared access to the game.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.game.lock())
    }

    /// Consumes the table and returns the game.
    #[must_use]
    pub fn into_game(self) -> Game {
        self.game.into_inner()
    }
}
