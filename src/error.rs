//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank or suit symbol not recognized.
    #[error("invalid card")]
    InvalidCard,
    /// Card code is too short to hold both a rank and a suit.
    #[error("invalid card format")]
    InvalidFormat,
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    InsufficientCards,
    /// The card is not in the deck.
    #[error("card not found in the deck")]
    CardNotFound,
}

/// Errors that can occur when a player takes a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The player has not been dealt a hand.
    #[error("player has no hand")]
    NoHand,
    /// The hand rejected the operation.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while creating or dealing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The roster is empty.
    #[error("no players at the table")]
    NoPlayers,
    /// Two players share a name.
    #[error("duplicate player name")]
    DuplicatePlayer,
    /// The options cannot produce a deal for this roster.
    #[error("invalid game options for this roster")]
    InvalidOptions,
    /// The stock rejected the operation.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while playing turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player could not play.
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// Errors returned by the [`Table`](crate::Table) handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The card code could not be parsed.
    #[error("invalid card format")]
    InvalidCardFormat,
    /// Dealing failed.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// Playing failed.
    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl From<CardError> for TableError {
    fn from(_: CardError) -> Self {
        Self::InvalidCardFormat
    }
}
