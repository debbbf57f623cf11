//! A Simple Big 2 card game engine with optional `no_std` support.
//!
//! Four players are dealt twelve cards each from a shuffled deck. The holder
//! of the smallest card leads, and every turn a player plays the smallest card
//! that beats the last one played, or passes. When play comes back around to
//! the player who set the card to beat, that player may lead again with any
//! card. The first player to run out of cards wins.
//!
//! [`Game`] holds the rules and round state. [`Table`] wraps one game behind a
//! lock for front ends that take requests from several places.
//!
//! # Example
//!
//! ```
//! use big2::{Game, GameOptions};
//!
//! let mut game = Game::new(["Adam", "Ben", "Charlie", "Derek"], GameOptions::default(), 42)
//!     .unwrap();
//! let result = game.setup().unwrap().start().unwrap();
//! assert!(game.player(&result.winner).is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError, PlayError, SetupError, TableError, TurnError};
pub use game::{Game, GamePhase, LastPlay, Turn};
pub use options::{GameOptions, MAX_CARDS_PER_PLAYER};
pub use player::Player;
pub use result::RoundResult;
pub use table::{PlayerView, Table, TableState};
