//! Game state types.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::card::Card;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// Players are seated but no hands have been dealt.
    Uninitialized,
    /// Hands are dealt and the seating is rotated.
    Dealt,
    /// At least one turn has been played.
    InProgress,
    /// A player has played out their hand.
    Finished,
}

/// The card currently to beat and who played it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastPlay {
    /// The card played.
    pub card: Card,
    /// Name of the player who played it.
    pub player: String,
}

/// A single resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// The player beat the card on the table.
    Played {
        /// Name of the player.
        player: String,
        /// The card played.
        card: Card,
    },
    /// The player could not beat the card on the table.
    Passed {
        /// Name of the player.
        player: String,
    },
}

impl Turn {
    /// Returns the name of the player who took the turn.
    #[must_use]
    pub fn player(&self) -> &str {
        match self {
            Self::Played { player, .. } | Self::Passed { player } => player,
        }
    }

    /// Returns the card played, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Played { card, .. } => Some(*card),
            Self::Passed { .. } => None,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Played { player, card } => write!(f, "{player} played {card}"),
            Self::Passed { player } => write!(f, "{player} passed this turn"),
        }
    }
}
