//! Round result types.

extern crate alloc;

use alloc::string::String;

/// Result of running the turn loop to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Name of the first player in seating order with an empty hand.
    pub winner: String,
    /// Number of full passes around the table.
    pub laps: usize,
    /// Number of cards played.
    pub cards_played: usize,
    /// Number of turns where a player passed.
    pub passes: usize,
}
