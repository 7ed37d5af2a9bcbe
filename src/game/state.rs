//! Round state types.

use crate::card::Card;
use crate::result::RoundResult;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to place a bet.
    AwaitingBet,
    /// Opening cards are dealt and the player may hit or stay.
    InProgress,
    /// The dealer is playing out and the bet is being resolved.
    Settling,
    /// The round is over. Final hands stay visible until the next bet.
    RoundComplete,
}

/// What happened after a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The player is still in and may act again.
    Continue {
        /// The card that was drawn.
        card: Card,
        /// The player's new total.
        total: u8,
    },
    /// The player busted and the round was settled.
    Finished(RoundResult),
}
