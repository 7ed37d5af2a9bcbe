//! Error types for deck, ledger, and round operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain. Rebuild the deck with `reset` before drawing again.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during betting and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero or negative.
    #[error("bet amount must be positive")]
    NotPositive,
    /// Bet amount exceeds the available balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A bet is already escrowed for this round.
    #[error("a bet has already been placed")]
    AlreadyPlaced,
    /// Settlement was requested with nothing escrowed.
    #[error("no active bet to settle")]
    NoActiveBet,
    /// Not enough cards in the deck to deal the opening hands.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
    /// Paying out a win on this bet would overflow the balance.
    #[error("a winning payout would overflow the balance")]
    PayoutOverflow,
}

impl From<DeckError> for BetError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::NotEnoughCards,
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// The ledger refused to settle the round.
    #[error("settlement failed: {0}")]
    Settlement(#[from] BetError),
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::NoCards,
        }
    }
}
