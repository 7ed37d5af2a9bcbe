//! The betting ledger: a point balance and the bet escrowed for one round.

use crate::error::BetError;
use crate::result::Outcome;

/// Tracks a point balance and the bet currently held in escrow.
///
/// A bet leaves the balance when it is placed, so settlement only ever adds
/// points back and the balance cannot go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    balance: usize,
    bet: usize,
}

impl Ledger {
    /// Creates a ledger holding `balance` points and no bet.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self { balance, bet: 0 }
    }

    /// Returns the points not currently at stake.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the escrowed bet, or 0 between rounds.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether a bet is escrowed.
    #[must_use]
    pub const fn has_bet(&self) -> bool {
        self.bet > 0
    }

    /// Checks that `amount` could be placed without changing anything.
    ///
    /// # Errors
    ///
    /// Same as [`Ledger::place_bet`].
    pub fn validate_bet(&self, amount: isize) -> Result<usize, BetError> {
        if self.has_bet() {
            return Err(BetError::AlreadyPlaced);
        }

        if amount <= 0 {
            return Err(BetError::NotPositive);
        }

        let amount = amount.unsigned_abs();
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        // A win credits twice the stake to `balance - amount`.
        if self.balance.checked_add(amount).is_none() {
            return Err(BetError::PayoutOverflow);
        }

        Ok(amount)
    }

    /// Moves `amount` from the balance into escrow.
    ///
    /// # Errors
    ///
    /// Returns an error if a bet is already escrowed, the amount is zero or
    /// negative, it exceeds the balance, or a win on it could not be paid
    /// without overflowing. The ledger is unchanged on error.
    pub fn place_bet(&mut self, amount: isize) -> Result<usize, BetError> {
        let amount = self.validate_bet(amount)?;
        self.balance -= amount;
        self.bet = amount;
        Ok(amount)
    }

    /// Resolves the escrowed bet and returns the points credited back.
    ///
    /// A win pays twice the stake, a draw returns the stake, and a loss pays
    /// nothing. The escrow is cleared in every case.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NoActiveBet`] if nothing is escrowed, or
    /// [`BetError::PayoutOverflow`] if the payout does not fit. The ledger is
    /// unchanged on error.
    pub const fn settle(&mut self, outcome: Outcome) -> Result<usize, BetError> {
        if self.bet == 0 {
            return Err(BetError::NoActiveBet);
        }

        let payout = match outcome {
            Outcome::PlayerWin => self.bet.checked_mul(2),
            Outcome::Draw => Some(self.bet),
            Outcome::PlayerLoss => Some(0),
        };
        let Some(payout) = payout else {
            return Err(BetError::PayoutOverflow);
        };
        let Some(balance) = self.balance.checked_add(payout) else {
            return Err(BetError::PayoutOverflow);
        };

        self.balance = balance;
        self.bet = 0;
        Ok(payout)
    }
}
