//! The player: a hand plus a betting ledger.

use crate::hand::Hand;
use crate::ledger::Ledger;

/// The player's side of the table.
///
/// The dealer holds the same [`Hand`] type but has no ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player's hand for the current round.
    pub hand: Hand,
    /// The player's balance and escrowed bet.
    pub ledger: Ledger,
}

impl Player {
    /// Creates a player with an empty hand and `points` to bet with.
    #[must_use]
    pub const fn new(points: usize) -> Self {
        Self {
            hand: Hand::new(),
            ledger: Ledger::new(points),
        }
    }
}
