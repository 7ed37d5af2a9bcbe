//! Game configuration options.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{RankValues, Suit};

/// Points a new player starts with.
pub const DEFAULT_INITIAL_POINTS: usize = 100;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default().with_initial_points(250);
/// assert_eq!(options.initial_points, 250);
/// ```
///
/// The dealer's standing total and the payout multipliers are fixed and are
/// not part of the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Points the player starts with.
    pub initial_points: usize,
    /// Rank→value table used to build the deck and score hands.
    pub rank_values: RankValues,
    /// Suits the deck is built from, in build order.
    pub suits: Vec<Suit>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_points: DEFAULT_INITIAL_POINTS,
            rank_values: RankValues::standard(),
            suits: Suit::ALL.to_vec(),
        }
    }
}

impl GameOptions {
    /// Sets the player's starting points.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_points(40);
    /// assert_eq!(options.initial_points, 40);
    /// ```
    #[must_use]
    pub const fn with_initial_points(mut self, points: usize) -> Self {
        self.initial_points = points;
        self
    }

    /// Sets the rank→value table.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{GameOptions, Rank, RankValues};
    ///
    /// let values = RankValues::custom([(Rank::Ace, 1), (Rank::King, 10)]);
    /// let options = GameOptions::default().with_rank_values(values);
    /// assert_eq!(options.rank_values.len(), 2);
    /// ```
    #[must_use]
    pub fn with_rank_values(mut self, values: RankValues) -> Self {
        self.rank_values = values;
        self
    }

    /// Sets the suits the deck is built from.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{GameOptions, Suit};
    ///
    /// let options = GameOptions::default().with_suits([Suit::Hearts]);
    /// assert_eq!(options.suits, vec![Suit::Hearts]);
    /// ```
    #[must_use]
    pub fn with_suits(mut self, suits: impl Into<Vec<Suit>>) -> Self {
        self.suits = suits.into();
        self
    }
}
