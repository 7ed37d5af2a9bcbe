//! Hand scoring and the hand container shared by player and dealer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, RankValues};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

const ACE_HIGH: u8 = 11;
const ACE_LOW: u8 = 1;

/// Scores `cards` in order.
///
/// Each ace counts 11 when that keeps the running total at 21 or below and 1
/// otherwise. The choice is made once per ace as it is reached, so an earlier
/// ace is never revalued by later cards: `[ace, five, ten]` scores 26.
/// Every other card adds its value from `values`.
#[must_use]
pub fn total(cards: &[Card], values: &RankValues) -> u8 {
    cards.iter().fold(0u8, |total, card| {
        if card.rank.is_ace() {
            if total.saturating_add(ACE_HIGH) > BLACKJACK {
                total.saturating_add(ACE_LOW)
            } else {
                total + ACE_HIGH
            }
        } else {
            total.saturating_add(values.value_of(card.rank))
        }
    })
}

/// Returns whether the dealer draws another card at `total`.
///
/// The dealer draws on 16 or less and stands on 17 or more, soft or hard.
#[must_use]
pub const fn dealer_hits(total: u8) -> bool {
    total < DEALER_STANDS_ON
}

/// The cards held by the player or the dealer during one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand with [`total`].
    #[must_use]
    pub fn total(&self, values: &RankValues) -> u8 {
        total(&self.cards, values)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self, values: &RankValues) -> bool {
        self.total(values) > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
