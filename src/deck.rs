//! The deck: a finite, shuffled stack of cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, RankValues, Suit};
use crate::error::DeckError;

/// An ordered stack of cards built from a rank→value table and a suit list.
///
/// Cards are drawn from the end of the sequence. The deck never reshuffles on
/// its own: once it is empty, [`Deck::draw`] fails until [`Deck::reset`] is
/// called.
///
/// `reset` rebuilds every card, including ones that are still held in open
/// hands, so resetting mid-round can put duplicates into play. There is no
/// discard pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    values: RankValues,
    suits: Vec<Suit>,
}

impl Deck {
    /// Builds an unshuffled deck with one card per (suit, rank) pair.
    #[must_use]
    pub fn build(values: RankValues, suits: impl Into<Vec<Suit>>) -> Self {
        let suits = suits.into();
        let cards = Self::lay_out(&values, &suits);
        Self {
            cards,
            values,
            suits,
        }
    }

    /// Builds an unshuffled standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(RankValues::standard(), Suit::ALL)
    }

    fn lay_out(values: &RankValues, suits: &[Suit]) -> Vec<Card> {
        let mut cards = Vec::with_capacity(suits.len() * values.len());
        for &suit in suits {
            for rank in values.ranks() {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Replaces the remaining cards so that `draws[0]` is drawn first.
    ///
    /// The configured table and suits are kept, so a later [`Deck::reset`]
    /// still yields a full deck.
    #[must_use]
    pub fn with_draw_order(mut self, draws: &[Card]) -> Self {
        self.cards = draws.iter().rev().copied().collect();
        self
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Discards the remaining cards and rebuilds a full, unshuffled deck.
    pub fn reset(&mut self) {
        self.cards = Self::lay_out(&self.values, &self.suits);
    }

    /// Returns the remaining cards, the next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the rank→value table this deck was built from.
    #[must_use]
    pub const fn values(&self) -> &RankValues {
        &self.values
    }

    /// Returns the suits this deck was built from.
    #[must_use]
    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
