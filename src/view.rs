//! Presentation descriptors handed to the interface layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, RankValues, Suit};
use crate::hand::Hand;

/// A card as shown to the user, with its table value resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardView {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// The value from the deck's rank→value table.
    pub value: u8,
}

impl CardView {
    /// Resolves `card` against `values`.
    #[must_use]
    pub fn new(card: Card, values: &RankValues) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            value: values.value_of(card.rank),
        }
    }

    /// Returns the underlying card.
    #[must_use]
    pub const fn card(&self) -> Card {
        Card::new(self.suit, self.rank)
    }
}

/// A card position in a displayed hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeenCard {
    /// The card is dealt face down.
    FaceDown,
    /// The card is visible.
    FaceUp(CardView),
}

/// A hand as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in deal order.
    pub cards: Vec<SeenCard>,
    /// The hand total, or `None` while any card is face down.
    pub total: Option<u8>,
}

impl HandView {
    /// Shows every card face up with the total.
    #[must_use]
    pub fn open(hand: &Hand, values: &RankValues) -> Self {
        Self {
            cards: hand
                .cards()
                .iter()
                .map(|&card| SeenCard::FaceUp(CardView::new(card, values)))
                .collect(),
            total: Some(hand.total(values)),
        }
    }

    /// Shows the first card face down and hides the total.
    #[must_use]
    pub fn concealed(hand: &Hand, values: &RankValues) -> Self {
        Self {
            cards: hand
                .cards()
                .iter()
                .enumerate()
                .map(|(i, &card)| {
                    if i == 0 {
                        SeenCard::FaceDown
                    } else {
                        SeenCard::FaceUp(CardView::new(card, values))
                    }
                })
                .collect(),
            total: None,
        }
    }

    /// Returns the visible cards.
    pub fn face_up(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter_map(|seen| match seen {
            SeenCard::FaceUp(card) => Some(card),
            SeenCard::FaceDown => None,
        })
    }
}

pub(crate) fn card_views(hand: &Hand, values: &RankValues) -> Vec<CardView> {
    hand.cards()
        .iter()
        .map(|&card| CardView::new(card, values))
        .collect()
}
