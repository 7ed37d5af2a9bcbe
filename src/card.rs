//! Card types and the rank→value table.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in deck build order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns whether this rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    const fn standard_value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards carry no numeric value of their own. The value is looked up in the
/// [`RankValues`] table of the deck the card came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Ordered rank→value table used to build decks and score hands.
///
/// The order of entries is the order in which ranks are laid out when a deck
/// is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankValues {
    entries: Vec<(Rank, u8)>,
}

impl RankValues {
    /// Standard blackjack values: ace 1, number cards at face, pictures 10.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: Rank::ALL
                .iter()
                .map(|&rank| (rank, rank.standard_value()))
                .collect(),
        }
    }

    /// Builds a custom table.
    ///
    /// A rank listed twice keeps its first position and takes the last value.
    /// Ranks that are not listed are left out of the deck entirely.
    pub fn custom<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Rank, u8)>,
    {
        let mut table: Vec<(Rank, u8)> = Vec::new();
        for (rank, value) in entries {
            match table.iter_mut().find(|(r, _)| *r == rank) {
                Some(slot) => slot.1 = value,
                None => table.push((rank, value)),
            }
        }
        Self { entries: table }
    }

    /// Returns the value of `rank`, or `None` when it is not in the table.
    #[must_use]
    pub fn get(&self, rank: Rank) -> Option<u8> {
        self.entries
            .iter()
            .find(|(r, _)| *r == rank)
            .map(|&(_, value)| value)
    }

    /// Returns the value of `rank`, treating unknown ranks as worth 0.
    #[must_use]
    pub fn value_of(&self, rank: Rank) -> u8 {
        self.get(rank).unwrap_or(0)
    }

    /// Iterates ranks in build order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.entries.iter().map(|&(rank, _)| rank)
    }

    /// Returns the number of ranks in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RankValues {
    fn default() -> Self {
        Self::standard()
    }
}
