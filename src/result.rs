//! Round outcome types.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::BLACKJACK;
use crate::view::CardView;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Player loses (player busts or dealer has the higher total).
    PlayerLoss,
    /// Equal totals with neither side bust.
    Draw,
}

impl Outcome {
    /// Decides a round from the two final totals.
    ///
    /// A player bust loses even when the dealer has also busted.
    #[must_use]
    pub const fn decide(player_total: u8, dealer_total: u8) -> Self {
        if player_total > BLACKJACK {
            Self::PlayerLoss
        } else if dealer_total > BLACKJACK || player_total > dealer_total {
            Self::PlayerWin
        } else if player_total < dealer_total {
            Self::PlayerLoss
        } else {
            Self::Draw
        }
    }
}

/// Everything the interface layer needs to present a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The amount that was at stake.
    pub bet: usize,
    /// Points credited back at settlement.
    pub payout: usize,
    /// Change in balance relative to before the bet was placed.
    pub net: isize,
    /// Balance after settlement.
    pub balance: usize,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the player went over 21.
    pub player_busted: bool,
    /// Whether the dealer went over 21.
    pub dealer_busted: bool,
    /// The player's final cards.
    pub player_cards: Vec<CardView>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<CardView>,
    /// Cards the dealer drew after the opening deal.
    pub dealer_drawn: usize,
}
