use rand::RngCore;

use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{Hand, dealer_hits};
use crate::result::{Outcome, RoundResult};
use crate::view::card_views;

use super::{Game, GameState};

impl<R: RngCore> Game<R> {
    /// Dealer draws until reaching 17 or more.
    ///
    /// Plays against copies of the deck and the dealer's hand and returns
    /// them with the number of cards drawn once the dealer stands. The game
    /// itself is not touched.
    pub(super) fn dealer_play(&self) -> Result<(Deck, Hand, usize), ActionError> {
        let mut deck = self.deck.clone();
        let mut hand = self.dealer.clone();
        let mut drawn = 0;

        while dealer_hits(hand.total(deck.values())) {
            let card = deck
                .draw()
                .inspect_err(|_| log::warn!("deck exhausted during dealer play"))?;
            hand.add_card(card);
            drawn += 1;
            log::debug!("dealer draws {card}, total {}", hand.total(deck.values()));
        }

        Ok((deck, hand, drawn))
    }

    /// Decides the round, settles the bet, and records the result.
    ///
    /// If the ledger refuses, the round goes back to
    /// [`GameState::InProgress`] with the ledger untouched.
    pub(super) fn settle(&mut self, dealer_drawn: usize) -> Result<RoundResult, ActionError> {
        self.state = GameState::Settling;

        let values = self.deck.values();
        let player_total = self.player.hand.total(values);
        let dealer_total = self.dealer.total(values);
        let outcome = Outcome::decide(player_total, dealer_total);

        let bet = self.player.ledger.bet();
        let payout = match self.player.ledger.settle(outcome) {
            Ok(payout) => payout,
            Err(err) => {
                log::warn!("settlement refused: {err}");
                self.state = GameState::InProgress;
                return Err(err.into());
            }
        };
        let balance = self.player.ledger.balance();
        let net = net_change(bet, payout);

        log::info!(
            "round settled: {outcome:?}, player {player_total} v dealer {dealer_total}, \
             net {net}, balance {balance}"
        );

        let result = RoundResult {
            outcome,
            bet,
            payout,
            net,
            balance,
            player_total,
            dealer_total,
            player_busted: self.player.hand.is_bust(values),
            dealer_busted: self.dealer.is_bust(values),
            player_cards: card_views(&self.player.hand, values),
            dealer_cards: card_views(&self.dealer, values),
            dealer_drawn,
        };

        self.last_result = Some(result.clone());
        self.state = GameState::RoundComplete;
        Ok(result)
    }
}

/// Signed balance change of a round, saturating at the `isize` bounds.
fn net_change(bet: usize, payout: usize) -> isize {
    if payout >= bet {
        isize::try_from(payout - bet).unwrap_or(isize::MAX)
    } else {
        isize::try_from(bet - payout).map_or(isize::MIN, |loss| -loss)
    }
}
