use core::mem;

use rand::RngCore;

use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::RoundResult;

use super::{Game, GameState, Turn};

impl<R: RngCore> Game<R> {
    fn ensure_in_progress(&self) -> Result<(), ActionError> {
        if self.state != GameState::InProgress {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a loss straight away; the dealer
    /// does not play. Reaching exactly 21 does not end the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the deck is empty, or a
    /// bust cannot be settled. Nothing changes on error.
    pub fn hit(&mut self) -> Result<Turn, ActionError> {
        self.ensure_in_progress()?;

        let mut deck = self.deck.clone();
        let mut hand = self.player.hand.clone();
        let card = deck
            .draw()
            .inspect_err(|_| log::warn!("deck exhausted on hit"))?;
        hand.add_card(card);

        let total = hand.total(deck.values());
        log::debug!("player hits {card}, total {total}");

        let previous_deck = mem::replace(&mut self.deck, deck);
        let previous_hand = mem::replace(&mut self.player.hand, hand);

        if total > BLACKJACK {
            return match self.settle(0) {
                Ok(result) => Ok(Turn::Finished(result)),
                Err(err) => {
                    self.deck = previous_deck;
                    self.player.hand = previous_hand;
                    Err(err)
                }
            };
        }

        Ok(Turn::Continue { card, total })
    }

    /// Player action: Stay (end the turn and let the dealer play).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the deck runs out while
    /// the dealer must draw. In the latter case the dealer's draws are undone
    /// and the round is still in progress, so the caller may reshuffle and
    /// stay again. A refused settlement is rolled back the same way.
    pub fn stay(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_in_progress()?;

        let (deck, hand, drawn) = self.dealer_play()?;
        let previous_deck = mem::replace(&mut self.deck, deck);
        let previous_hand = mem::replace(&mut self.dealer, hand);

        self.settle(drawn).inspect_err(|_| {
            self.deck = previous_deck;
            self.dealer = previous_hand;
        })
    }
}
