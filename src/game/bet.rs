use rand::RngCore;

use crate::error::BetError;

use super::{Game, GameState};

/// Cards needed for the opening deal: two each.
const OPENING_CARDS: usize = 4;

impl<R: RngCore> Game<R> {
    /// Places a bet and deals the opening hands.
    ///
    /// On success the bet is escrowed, the player and dealer each receive two
    /// cards (player, dealer, player, dealer), and the round moves to
    /// [`GameState::InProgress`]. If the previous round is complete its hands
    /// are cleared first.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero,
    /// negative, or more than the balance, or fewer than four cards remain.
    /// Nothing changes on error.
    pub fn place_bet(&mut self, amount: isize) -> Result<(), BetError> {
        match self.state {
            GameState::AwaitingBet | GameState::RoundComplete => {}
            GameState::InProgress | GameState::Settling => return Err(BetError::InvalidState),
        }

        self.player.ledger.validate_bet(amount)?;

        if self.deck.len() < OPENING_CARDS {
            log::warn!(
                "cannot deal with {} cards left, reshuffle first",
                self.deck.len()
            );
            return Err(BetError::NotEnoughCards);
        }

        if self.state == GameState::RoundComplete {
            self.player.hand.clear();
            self.dealer.clear();
            self.state = GameState::AwaitingBet;
        }

        let amount = self.player.ledger.place_bet(amount)?;
        log::debug!(
            "bet of {amount} escrowed, {} left",
            self.player.ledger.balance()
        );

        self.deal()?;
        Ok(())
    }

    fn deal(&mut self) -> Result<(), BetError> {
        for _ in 0..2 {
            self.player.hand.add_card(self.deck.draw()?);
            self.dealer.add_card(self.deck.draw()?);
        }

        log::debug!(
            "dealt player {:?} ({}), {} cards left",
            self.player.hand.cards(),
            self.player.hand.total(self.deck.values()),
            self.deck.len()
        );

        self.state = GameState::InProgress;
        Ok(())
    }
}
