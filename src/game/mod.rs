//! Round engine and state management.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::RankValues;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::view::HandView;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{GameState, Turn};

/// A blackjack engine for one player against the dealer.
///
/// The game owns the deck, both hands, and the player's ledger. Points carry
/// over from round to round for as long as the game lives.
///
/// A settled round stays in [`GameState::RoundComplete`] with its hands
/// visible; call [`Game::clear_round`] or place the next bet to get back to
/// [`GameState::AwaitingBet`].
///
/// Randomness comes from `R`. [`Game::new`] seeds a [`ChaCha8Rng`];
/// [`Game::with_rng`] accepts any generator.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    deck: Deck,
    options: GameOptions,
    state: GameState,
    player: Player,
    dealer: Hand,
    last_result: Option<RoundResult>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.balance(), 100);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a new game that shuffles with `rng`.
    ///
    /// The deck is built from the options and shuffled once before the first
    /// round.
    #[must_use]
    pub fn with_rng(options: GameOptions, mut rng: R) -> Self {
        let mut deck = Deck::build(options.rank_values.clone(), options.suits.clone());
        deck.shuffle(&mut rng);

        Self {
            deck,
            player: Player::new(options.initial_points),
            options,
            state: GameState::AwaitingBet,
            dealer: Hand::new(),
            last_result: None,
            rng,
        }
    }

    /// Rebuilds the full deck and shuffles it.
    ///
    /// This is allowed at any point, including mid-round after the deck ran
    /// out. Cards already in either hand are rebuilt as well, so they may be
    /// dealt a second time.
    pub fn reshuffle(&mut self) {
        if !self.player.hand.is_empty() || !self.dealer.is_empty() {
            log::warn!(
                "reshuffling with {} cards in play",
                self.player.hand.len() + self.dealer.len()
            );
        }

        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        log::debug!("deck reshuffled, {} cards", self.deck.len());
    }

    /// Replaces the deck, keeping hands and balance.
    ///
    /// Hands are scored with the new deck's rank→value table from now on.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the options the game was created with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's points not at stake.
    pub const fn balance(&self) -> usize {
        self.player.ledger.balance()
    }

    /// Returns the escrowed bet, or 0 outside a round.
    pub const fn current_bet(&self) -> usize {
        self.player.ledger.bet()
    }

    /// Returns the player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the result of the most recently settled round.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the player's hand, all cards face up, with its total.
    pub fn peek_player_hand(&self) -> HandView {
        HandView::open(&self.player.hand, self.values())
    }

    /// Returns the dealer's hand.
    ///
    /// Unless `reveal_all` is set, the first card is face down and the total
    /// is withheld.
    pub fn peek_dealer_hand(&self, reveal_all: bool) -> HandView {
        if reveal_all {
            HandView::open(&self.dealer, self.values())
        } else {
            HandView::concealed(&self.dealer, self.values())
        }
    }

    /// Clears both hands and returns to [`GameState::AwaitingBet`].
    ///
    /// Calling [`Game::place_bet`] after a finished round does this
    /// implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless the round is complete; an
    /// open bet is never discarded.
    pub fn clear_round(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::RoundComplete {
            return Err(ActionError::InvalidState);
        }

        self.player.hand.clear();
        self.dealer.clear();
        self.state = GameState::AwaitingBet;
        Ok(())
    }

    fn values(&self) -> &RankValues {
        self.deck.values()
    }
}
