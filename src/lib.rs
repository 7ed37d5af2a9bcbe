//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds against a dealer:
//! betting, the opening deal, hit and stay, the dealer's fixed drawing rule,
//! and settlement against a point balance that carries over between rounds.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, GameState, Turn};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(10).unwrap();
//! assert_eq!(game.state(), GameState::InProgress);
//!
//! let result = match game.hit().unwrap() {
//!     Turn::Continue { .. } => game.stay().unwrap(),
//!     Turn::Finished(result) => result,
//! };
//! assert_eq!(game.state(), GameState::RoundComplete);
//! assert_eq!(game.balance(), result.balance);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod player;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, RankValues, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError};
pub use game::{Game, GameState, Turn};
pub use hand::{BLACKJACK, DEALER_STANDS_ON, Hand, dealer_hits, total};
pub use ledger::Ledger;
pub use options::{DEFAULT_INITIAL_POINTS, GameOptions};
pub use player::Player;
pub use result::{Outcome, RoundResult};
pub use view::{CardView, HandView, SeenCard};
