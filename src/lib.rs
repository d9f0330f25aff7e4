//! A single-player "21" card game engine with optional `no_std` support.
//!
//! The crate is built around [`Deck`], one container type used both for the
//! draw pile and for each hand, plus the pure functions in [`rules`] that
//! decide when a round stops and who won. [`Game`] ties them together into a
//! round flow for a text front-end.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_round().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//! assert_eq!(game.state(), GameState::RoundOver);
//!
//! let result = game.showdown().unwrap();
//! let _ = result.outcome;
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
pub mod options;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, CardValue, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, ConcealError, DealError, ShowdownError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use rules::{decide_outcome, deal_opening_hands, has_winner, outcome_for_scores};
