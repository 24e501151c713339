//! A console blackjack game against an automated dealer.
//!
//! The engine ([`Deck`], [`Hand`], [`Round`], [`Game`]) is plain state with
//! no I/O and builds without `std`. The [`console`] module (with the `std`
//! feature) drives it over any text stream.
//!
//! # Example
//!
//! ```
//! use blackjack::{Action, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut round = game.deal();
//! game.act(&mut round, Action::Stay).unwrap();
//! game.dealer_play(&mut round).unwrap();
//! let outcome = game.finish(round).unwrap();
//! let _ = outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use action::{Action, wants_another_round};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, ParseActionError};
pub use game::{Game, Round, RoundState};
pub use hand::{Hand, HandView, Role};
pub use options::{BUST_LIMIT, DEALER_STANDS_AT, GameOptions};
pub use result::{RoundOutcome, Tally};
