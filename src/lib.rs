//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds against a dealer who
//! stands on 17, dealing from a multi-deck [`Shoe`]. A round is started with
//! [`Game::start`], played with [`Game::hit`], [`Game::stand`] or
//! [`Game::double_down`], and reported to observers registered with
//! [`Game::on_end`].
//!
//! # Example
//!
//! ```
//! use bjshoe::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_decks(3), 42).unwrap();
//! game.place_bet(100.0).unwrap();
//!
//! let table = game.start().unwrap();
//! assert_eq!(table.player.cards.len(), 2);
//!
//! game.stand();
//! assert!(game.state().is_terminal());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, ConfigError, ShoeError};
pub use game::{BLACKJACK_PAYS, DEALER_STANDS_ON, Game, GameState, payout_for};
pub use hand::{Hand, format_cards, sum_cards};
pub use options::{GameOptions, ShoeMode};
pub use result::{FormattedCards, RoundEnd, Stake, Table};
pub use shoe::{MAX_DECKS, Shoe};
