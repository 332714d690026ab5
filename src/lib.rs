//! A multi-round blackjack simulator with optional `no_std` support.
//!
//! The crate provides a [`Blackjack`] session that plays automated rounds
//! against the dealer, tracks a wallet and an escalating bet, and keeps a text
//! log of everything dealt. Decks are reordered by two deterministic shuffles,
//! the modified overhand and the mongean, found in [`shuffle`].
//!
//! # Example
//!
//! ```
//! use bjsim::{Blackjack, GameOptions, RunOutcome};
//!
//! let mut game = Blackjack::new(10, GameOptions::default(), 42);
//! let outcome = game.play_round(3, 17).unwrap();
//! assert_ne!(outcome, RunOutcome::NotEnoughCards);
//! println!("{}", game.get_log());
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
pub mod log;
pub mod options;
pub mod result;
pub mod shuffle;
#[cfg(feature = "std")]
pub mod summary;

// Re-export main types
pub use card::{Card, CardArt, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::SummaryError;
pub use error::{CardError, DealError, GameError, ShuffleOptionError};
pub use game::{Blackjack, RoundPhase};
pub use hand::{Hand, HandArt, Role, calculate_score};
pub use log::{GameLog, LogEvent};
pub use options::{GameOptions, ShuffleOptions, ShufflePlan};
pub use result::{Outcome, RoundRecord, RunOutcome};
