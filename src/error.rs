//! Error types for card, shuffle, deal and game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while building a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Numeric rank outside `2..=14`.
    #[error("invalid numeric rank {0}, expected 2..=14")]
    InvalidRank(u8),
    /// Rank label that is neither a number nor one of `J`, `Q`, `K`, `A`.
    #[error("unknown rank label `{0}`")]
    UnknownRank(String),
    /// Suit name that is not one of clubs, diamonds, hearts or spades.
    #[error("unknown suit `{0}`")]
    UnknownSuit(String),
}

/// Errors that can occur while parsing a shuffle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShuffleOptionError {
    /// The shuffle name is not recognized.
    #[error("unknown shuffle `{0}`, expected `modified_overhand` or `mongean`")]
    UnknownShuffle(String),
    /// The repetition count is not a non-negative integer.
    #[error("invalid repetition count `{value}` for `{name}`")]
    InvalidCount {
        /// Shuffle the count was given for.
        name: String,
        /// The rejected count.
        value: String,
    },
    /// An entry is not of the form `name=count`.
    #[error("malformed shuffle entry `{0}`, expected `name=count`")]
    MalformedEntry(String),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while writing round summaries.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The summary file could not be created or appended to.
    #[error("failed to write round summary to {}", path.display())]
    Io {
        /// File that was being written.
        path: std::path::PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can abort a multi-round run.
///
/// Running out of cards or money is not an error; those end the run through
/// [`RunOutcome`](crate::game::RunOutcome).
#[derive(Debug, Error)]
pub enum GameError {
    /// A card could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A round summary could not be persisted.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
