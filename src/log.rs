//! Append-only text log of a blackjack session.

use core::fmt;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{Role, write_joined};
use crate::result::Outcome;

/// One line of the session log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    /// `Round N of Blackjack!`
    RoundStart {
        /// Round number.
        round: usize,
    },
    /// `wallet: N`
    Wallet(usize),
    /// `bet: N`
    Bet(usize),
    /// `Player Cards: ...` or `Dealer Cards: ...` after the initial deal.
    Dealt {
        /// Whose cards.
        role: Role,
        /// Snapshot of the hand, face-down cards included.
        cards: Vec<Card>,
    },
    /// `Dealer Cards Revealed: ...`
    Revealed {
        /// Snapshot of the revealed dealer hand.
        cards: Vec<Card>,
    },
    /// `Player pulled a (rank, suit)` or `Dealer pulled a (rank, suit)`
    Pulled {
        /// Who drew.
        role: Role,
        /// The card drawn.
        card: Card,
    },
    /// The closing sentence of a round.
    Outcome {
        /// Who won.
        outcome: Outcome,
        /// Player score.
        player: u8,
        /// Dealer score.
        dealer: u8,
    },
    /// `Not enough cards for a game.`
    NotEnoughCards,
    /// `Wallet amount $W is less than bet amount $B.`
    InsufficientFunds {
        /// Wallet at the time.
        wallet: usize,
        /// Bet that could not be covered.
        bet: usize,
    },
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStart { round } => write!(f, "Round {round} of Blackjack!"),
            Self::Wallet(amount) => write!(f, "wallet: {amount}"),
            Self::Bet(amount) => write!(f, "bet: {amount}"),
            Self::Dealt { role, cards } => {
                write!(f, "{role} Cards: ")?;
                write_joined(f, cards, " ", |f, card| write!(f, "{card}"))
            }
            Self::Revealed { cards } => {
                f.write_str("Dealer Cards Revealed: ")?;
                write_joined(f, cards, " ", |f, card| write!(f, "{card}"))
            }
            Self::Pulled { role, card } => write!(f, "{role} pulled a {card}"),
            Self::Outcome {
                outcome,
                player,
                dealer,
            } => match outcome {
                Outcome::PlayerWin => write!(
                    f,
                    "Player won with a score of {player}. Dealer lost with a score of {dealer}."
                ),
                Outcome::DealerWin => write!(
                    f,
                    "Player lost with a score of {player}. Dealer won with a score of {dealer}."
                ),
                Outcome::Tie => f.write_str("Player and Dealer tie."),
            },
            Self::NotEnoughCards => f.write_str("Not enough cards for a game."),
            Self::InsufficientFunds { wallet, bet } => write!(
                f,
                "Wallet amount ${wallet} is less than bet amount ${bet}."
            ),
        }
    }
}

/// Ordered, append-only sequence of [`LogEvent`]s.
///
/// Renders as one line per event, each terminated by a newline. This
/// includes the two lines that end a run early (`Not enough cards for a
/// game.` and the insufficient-funds line), so a log that keeps growing
/// across runs never joins two messages on one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameLog {
    events: Vec<LogEvent>,
}

impl GameLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event.
    pub fn push(&mut self, event: LogEvent) {
        self.events.push(event);
    }

    /// Returns the events in order.
    #[must_use]
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }

    /// Returns whether nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes every event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Renders the log to text.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}
