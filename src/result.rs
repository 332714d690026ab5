//! Round and run result types.

use core::fmt;

use crate::hand::Hand;

/// Who won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player won.
    PlayerWin,
    /// The dealer won.
    DealerWin,
    /// Nobody won.
    Tie,
}

impl Outcome {
    /// `1` for a player win, `-1` for a dealer win, `0` for a tie.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::PlayerWin => 1,
            Self::DealerWin => -1,
            Self::Tie => 0,
        }
    }

    /// Winner label written to round summaries.
    #[must_use]
    pub const fn winner_label(self) -> &'static str {
        match self {
            Self::PlayerWin => "Player",
            Self::DealerWin => "Dealer",
            Self::Tie => "Tied",
        }
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> Self {
        outcome.sign()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.winner_label())
    }
}

/// A finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// Round number within the session, starting at 1.
    pub round: usize,
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand, revealed.
    pub dealer: Hand,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Who won.
    pub outcome: Outcome,
    /// Wallet after the round settled.
    pub wallet: usize,
}

/// How a call to [`Blackjack::play_round`](crate::Blackjack::play_round) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    /// Every requested round was played.
    Completed,
    /// The deck ran too low to start another round.
    NotEnoughCards,
    /// The wallet could not cover the bet.
    InsufficientFunds,
}
