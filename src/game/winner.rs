use tracing::info;

use crate::hand::BLACKJACK;
use crate::log::LogEvent;
use crate::result::Outcome;

use super::Blackjack;

/// Decides a round from the two final scores.
///
/// A side sitting on exactly 21 beats anything else. Two busts tie, one bust
/// loses, equal scores tie, and otherwise the higher score wins.
///
/// ```
/// use bjsim::{Outcome, game::judge};
///
/// assert_eq!(judge(21, 25), Outcome::PlayerWin);
/// assert_eq!(judge(22, 23), Outcome::Tie);
/// assert_eq!(judge(10, 12), Outcome::DealerWin);
/// ```
#[must_use]
pub const fn judge(player: u8, dealer: u8) -> Outcome {
    let player_bust = player > BLACKJACK;
    let dealer_bust = dealer > BLACKJACK;

    if player == BLACKJACK && dealer != BLACKJACK {
        Outcome::PlayerWin
    } else if dealer == BLACKJACK && player != BLACKJACK {
        Outcome::DealerWin
    } else if player == dealer || (player_bust && dealer_bust) {
        Outcome::Tie
    } else if player_bust {
        Outcome::DealerWin
    } else if dealer_bust || player > dealer {
        Outcome::PlayerWin
    } else {
        Outcome::DealerWin
    }
}

impl Blackjack {
    /// Decides the round, logs the result and settles the wallet.
    ///
    /// A win adds the bet to the wallet and raises the next bet by one step; a
    /// loss takes the bet from the wallet and lowers the next bet by one step,
    /// never below the bet floor. A tie changes neither.
    pub fn determine_winner(&mut self, player_score: u8, dealer_score: u8) -> Outcome {
        let outcome = judge(player_score, dealer_score);

        match outcome {
            Outcome::PlayerWin => {
                self.wallet += self.bet;
                self.bet += self.options.bet_step;
            }
            Outcome::DealerWin => {
                self.wallet = self.wallet.saturating_sub(self.bet);
                if self.bet > self.options.min_bet {
                    self.bet = self
                        .bet
                        .saturating_sub(self.options.bet_step)
                        .max(self.options.min_bet);
                }
            }
            Outcome::Tie => {}
        }

        info!(
            %outcome,
            player_score,
            dealer_score,
            wallet = self.wallet,
            next_bet = self.bet,
            "round settled"
        );
        self.log.push(LogEvent::Outcome {
            outcome,
            player: player_score,
            dealer: dealer_score,
        });

        outcome
    }
}
