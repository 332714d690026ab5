use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{DealError, GameError};
use crate::hand::{Hand, Role};
use crate::log::LogEvent;
use crate::options::{ShuffleOptions, ShufflePlan};
use crate::result::{RoundRecord, RunOutcome};

use super::{Blackjack, RoundPhase};

/// Cards dealt before either side draws.
const OPENING_DEAL: usize = 4;

impl Blackjack {
    /// Plays up to `num_rounds` rounds, the player standing once their score
    /// reaches `stand_threshold`.
    ///
    /// The bet restarts at the opening bet on every call. The run stops early,
    /// with a log line, when fewer than the minimum number of cards (never
    /// less than the four of the opening deal) remain before a round or the wallet cannot cover the bet; neither touches the
    /// wallet or the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a card cannot be dealt or a round summary cannot be
    /// written.
    pub fn play_round(
        &mut self,
        num_rounds: usize,
        stand_threshold: u8,
    ) -> Result<RunOutcome, GameError> {
        self.bet = self.options.opening_bet;

        for _ in 0..num_rounds {
            if self.deck.len() < self.options.min_cards.max(OPENING_DEAL) {
                warn!(remaining = self.deck.len(), "not enough cards for a game");
                self.log.push(LogEvent::NotEnoughCards);
                return Ok(RunOutcome::NotEnoughCards);
            }

            if self.wallet < self.bet {
                warn!(wallet = self.wallet, bet = self.bet, "wallet cannot cover bet");
                self.log.push(LogEvent::InsufficientFunds {
                    wallet: self.wallet,
                    bet: self.bet,
                });
                return Ok(RunOutcome::InsufficientFunds);
            }

            self.play_single_round(stand_threshold)?;
        }

        Ok(RunOutcome::Completed)
    }

    /// Deals `role` cards until its score reaches its stand threshold or the
    /// deck runs out, logging every card pulled.
    ///
    /// The player stands at `stand_threshold`, the dealer at the configured
    /// dealer stand score.
    ///
    /// # Errors
    ///
    /// Returns an error if a card cannot be dealt.
    pub fn hit_or_stand(&mut self, role: Role, stand_threshold: u8) -> Result<(), DealError> {
        let threshold = role.stand_threshold(stand_threshold, self.options.dealer_stand);

        loop {
            if self.hand(role).score() >= threshold {
                return Ok(());
            }
            let Some(&card) = self.deck.peek() else {
                return Ok(());
            };

            debug!(%role, %card, "pulling card");
            self.log.push(LogEvent::Pulled { role, card });

            let hand = match role {
                Role::Player => &mut self.player_hand,
                Role::Dealer => &mut self.dealer_hand,
            };
            self.deck.deal_hand(hand)?;
        }
    }

    fn hand(&self, role: Role) -> &Hand {
        match role {
            Role::Player => &self.player_hand,
            Role::Dealer => &self.dealer_hand,
        }
    }

    fn play_single_round(&mut self, stand_threshold: u8) -> Result<(), GameError> {
        let round = self.round;
        info!(round, wallet = self.wallet, bet = self.bet, "starting round");

        self.log.push(LogEvent::RoundStart { round });
        self.log.push(LogEvent::Wallet(self.wallet));
        self.log.push(LogEvent::Bet(self.bet));

        let shuffle = self.next_shuffle();
        self.deck.shuffle(&shuffle);

        self.phase = RoundPhase::Dealing;
        self.player_hand = Hand::player();
        self.dealer_hand = Hand::dealer();
        for _ in 0..2 {
            self.deck.deal_hand(&mut self.player_hand)?;
            self.deck.deal_hand(&mut self.dealer_hand)?;
        }
        self.log.push(LogEvent::Dealt {
            role: Role::Player,
            cards: self.player_hand.cards().to_vec(),
        });
        self.log.push(LogEvent::Dealt {
            role: Role::Dealer,
            cards: self.dealer_hand.cards().to_vec(),
        });

        self.phase = RoundPhase::PlayerTurn;
        self.hit_or_stand(Role::Player, stand_threshold)?;

        self.phase = RoundPhase::DealerTurn;
        self.dealer_hand.reveal();
        self.log.push(LogEvent::Revealed {
            cards: self.dealer_hand.cards().to_vec(),
        });
        self.hit_or_stand(Role::Dealer, stand_threshold)?;

        let player_score = self.player_hand.score();
        let dealer_score = self.dealer_hand.score();
        let outcome = self.determine_winner(player_score, dealer_score);
        self.phase = RoundPhase::Settled;

        let record = RoundRecord {
            round,
            player: self.player_hand.clone(),
            dealer: self.dealer_hand.clone(),
            player_score,
            dealer_score,
            outcome,
            wallet: self.wallet,
        };

        #[cfg(feature = "std")]
        if let Some(summary) = &self.summary {
            summary.append(&record)?;
        }

        self.history.push(record);
        self.round += 1;
        Ok(())
    }

    fn next_shuffle(&mut self) -> ShuffleOptions {
        match self.options.shuffle {
            ShufflePlan::Fixed(options) => options,
            ShufflePlan::Random { max_passes } => ShuffleOptions::new(
                usize::from(self.rng.random_range(0..=max_passes)),
                usize::from(self.rng.random_range(0..=max_passes)),
            ),
        }
    }
}
