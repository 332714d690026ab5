//! Session state and round orchestration.

use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::log::{GameLog, LogEvent};
use crate::options::GameOptions;
use crate::result::RoundRecord;
#[cfg(feature = "std")]
use crate::summary::SummaryWriter;

mod round;
pub mod state;
mod winner;

pub use crate::result::RunOutcome;
pub use state::RoundPhase;
pub use winner::judge;

/// Game numbers handed out to sessions, process-wide.
static NEXT_GAME_NUMBER: AtomicUsize = AtomicUsize::new(1);

/// A blackjack session: one automated player against the dealer, with a
/// wallet, an escalating bet and a text log.
///
/// The session owns the deck for its whole life; cards dealt in one round are
/// gone for the next. Hands are replaced at the start of every round.
#[derive(Debug)]
pub struct Blackjack {
    options: GameOptions,
    wallet: usize,
    bet: usize,
    round: usize,
    game_number: usize,
    deck: Deck,
    player_hand: Hand,
    dealer_hand: Hand,
    phase: RoundPhase,
    log: GameLog,
    history: Vec<RoundRecord>,
    rng: ChaCha8Rng,
    #[cfg(feature = "std")]
    summary: Option<SummaryWriter>,
}

impl Blackjack {
    /// Creates a session with `wallet` to spend and a fresh sorted deck.
    ///
    /// `seed` drives the per-round shuffle counts when the shuffle plan is
    /// random.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Blackjack, GameOptions};
    ///
    /// let game = Blackjack::new(10, GameOptions::default(), 42);
    /// assert_eq!(game.wallet(), 10);
    /// assert_eq!(game.bet(), 5);
    /// ```
    #[must_use]
    pub fn new(wallet: usize, options: GameOptions, seed: u64) -> Self {
        let game_number = NEXT_GAME_NUMBER.fetch_add(1, Ordering::SeqCst);

        Self {
            #[cfg(feature = "std")]
            summary: options
                .summary_dir
                .as_deref()
                .map(|dir| SummaryWriter::new(dir, game_number)),
            wallet,
            bet: options.opening_bet,
            round: 1,
            game_number,
            deck: Deck::new(),
            player_hand: Hand::player(),
            dealer_hand: Hand::dealer(),
            phase: RoundPhase::Idle,
            log: GameLog::new(),
            history: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
        }
    }

    /// Calculates the best score of `hand`; see [`crate::hand::calculate_score`].
    #[must_use]
    pub fn calculate_score(hand: &Hand) -> u8 {
        hand.score()
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current wallet.
    #[must_use]
    pub const fn wallet(&self) -> usize {
        self.wallet
    }

    /// Returns the bet for the next round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the number the next round will carry.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Returns this session's game number.
    #[must_use]
    pub const fn game_number(&self) -> usize {
        self.game_number
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck mutably, e.g. to stack it.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the player's hand from the latest round.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand from the latest round.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns every finished round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Returns the summary file this session appends to, if any.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn summary_path(&self) -> Option<&std::path::Path> {
        self.summary.as_ref().map(SummaryWriter::path)
    }

    /// Returns the rendered log.
    #[must_use]
    pub fn get_log(&self) -> String {
        self.log.text()
    }

    /// Returns the logged events.
    #[must_use]
    pub fn log_events(&self) -> &[LogEvent] {
        self.log.events()
    }

    /// Clears the log.
    pub fn reset_log(&mut self) {
        self.log.clear();
    }
}
