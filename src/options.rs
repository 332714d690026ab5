//! Shuffle and game configuration options.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ShuffleOptionError;

/// How many times each named shuffle is applied to the deck.
///
/// The modified overhand shuffle runs once with its count (the count is the
/// size of the first block it moves), then the mongean shuffle runs `mongean`
/// times.
///
/// ```
/// use bjsim::ShuffleOptions;
///
/// let options = ShuffleOptions::default()
///     .with_modified_overhand(2)
///     .with_mongean(3);
/// assert_eq!(options.modified_overhand, 2);
/// assert_eq!(options.mongean, 3);
/// ```
///
/// It also parses from `name=count` pairs:
///
/// ```
/// use bjsim::ShuffleOptions;
///
/// let options: ShuffleOptions = "modified_overhand=2, mongean=3".parse().unwrap();
/// assert_eq!(options, ShuffleOptions::new(2, 3));
/// assert!("riffle=1".parse::<ShuffleOptions>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShuffleOptions {
    /// Count handed to the modified overhand shuffle.
    pub modified_overhand: usize,
    /// Number of mongean passes.
    pub mongean: usize,
}

impl ShuffleOptions {
    /// Name of the modified overhand shuffle in textual configurations.
    pub const MODIFIED_OVERHAND: &'static str = "modified_overhand";
    /// Name of the mongean shuffle in textual configurations.
    pub const MONGEAN: &'static str = "mongean";

    /// Creates options with both counts.
    #[must_use]
    pub const fn new(modified_overhand: usize, mongean: usize) -> Self {
        Self {
            modified_overhand,
            mongean,
        }
    }

    /// Sets the modified overhand count.
    #[must_use]
    pub const fn with_modified_overhand(mut self, count: usize) -> Self {
        self.modified_overhand = count;
        self
    }

    /// Sets the number of mongean passes.
    #[must_use]
    pub const fn with_mongean(mut self, count: usize) -> Self {
        self.mongean = count;
        self
    }

    /// Returns whether applying these options leaves the deck unchanged.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.modified_overhand == 0 && self.mongean == 0
    }
}

impl FromStr for ShuffleOptions {
    type Err = ShuffleOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self::default();

        for entry in s.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| ShuffleOptionError::MalformedEntry(entry.to_string()))?;
            let (name, value) = (name.trim(), value.trim());

            let count = value
                .parse::<usize>()
                .map_err(|_| ShuffleOptionError::InvalidCount {
                    name: name.to_string(),
                    value: value.to_string(),
                });

            match name {
                Self::MODIFIED_OVERHAND => options.modified_overhand = count?,
                Self::MONGEAN => options.mongean = count?,
                _ => return Err(ShuffleOptionError::UnknownShuffle(name.to_string())),
            }
        }

        Ok(options)
    }
}

impl fmt::Display for ShuffleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={},{}={}",
            Self::MODIFIED_OVERHAND,
            self.modified_overhand,
            Self::MONGEAN,
            self.mongean
        )
    }
}

/// Where each round's shuffle counts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShufflePlan {
    /// Draw both counts uniformly from `0..=max_passes` every round.
    Random {
        /// Largest count drawn.
        max_passes: u8,
    },
    /// Apply the same counts every round.
    Fixed(ShuffleOptions),
}

impl Default for ShufflePlan {
    fn default() -> Self {
        Self::Random { max_passes: 5 }
    }
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::{GameOptions, ShuffleOptions, ShufflePlan};
///
/// let options = GameOptions::default()
///     .with_opening_bet(10)
///     .with_dealer_stand(16)
///     .with_shuffle(ShufflePlan::Fixed(ShuffleOptions::new(2, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Bet placed on the first round of every run.
    pub opening_bet: usize,
    /// Amount the bet rises after a win and falls after a loss.
    pub bet_step: usize,
    /// Floor the bet never falls below after a loss.
    pub min_bet: usize,
    /// Cards that must remain in the deck before a round starts. Values below
    /// four act as four, since the opening deal needs that many.
    pub min_cards: usize,
    /// Score at or above which the dealer stands.
    pub dealer_stand: u8,
    /// Shuffle applied before each round.
    pub shuffle: ShufflePlan,
    /// Directory that receives `game_summary<N>.txt` files, or `None` to skip
    /// writing them.
    #[cfg(feature = "std")]
    pub summary_dir: Option<std::path::PathBuf>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            opening_bet: 5,
            bet_step: 5,
            min_bet: 5,
            min_cards: 4,
            dealer_stand: 17,
            shuffle: ShufflePlan::default(),
            #[cfg(feature = "std")]
            summary_dir: None,
        }
    }
}

impl GameOptions {
    /// Sets the opening bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_opening_bet(20);
    /// assert_eq!(options.opening_bet, 20);
    /// ```
    #[must_use]
    pub const fn with_opening_bet(mut self, bet: usize) -> Self {
        self.opening_bet = bet;
        self
    }

    /// Sets the bet step.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet_step(10);
    /// assert_eq!(options.bet_step, 10);
    /// ```
    #[must_use]
    pub const fn with_bet_step(mut self, step: usize) -> Self {
        self.bet_step = step;
        self
    }

    /// Sets the bet floor.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(1);
    /// assert_eq!(options.min_bet, 1);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, bet: usize) -> Self {
        self.min_bet = bet;
        self
    }

    /// Sets how many cards must remain before a round starts. The opening
    /// deal always needs at least four.
    #[must_use]
    pub const fn with_min_cards(mut self, cards: usize) -> Self {
        self.min_cards = cards;
        self
    }

    /// Sets the dealer's stand score.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stand(18);
    /// assert_eq!(options.dealer_stand, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand(mut self, score: u8) -> Self {
        self.dealer_stand = score;
        self
    }

    /// Sets the shuffle plan.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShufflePlan) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the directory round summaries are appended to.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_summary_dir("game_summaries");
    /// assert!(options.summary_dir.is_some());
    /// ```
    #[cfg(feature = "std")]
    #[must_use]
    pub fn with_summary_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.summary_dir = Some(dir.into());
        self
    }
}
