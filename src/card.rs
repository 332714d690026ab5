//! Card types and rendering.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::CardError;

/// Card suit.
///
/// The declaration order is the tie-break precedence used when two cards
/// share a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in precedence order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Lowercase suit name, as used in the round log.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }

    /// Suit symbol drawn in the middle of the card art.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownSuit(s.to_string()))
    }
}

/// Card rank, ordered from Two up to Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Builds a rank from its number, where 11 to 14 are Jack, Queen, King
    /// and Ace.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] outside `2..=14`.
    pub const fn from_number(number: u8) -> Result<Self, CardError> {
        match number {
            2..=14 => Ok(Self::ALL[(number - 2) as usize]),
            _ => Err(CardError::InvalidRank(number)),
        }
    }

    /// The rank's number, 2 through 14.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 2
    }

    /// Points counted toward a hand score, with an Ace taken low.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self.number(),
        }
    }

    /// Label shown on the card: the number, or `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if let Ok(number) = label.parse::<u8>() {
            // Face cards go by their letter, so only 2..=10 parse here.
            if number <= 10 {
                return Self::from_number(number);
            }
            return Err(CardError::UnknownRank(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}

/// A playing card.
///
/// Cards compare and hash by rank and suit only; visibility is display state.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    visible: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            visible: true,
        }
    }

    /// Creates a face-up card from a numeric rank (11 to 14 for faces).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] outside `2..=14`.
    pub fn from_number(number: u8, suit: Suit) -> Result<Self, CardError> {
        Rank::from_number(number).map(|rank| Self::new(rank, suit))
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Turns the card face up or face down.
    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns the four-line ASCII drawing of the card.
    #[must_use]
    pub const fn art(&self) -> CardArt<'_> {
        CardArt(self)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

/// Renders as `(rank, suit)`, or `(?, ?)` while face down.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.visible {
            write!(f, "({}, {})", self.rank, self.suit)
        } else {
            f.write_str("(?, ?)")
        }
    }
}

/// ASCII drawing of a card, see [`Card::art`].
///
/// ```text
/// ____
/// |A  |
/// | ♠ |
/// |__A|
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CardArt<'a>(&'a Card);

impl fmt::Display for CardArt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        if card.visible {
            let rank = card.rank.label();
            write!(
                f,
                "____\n|{rank}  |\n| {} |\n|__{rank}|",
                card.suit.symbol()
            )
        } else {
            f.write_str("____\n|?  |\n| ? |\n|__?|")
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
