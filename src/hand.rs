//! Player and dealer hands.

use core::fmt;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Score of a natural blackjack, and the bust limit.
pub const BLACKJACK: u8 = 21;

/// Extra points an Ace earns when it counts as 11 rather than 1.
const ACE_BONUS: u8 = 10;

/// Calculates the best score of a set of cards.
///
/// Jacks, Queens and Kings count 10 and numbered cards their number. Every
/// Ace counts 1, except that one Ace is raised to 11 when that keeps the total
/// at or below 21; two Aces can never both count 11 without busting. An empty
/// set scores 0. Visibility is ignored.
///
/// ```
/// use bjsim::{Card, Rank, Suit, hand::calculate_score};
///
/// let aces = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)];
/// assert_eq!(calculate_score(&aces), 12);
/// ```
#[must_use]
pub fn calculate_score(cards: &[Card]) -> u8 {
    let low = cards
        .iter()
        .fold(0_u8, |total, card| total.saturating_add(card.rank.points()));
    let has_ace = cards.iter().any(|card| card.rank == Rank::Ace);

    if has_ace && low <= BLACKJACK - ACE_BONUS {
        low + ACE_BONUS
    } else {
        low
    }
}

/// Who holds a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The player: every card face up, stands at a caller-chosen score.
    Player,
    /// The dealer: second card dealt face down, stands at a fixed score.
    Dealer,
}

impl Role {
    /// Name used in the round log.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }

    /// Score at or above which this role stops drawing.
    ///
    /// The player follows `player_threshold`; the dealer always follows
    /// `dealer_stand`.
    #[must_use]
    pub const fn stand_threshold(self, player_threshold: u8, dealer_stand: u8) -> u8 {
        match self {
            Self::Player => player_threshold,
            Self::Dealer => dealer_stand,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cards held by the player or the dealer, in the order they were dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    role: Role,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand for `role`.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    /// Creates an empty player hand.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(Role::Player)
    }

    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Role::Dealer)
    }

    /// Returns who holds the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Adds a card to the hand.
    ///
    /// A dealer's second card goes in face down; every other card goes in
    /// face up.
    pub fn add_card(&mut self, mut card: Card) {
        let hole = self.role == Role::Dealer && self.cards.len() == 1;
        card.set_visible(!hole);
        self.cards.push(card);
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.set_visible(true);
        }
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|card| !card.is_visible())
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns a copy of the cards in card order, lowest first.
    #[must_use]
    pub fn sort_hand(&self) -> Vec<Card> {
        let mut sorted = self.cards.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Calculates the best score of the hand, face-down cards included.
    #[must_use]
    pub fn score(&self) -> u8 {
        calculate_score(&self.sort_hand())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the ASCII drawings of the cards, one below the other.
    #[must_use]
    pub const fn art(&self) -> HandArt<'_> {
        HandArt(self)
    }
}

/// Renders the cards as `(rank, suit)` tuples separated by spaces.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.cards, " ", |f, card| write!(f, "{card}"))
    }
}

/// ASCII drawing of a hand, see [`Hand::art`].
#[derive(Debug, Clone, Copy)]
pub struct HandArt<'a>(&'a Hand);

impl fmt::Display for HandArt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0.cards, "\n", |f, card| write!(f, "{}", card.art()))
    }
}

pub(crate) fn write_joined(
    f: &mut fmt::Formatter<'_>,
    cards: &[Card],
    separator: &str,
    mut write_card: impl FnMut(&mut fmt::Formatter<'_>, &Card) -> fmt::Result,
) -> fmt::Result {
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write_card(f, card)?;
    }
    Ok(())
}
