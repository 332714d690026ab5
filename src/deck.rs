//! The 52-card deck.

use alloc::vec::Vec;

use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::ShuffleOptions;
use crate::shuffle;

/// An ordered deck of cards. Index 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck sorted by rank, with suits in precedence order
    /// within each rank: `2♣ 2♦ 2♥ 2♠ 3♣ ... A♠`.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly `cards`, top first.
    ///
    /// Useful for replaying a known order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the top card without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Reorders the deck: the modified overhand shuffle once with its count,
    /// then `options.mongean` mongean passes.
    pub fn shuffle(&mut self, options: &ShuffleOptions) {
        debug!(
            modified_overhand = options.modified_overhand,
            mongean = options.mongean,
            "shuffling deck"
        );

        shuffle::modified_overhand(&mut self.cards, options.modified_overhand);
        for _ in 0..options.mongean {
            shuffle::mongean(&mut self.cards);
        }
    }

    /// Removes the top card and appends it to `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal_hand(&mut self, hand: &mut Hand) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::EmptyDeck);
        }

        let card = self.cards.remove(0);
        hand.add_card(card);
        Ok(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
