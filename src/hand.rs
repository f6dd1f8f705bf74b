//! Hand evaluation and the player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Evaluates a card sequence, returning `(total, is_soft)`.
///
/// Every ace counts 1, then aces are promoted to 11 one at a time while the
/// total stays at or below 21. The hand is soft when a promotion happened.
/// `A-A-9` is therefore soft 21 and `A-A-9-K` is hard 21.
///
/// # Example
///
/// ```
/// use countess::{Card, Suit, hand_value};
///
/// let cards = [Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 6)];
/// assert_eq!(hand_value(&cards), (17, true));
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    let mut is_soft = false;
    while aces > 0 && total <= 11 {
        total += 10;
        aces -= 1;
        is_soft = true;
    }

    (total, is_soft)
}

/// Returns whether the cards are a two-card ace plus ten-value card.
///
/// Split-aces hands are excluded at settlement, not here.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    let [first, second] = cards else {
        return false;
    };
    let (a, b) = (first.value(), second.value());
    (a == 1 && b == 10) || (a == 10 && b == 1)
}

/// Returns whether the cards are two cards of equal value.
///
/// Value-based: `10-J` is a pair.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    matches!(cards, [first, second] if first.value() == second.value())
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the bet on this hand was doubled.
    doubled: bool,
    /// Whether this hand came from splitting a pair of aces.
    split_aces: bool,
}

impl Hand {
    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            doubled: false,
            split_aces: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Splits off the second card, leaving the first card in this hand.
    ///
    /// Returns `None` unless the hand holds exactly two cards.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Calculates the total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    /// Returns whether the hand is a natural that earns the blackjack bonus.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        !self.split_aces && is_blackjack(&self.cards)
    }

    /// Returns whether the hand is a splittable pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        is_pair(&self.cards)
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Marks the bet as doubled.
    pub const fn mark_doubled(&mut self) {
        self.doubled = true;
    }

    /// Returns whether the hand came from splitting aces.
    #[must_use]
    pub const fn is_split_aces(&self) -> bool {
        self.split_aces
    }

    /// Marks the hand as a split-aces hand.
    pub const fn mark_split_aces(&mut self) {
        self.split_aces = true;
    }

    /// Returns the bet multiplier (2 when doubled).
    #[must_use]
    pub const fn bet_multiplier(&self) -> f64 {
        if self.doubled { 2.0 } else { 1.0 }
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
}
