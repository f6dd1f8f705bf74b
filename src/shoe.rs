//! The multi-deck shoe and its reshuffle policy.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ConfigError;

/// A draw pool of one or more decks with a cursor.
///
/// The shoe owns its random number generator: every [`Shoe::shuffle`] call
/// consumes exactly one permutation from it and [`Shoe::deal`] consumes none,
/// so a given seed always yields the same sequence of cards.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if `decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use countess::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::new(6, 7).unwrap();
    /// assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
    /// ```
    pub fn new(decks: u8, seed: u64) -> Result<Self, ConfigError> {
        if decks == 0 {
            return Err(ConfigError::NoDecks);
        }

        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        let mut shoe = Self {
            cards,
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.shuffle();
        Ok(shoe)
    }

    /// Creates a stacked shoe that deals `cards` in order.
    ///
    /// The cards are not shuffled until the shoe is reshuffled, at which
    /// point the generator seeded from `seed` takes over.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShoe`] if `cards` is empty.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Result<Self, ConfigError> {
        if cards.is_empty() {
            return Err(ConfigError::EmptyShoe);
        }

        Ok(Self {
            cards,
            cursor: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Randomly permutes every card in the shoe and resets the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
    }

    /// Deals the card under the cursor.
    ///
    /// Returns `None` once every card has been dealt.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        trace!(%card, remaining = self.remaining(), "dealt");
        Some(card)
    }

    /// Returns whether fewer than `(1 - penetration)` of the cards remain.
    ///
    /// The reserve is rounded down, so a penetration of `0.75` on a
    /// six-deck shoe reshuffles once fewer than 78 cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let reserve = (self.cards.len() as f64 * (1.0 - penetration)) as usize;
        self.remaining() < reserve
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    ///
    /// Always `false` for shoes built through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
