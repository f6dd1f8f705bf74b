//! The ordered event trace of a round.
//!
//! Every state change in a round appends exactly one [`RoundEvent`] before the
//! next change happens, so consumers can rebuild the round by folding over
//! the trace (see [`crate::replay`]).

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Outcome;

/// Where a dealt card lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// A player hand, by index into the round's hand list.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// A single recorded action of a round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// The shoe was reshuffled.
    Shuffle {
        /// `true` when the shoe ran dry inside a round.
        mid_round: bool,
    },
    /// A card was dealt from the shoe.
    Deal {
        /// Receiving seat.
        to: Seat,
        /// The card, or `None` for the dealer's face-down hole card.
        card: Option<Card>,
    },
    /// The player hit a hand; the card follows as a [`RoundEvent::Deal`].
    Hit {
        /// Hand index.
        hand: usize,
    },
    /// The player stood on a hand.
    Stand {
        /// Hand index.
        hand: usize,
    },
    /// The player doubled a hand; the card follows as a [`RoundEvent::Deal`].
    Double {
        /// Hand index.
        hand: usize,
    },
    /// The player split a pair.
    ///
    /// The second card moves to `new_hand`; one card is then dealt to each
    /// hand, `hand` first.
    Split {
        /// Hand that was split.
        hand: usize,
        /// Index of the hand created by the split.
        new_hand: usize,
    },
    /// The dealer turned over the hole card.
    Reveal {
        /// The hole card.
        card: Card,
    },
    /// The dealer drew a card.
    DealerHit {
        /// The drawn card.
        card: Card,
    },
    /// A hand was settled.
    HandSettled {
        /// Hand index.
        hand: usize,
        /// Outcome of the hand.
        outcome: Outcome,
        /// Signed result of the hand.
        net: f64,
    },
    /// The round was settled.
    Settle {
        /// Aggregate outcome label.
        outcome: Outcome,
        /// Sum of every hand's signed result.
        profit: f64,
    },
}

/// The trace of a round together with the final table layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTrace {
    /// Ordered events.
    pub events: Vec<RoundEvent>,
    /// Dealer cards, hole card second.
    pub dealer_cards: Vec<Card>,
    /// Final player hands.
    pub player_hands: Vec<Hand>,
    /// Cards left in the shoe after the round.
    pub shoe_remaining: usize,
    /// Whether the shoe was reshuffled before the deal.
    pub reshuffled: bool,
}
