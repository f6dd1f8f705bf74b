//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Outcome of a hand, or the aggregate label of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    #[serde(rename = "WIN")]
    Win,
    /// Player loses (player busts, dealer blackjack or dealer has higher value).
    #[serde(rename = "LOSE")]
    Lose,
    /// Push (tie).
    #[serde(rename = "PUSH")]
    Push,
    /// Player has a natural blackjack.
    #[serde(rename = "BJ")]
    Blackjack,
}

impl Outcome {
    /// Derives the round label from the per-hand outcomes.
    ///
    /// Precedence is blackjack, then win, then lose, with push as the
    /// fallback. A round mixing pushes and losses is labelled a loss.
    #[must_use]
    pub fn aggregate<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let (mut win, mut lose) = (false, false);
        for outcome in outcomes {
            match outcome {
                Self::Blackjack => return Self::Blackjack,
                Self::Win => win = true,
                Self::Lose => lose = true,
                Self::Push => {}
            }
        }

        if win {
            Self::Win
        } else if lose {
            Self::Lose
        } else {
            Self::Push
        }
    }

    /// Returns the short label used in exported records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Push => "PUSH",
            Self::Blackjack => "BJ",
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The effective bet on this hand (doubled hands carry twice the base bet).
    pub bet: f64,
    /// Signed result of the hand.
    pub net: f64,
    /// The player's final hand total.
    pub total: u8,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Sum of every hand's signed result.
    pub profit: f64,
    /// The base bet of the round.
    pub bet: f64,
    /// Aggregate outcome label.
    pub outcome: Outcome,
    /// The dealer's final hand total.
    pub dealer_total: u8,
    /// Number of hands played (more than one after splits).
    pub player_hands: usize,
    /// Results for each hand.
    pub hands: Vec<HandResult>,
}

/// Settlement of a set of hands against the dealer's final cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Results for each hand.
    pub hands: Vec<HandResult>,
    /// Sum of every hand's signed result.
    pub profit: f64,
    /// Aggregate outcome label.
    pub outcome: Outcome,
    /// The dealer's final hand total.
    pub dealer_total: u8,
}
