//! Fixed basic strategy for a six-deck, dealer-stands-on-soft-17 game.
//!
//! The table is stateless: the same cards against the same upcard always
//! produce the same [`Action`].

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::{hand_value, is_pair};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

/// Looks up the action for `player` against `upcard`.
///
/// Pairs are consulted first, then soft totals, then hard totals. The table
/// may answer [`Action::Double`] or [`Action::Split`] for hands where the
/// move is no longer available; the caller treats those as a hit.
///
/// # Example
///
/// ```
/// use countess::{Action, Card, Suit, decide};
///
/// let hand = [Card::new(Suit::Spades, 10), Card::new(Suit::Hearts, 6)];
/// let upcard = Card::new(Suit::Clubs, 13);
/// assert_eq!(decide(&hand, upcard), Action::Hit);
/// ```
#[must_use]
pub fn decide(player: &[Card], upcard: Card) -> Action {
    let up = upcard.value();

    if is_pair(player) {
        if let Some(action) = pair_action(player[0].value(), up) {
            return action;
        }
    }

    let (total, soft) = hand_value(player);
    if soft {
        soft_action(total, up)
    } else {
        hard_action(total, up)
    }
}

fn pair_action(pair: u8, up: u8) -> Option<Action> {
    let action = match pair {
        1 | 8 => Action::Split,
        10 => Action::Stand,
        9 => split_if(matches!(up, 2..=6 | 8 | 9)),
        7 | 2 | 3 => split_if((2..=7).contains(&up)),
        6 => split_if((2..=6).contains(&up)),
        5 => double_if((2..=9).contains(&up)),
        4 => split_if(matches!(up, 5 | 6)),
        _ => return None,
    };
    Some(action)
}

fn soft_action(total: u8, up: u8) -> Action {
    match total {
        13 | 14 => double_if(matches!(up, 5 | 6)),
        15 | 16 => double_if((4..=6).contains(&up)),
        17 => double_if((3..=6).contains(&up)),
        18 => match up {
            3..=6 => Action::Double,
            2 | 7 | 8 => Action::Stand,
            _ => Action::Hit,
        },
        19.. => Action::Stand,
        _ => Action::Hit,
    }
}

fn hard_action(total: u8, up: u8) -> Action {
    match total {
        ..=8 => Action::Hit,
        9 => double_if((3..=6).contains(&up)),
        10 => double_if((2..=9).contains(&up)),
        11 => double_if(up != 1),
        12 => stand_if((4..=6).contains(&up)),
        13..=16 => stand_if((2..=6).contains(&up)),
        _ => Action::Stand,
    }
}

const fn split_if(split: bool) -> Action {
    if split { Action::Split } else { Action::Hit }
}

const fn double_if(double: bool) -> Action {
    if double { Action::Double } else { Action::Hit }
}

const fn stand_if(stand: bool) -> Action {
    if stand { Action::Stand } else { Action::Hit }
}
