//! Rebuilding a round from its event trace.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ReplayError;
use crate::event::{RoundEvent, Seat};
use crate::game::settle;
use crate::hand::Hand;
use crate::result::{Outcome, Settlement};

/// A round reconstructed purely from its events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReplayedRound {
    /// Dealer cards in deal order, hole card second.
    pub dealer_cards: Vec<Card>,
    /// Player hands with their doubled and split-aces flags.
    pub hands: Vec<Hand>,
    /// Per-hand `(outcome, net)` as recorded at settlement.
    pub settled: Vec<(Outcome, f64)>,
    /// Aggregate outcome, if the trace reached settlement.
    pub outcome: Option<Outcome>,
    /// Round profit, if the trace reached settlement.
    pub profit: Option<f64>,
    /// Number of reshuffles recorded.
    pub shuffles: usize,
}

impl ReplayedRound {
    /// Folds the events in order.
    ///
    /// # Errors
    ///
    /// Returns an error if an event refers to state the earlier events never
    /// established.
    pub fn from_events(events: &[RoundEvent]) -> Result<Self, ReplayError> {
        let mut round = Self::default();
        let mut hole_pending = false;

        for event in events {
            match *event {
                RoundEvent::Shuffle { .. } => round.shuffles += 1,
                RoundEvent::Deal {
                    to: Seat::Dealer,
                    card,
                } => match card {
                    Some(card) => round.dealer_cards.push(card),
                    None => hole_pending = true,
                },
                RoundEvent::Deal {
                    to: Seat::Player(index),
                    card,
                } => {
                    let card = card.ok_or(ReplayError::HiddenPlayerCard)?;
                    if index == round.hands.len() {
                        round.hands.push(Hand::new(Vec::new()));
                    }
                    round
                        .hands
                        .get_mut(index)
                        .ok_or(ReplayError::UnknownHand(index))?
                        .add_card(card);
                }
                RoundEvent::Hit { hand } | RoundEvent::Stand { hand } => {
                    if hand >= round.hands.len() {
                        return Err(ReplayError::UnknownHand(hand));
                    }
                }
                RoundEvent::Double { hand } => round
                    .hands
                    .get_mut(hand)
                    .ok_or(ReplayError::UnknownHand(hand))?
                    .mark_doubled(),
                RoundEvent::Split { hand, new_hand } => round.split(hand, new_hand)?,
                RoundEvent::Reveal { card } => {
                    if !hole_pending {
                        return Err(ReplayError::MissingHoleCard);
                    }
                    hole_pending = false;
                    round.dealer_cards.insert(1.min(round.dealer_cards.len()), card);
                }
                RoundEvent::DealerHit { card } => round.dealer_cards.push(card),
                RoundEvent::HandSettled { outcome, net, .. } => round.settled.push((outcome, net)),
                RoundEvent::Settle { outcome, profit } => {
                    round.outcome = Some(outcome);
                    round.profit = Some(profit);
                }
            }
        }

        Ok(round)
    }

    fn split(&mut self, hand: usize, new_hand: usize) -> Result<(), ReplayError> {
        if new_hand != self.hands.len() {
            return Err(ReplayError::UnknownHand(new_hand));
        }
        let source = self
            .hands
            .get_mut(hand)
            .ok_or(ReplayError::UnknownHand(hand))?;
        let second = source
            .take_split_card()
            .ok_or(ReplayError::InvalidSplit(hand))?;

        if second.is_ace() {
            source.mark_split_aces();
            let mut split_hand = Hand::new(alloc::vec![second]);
            split_hand.mark_split_aces();
            self.hands.push(split_hand);
        } else {
            self.hands.push(Hand::new(alloc::vec![second]));
        }
        Ok(())
    }

    /// Settles the reconstructed hands again from scratch.
    #[must_use]
    pub fn resettle(&self, bet: f64, blackjack_pays: f64) -> Settlement {
        settle(&self.hands, &self.dealer_cards, bet, blackjack_pays)
    }
}
