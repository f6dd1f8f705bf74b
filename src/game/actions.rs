use tracing::trace;

use crate::card::Card;
use crate::event::{RoundEvent, Seat};
use crate::hand::Hand;
use crate::strategy::{Action, decide};

use super::{Round, Table};

impl Table {
    /// Plays every player hand in order.
    ///
    /// Splits append hands to the end of the list, so the loop picks them up
    /// in the same forward pass.
    pub(super) fn play_hands(&mut self, round: &mut Round) {
        let up_card = round.dealer[0];
        let mut index = 0;
        while index < round.hands.len() {
            self.play_hand(round, index, up_card);
            index += 1;
        }
    }

    /// Split-aces hands that already hold their second card are skipped on
    /// entry. The hand that was split keeps playing in the same loop.
    fn play_hand(&mut self, round: &mut Round, index: usize, up_card: Card) {
        let entering = &round.hands[index];
        if entering.is_split_aces() && entering.len() >= 2 {
            trace!(hand = index, "split aces, no further action");
            return;
        }

        loop {
            let hand = &round.hands[index];
            if hand.value() >= 21 {
                return;
            }

            let action = decide(hand.cards(), up_card);
            let two_cards = hand.len() == 2;
            let pair = hand.is_pair();
            trace!(hand = index, total = hand.value(), ?action, "decision");

            match action {
                Action::Split if pair && round.splits < self.rules.max_splits => {
                    self.split(round, index);
                }
                Action::Double if two_cards => {
                    self.double_down(round, index);
                    return;
                }
                Action::Stand => {
                    round.events.push(RoundEvent::Stand { hand: index });
                    return;
                }
                // Double or split that is no longer available plays as a hit.
                Action::Hit | Action::Double | Action::Split => self.hit(round, index),
            }
        }
    }

    fn hit(&mut self, round: &mut Round, index: usize) {
        round.events.push(RoundEvent::Hit { hand: index });
        self.deal_to(round, index);
    }

    fn double_down(&mut self, round: &mut Round, index: usize) {
        round.hands[index].mark_doubled();
        round.events.push(RoundEvent::Double { hand: index });
        self.deal_to(round, index);
    }

    fn split(&mut self, round: &mut Round, index: usize) {
        let Some(second) = round.hands[index].take_split_card() else {
            return;
        };
        round.splits += 1;

        let new_index = round.hands.len();
        round.events.push(RoundEvent::Split {
            hand: index,
            new_hand: new_index,
        });
        round.hands.push(Hand::new(alloc::vec![second]));

        self.deal_to(round, index);
        self.deal_to(round, new_index);

        if second.is_ace() {
            round.hands[index].mark_split_aces();
            round.hands[new_index].mark_split_aces();
        }

        trace!(hand = index, new_hand = new_index, splits = round.splits, "split");
    }

    fn deal_to(&mut self, round: &mut Round, index: usize) {
        let card = self.draw(&mut round.events);
        round.hands[index].add_card(card);
        round.events.push(RoundEvent::Deal {
            to: Seat::Player(index),
            card: Some(card),
        });
    }
}
