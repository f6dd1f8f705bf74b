use tracing::debug;

use crate::event::{RoundEvent, Seat};
use crate::hand::Hand;

use super::{Round, Table};

impl Table {
    /// Reshuffles the shoe if penetration has been reached.
    pub(super) fn check_reshuffle(&mut self, round: &mut Round) {
        if !self.shoe.needs_reshuffle(self.rules.penetration) {
            return;
        }

        debug!(
            remaining = self.shoe.remaining(),
            cards = self.shoe.len(),
            "penetration reached, reshuffling"
        );
        self.shoe.shuffle();
        round.reshuffled = true;
        round.events.push(RoundEvent::Shuffle { mid_round: false });
    }

    /// Deals player, dealer, player, dealer.
    ///
    /// The dealer's second card is recorded face down until the reveal.
    pub(super) fn deal_initial(&mut self, round: &mut Round) {
        let first = self.draw(&mut round.events);
        round.events.push(RoundEvent::Deal {
            to: Seat::Player(0),
            card: Some(first),
        });

        let up_card = self.draw(&mut round.events);
        round.dealer.push(up_card);
        round.events.push(RoundEvent::Deal {
            to: Seat::Dealer,
            card: Some(up_card),
        });

        let second = self.draw(&mut round.events);
        round.events.push(RoundEvent::Deal {
            to: Seat::Player(0),
            card: Some(second),
        });

        let hole_card = self.draw(&mut round.events);
        round.dealer.push(hole_card);
        round.events.push(RoundEvent::Deal {
            to: Seat::Dealer,
            card: None,
        });

        round.hands.push(Hand::new(alloc::vec![first, second]));
    }
}
