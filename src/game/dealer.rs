use alloc::vec::Vec;

use crate::card::Card;
use crate::event::RoundEvent;
use crate::hand::{Hand, hand_value, is_blackjack};
use crate::result::{HandResult, Outcome, RoundResult, Settlement};

use super::{Round, Table};

/// Settles one hand against the dealer, returning its signed result.
///
/// `bet` is the effective bet (already doubled for doubled hands). Checks
/// run in order: player bust, player natural, dealer natural, dealer bust,
/// then totals.
#[must_use]
pub fn settle_hand(
    hand: &Hand,
    dealer_total: u8,
    dealer_blackjack: bool,
    bet: f64,
    blackjack_pays: f64,
) -> (f64, Outcome) {
    let total = hand.value();
    if total > 21 {
        return (-bet, Outcome::Lose);
    }

    let player_blackjack = hand.is_natural();
    if player_blackjack && !dealer_blackjack {
        return (bet * blackjack_pays, Outcome::Blackjack);
    }
    if dealer_blackjack && !player_blackjack {
        return (-bet, Outcome::Lose);
    }

    if dealer_total > 21 || total > dealer_total {
        (bet, Outcome::Win)
    } else if total < dealer_total {
        (-bet, Outcome::Lose)
    } else {
        (0.0, Outcome::Push)
    }
}

/// Settles every hand against the dealer's final cards.
///
/// # Example
///
/// ```
/// use countess::{Card, Hand, Outcome, Suit, settle};
///
/// let hands = [Hand::new(vec![Card::new(Suit::Spades, 1), Card::new(Suit::Hearts, 13)])];
/// let dealer = [Card::new(Suit::Clubs, 10), Card::new(Suit::Diamonds, 8)];
/// let settlement = settle(&hands, &dealer, 10.0, 1.5);
/// assert_eq!(settlement.outcome, Outcome::Blackjack);
/// assert_eq!(settlement.profit, 15.0);
/// ```
#[must_use]
pub fn settle(hands: &[Hand], dealer_cards: &[Card], bet: f64, blackjack_pays: f64) -> Settlement {
    let dealer_total = hand_value(dealer_cards).0;
    let dealer_blackjack = is_blackjack(dealer_cards);

    let mut results = Vec::with_capacity(hands.len());
    let mut profit = 0.0;
    for (hand_index, hand) in hands.iter().enumerate() {
        let effective_bet = bet * hand.bet_multiplier();
        let (net, outcome) =
            settle_hand(hand, dealer_total, dealer_blackjack, effective_bet, blackjack_pays);
        profit += net;
        results.push(HandResult {
            hand_index,
            outcome,
            bet: effective_bet,
            net,
            total: hand.value(),
        });
    }

    let outcome = Outcome::aggregate(results.iter().map(|result| result.outcome));
    Settlement {
        hands: results,
        profit,
        outcome,
        dealer_total,
    }
}

impl Table {
    pub(super) fn reveal_hole(&mut self, round: &mut Round) {
        round.events.push(RoundEvent::Reveal {
            card: round.dealer[1],
        });
    }

    /// Dealer draws to 17 or higher.
    ///
    /// If `stand_on_soft_17` is true, dealer stands on soft 17.
    /// Otherwise, dealer hits on soft 17.
    pub(super) fn dealer_play(&mut self, round: &mut Round) {
        loop {
            let (value, is_soft) = hand_value(&round.dealer);

            if value > 17 {
                break;
            }
            if value == 17 && (!is_soft || self.rules.stand_on_soft_17) {
                break;
            }

            let card = self.draw(&mut round.events);
            round.dealer.push(card);
            round.events.push(RoundEvent::DealerHit { card });
        }
    }

    pub(super) fn settle_round(&self, round: &mut Round) -> RoundResult {
        let settlement = settle(
            &round.hands,
            &round.dealer,
            round.bet,
            self.rules.blackjack_pays,
        );

        for result in &settlement.hands {
            round.events.push(RoundEvent::HandSettled {
                hand: result.hand_index,
                outcome: result.outcome,
                net: result.net,
            });
        }
        round.events.push(RoundEvent::Settle {
            outcome: settlement.outcome,
            profit: settlement.profit,
        });

        RoundResult {
            profit: settlement.profit,
            bet: round.bet,
            outcome: settlement.outcome,
            dealer_total: settlement.dealer_total,
            player_hands: round.hands.len(),
            hands: settlement.hands,
        }
    }
}
