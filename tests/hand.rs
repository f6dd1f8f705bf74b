//! Hand evaluation tests.

use countess::{Card, Hand, Suit, hand_value, is_blackjack, is_pair};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_values_and_labels() {
    assert_eq!(card(Suit::Spades, 1).value(), 1);
    assert_eq!(card(Suit::Hearts, 7).value(), 7);
    for rank in 10..=13 {
        assert_eq!(card(Suit::Clubs, rank).value(), 10);
    }
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Q♦");
    assert_eq!(card(Suit::Spades, 10).to_string(), "10♠");
    assert_eq!(card(Suit::Hearts, 1).to_string(), "A♥");
}

#[test]
fn soft_and_hard_totals() {
    let soft_17 = [card(Suit::Spades, 1), card(Suit::Hearts, 6)];
    assert_eq!(hand_value(&soft_17), (17, true));

    let hard_17 = [card(Suit::Spades, 10), card(Suit::Hearts, 7)];
    assert_eq!(hand_value(&hard_17), (17, false));

    let two_aces = [card(Suit::Spades, 1), card(Suit::Hearts, 1)];
    assert_eq!(hand_value(&two_aces), (12, true));

    let aces_and_nine = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
    ];
    assert_eq!(hand_value(&aces_and_nine), (21, true));

    let four_aces = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 1),
    ];
    assert_eq!(hand_value(&four_aces), (14, true));
}

#[test]
fn never_promotes_past_bust() {
    let hands: [&[Card]; 3] = [
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 13),
        ],
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 13),
            card(Suit::Clubs, 12),
        ],
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 9),
        ],
    ];

    for cards in hands {
        let hard_sum: u8 = cards.iter().map(|c| c.value()).sum();
        let (total, soft) = hand_value(cards);
        if hard_sum + 10 > 21 {
            assert_eq!(total, hard_sum);
            assert!(!soft);
        }
    }
}

#[test]
fn value_is_order_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=13).map(move |rank| card(suit, rank)))
        .collect();

    for size in 1..=7 {
        for _ in 0..50 {
            deck.shuffle(&mut rng);
            let mut cards = deck[..size].to_vec();
            let expected = hand_value(&cards);
            for _ in 0..10 {
                cards.shuffle(&mut rng);
                assert_eq!(hand_value(&cards), expected, "{cards:?}");
            }
        }
    }
}

#[test]
fn blackjack_needs_ace_and_ten_value_card() {
    for first_suit in Suit::ALL {
        for second_suit in Suit::ALL {
            for rank in 10..=13 {
                let ace = card(first_suit, 1);
                let ten = card(second_suit, rank);
                assert!(is_blackjack(&[ace, ten]));
                assert!(is_blackjack(&[ten, ace]));
            }
            assert!(!is_blackjack(&[card(first_suit, 1), card(second_suit, 9)]));
            assert!(!is_blackjack(&[card(first_suit, 1), card(second_suit, 1)]));
        }
    }

    let three_card_21 = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 5),
    ];
    assert!(!is_blackjack(&three_card_21));
    assert!(!is_blackjack(&[card(Suit::Spades, 1)]));
}

#[test]
fn pairs_compare_values() {
    assert!(is_pair(&[card(Suit::Spades, 8), card(Suit::Hearts, 8)]));
    assert!(is_pair(&[card(Suit::Spades, 10), card(Suit::Hearts, 11)]));
    assert!(is_pair(&[card(Suit::Spades, 12), card(Suit::Hearts, 13)]));
    assert!(!is_pair(&[card(Suit::Spades, 9), card(Suit::Hearts, 10)]));
    assert!(!is_pair(&[
        card(Suit::Spades, 8),
        card(Suit::Hearts, 8),
        card(Suit::Clubs, 8),
    ]));
}

#[test]
fn split_aces_hand_is_not_natural() {
    let mut hand = Hand::new(vec![card(Suit::Spades, 1), card(Suit::Hearts, 13)]);
    assert!(hand.is_natural());
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());

    hand.mark_split_aces();
    assert!(!hand.is_natural());
    assert_eq!(hand.value(), 21);
}

#[test]
fn hand_split_and_double_flags() {
    let mut hand = Hand::new(vec![card(Suit::Spades, 8), card(Suit::Hearts, 8)]);
    assert!(hand.is_pair());
    assert!(!hand.is_doubled());
    assert!((hand.bet_multiplier() - 1.0).abs() < f64::EPSILON);

    let second = hand.take_split_card().unwrap();
    assert_eq!(second, card(Suit::Hearts, 8));
    assert_eq!(hand.len(), 1);
    assert!(hand.take_split_card().is_none());

    hand.add_card(card(Suit::Clubs, 3));
    hand.mark_doubled();
    assert!(hand.is_doubled());
    assert!((hand.bet_multiplier() - 2.0).abs() < f64::EPSILON);
    assert_eq!(hand.value(), 11);
}
