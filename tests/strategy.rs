//! Basic strategy table tests.

use countess::{Action, Card, Suit, decide};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn up(rank: u8) -> Card {
    card(Suit::Clubs, rank)
}

fn pair(rank: u8) -> [Card; 2] {
    [card(Suit::Spades, rank), card(Suit::Hearts, rank)]
}

/// Dealer upcard ranks: ace, 2..=9, ten.
const UPCARDS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

#[test]
fn hard_sixteen_hits_against_ten() {
    let hand = [card(Suit::Spades, 10), card(Suit::Hearts, 6)];
    assert_eq!(decide(&hand, up(10)), Action::Hit);
    assert_eq!(decide(&hand, up(13)), Action::Hit);
    assert_eq!(decide(&hand, up(6)), Action::Stand);
}

#[test]
fn eights_and_aces_always_split() {
    for rank in UPCARDS {
        assert_eq!(decide(&pair(8), up(rank)), Action::Split, "8s vs {rank}");
        assert_eq!(decide(&pair(1), up(rank)), Action::Split, "As vs {rank}");
    }
}

#[test]
fn ten_value_pairs_stand() {
    let mixed = [card(Suit::Spades, 10), card(Suit::Hearts, 11)];
    for rank in UPCARDS {
        assert_eq!(decide(&pair(13), up(rank)), Action::Stand);
        assert_eq!(decide(&mixed, up(rank)), Action::Stand);
    }
}

#[test]
fn pair_table_ranges() {
    let cases: [(u8, &[u8]); 6] = [
        (9, &[2, 3, 4, 5, 6, 8, 9]),
        (7, &[2, 3, 4, 5, 6, 7]),
        (6, &[2, 3, 4, 5, 6]),
        (4, &[5, 6]),
        (3, &[2, 3, 4, 5, 6, 7]),
        (2, &[2, 3, 4, 5, 6, 7]),
    ];

    for (paired, splits) in cases {
        for rank in UPCARDS {
            let expected = if splits.contains(&rank) {
                Action::Split
            } else if paired == 9 {
                Action::Stand
            } else {
                Action::Hit
            };
            assert_eq!(decide(&pair(paired), up(rank)), expected, "{paired}s vs {rank}");
        }
    }
}

#[test]
fn fives_double_and_never_split() {
    for rank in UPCARDS {
        let expected = if (2..=9).contains(&rank) {
            Action::Double
        } else {
            Action::Hit
        };
        assert_eq!(decide(&pair(5), up(rank)), expected);
    }
}

#[test]
fn soft_totals() {
    let soft = |kicker: u8| [card(Suit::Spades, 1), card(Suit::Hearts, kicker)];

    assert_eq!(decide(&soft(2), up(5)), Action::Double);
    assert_eq!(decide(&soft(2), up(4)), Action::Hit);
    assert_eq!(decide(&soft(4), up(4)), Action::Double);
    assert_eq!(decide(&soft(5), up(3)), Action::Hit);
    assert_eq!(decide(&soft(6), up(3)), Action::Double);
    assert_eq!(decide(&soft(6), up(7)), Action::Hit);

    // Soft 18.
    assert_eq!(decide(&soft(7), up(4)), Action::Double);
    assert_eq!(decide(&soft(7), up(2)), Action::Stand);
    assert_eq!(decide(&soft(7), up(8)), Action::Stand);
    assert_eq!(decide(&soft(7), up(9)), Action::Hit);
    assert_eq!(decide(&soft(7), up(1)), Action::Hit);

    for rank in UPCARDS {
        assert_eq!(decide(&soft(8), up(rank)), Action::Stand);
        assert_eq!(decide(&soft(9), up(rank)), Action::Stand);
    }
}

#[test]
fn multi_card_soft_hand_uses_soft_table() {
    let hand = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 4),
    ];
    // Soft 17 doubles against 3-6; the engine plays that as a hit.
    assert_eq!(decide(&hand, up(5)), Action::Double);
    assert_eq!(decide(&hand, up(9)), Action::Hit);
}

#[test]
fn hard_totals() {
    let hard = |a: u8, b: u8| [card(Suit::Spades, a), card(Suit::Hearts, b)];

    assert_eq!(decide(&hard(3, 5), up(6)), Action::Hit);
    assert_eq!(decide(&hard(4, 5), up(3)), Action::Double);
    assert_eq!(decide(&hard(4, 5), up(2)), Action::Hit);
    assert_eq!(decide(&hard(4, 6), up(9)), Action::Double);
    assert_eq!(decide(&hard(4, 6), up(10)), Action::Hit);
    assert_eq!(decide(&hard(5, 6), up(10)), Action::Double);
    assert_eq!(decide(&hard(5, 6), up(1)), Action::Hit);
    assert_eq!(decide(&hard(10, 2), up(3)), Action::Hit);
    assert_eq!(decide(&hard(10, 2), up(4)), Action::Stand);
    assert_eq!(decide(&hard(10, 3), up(2)), Action::Stand);
    assert_eq!(decide(&hard(10, 5), up(7)), Action::Hit);

    for rank in UPCARDS {
        assert_eq!(decide(&hard(10, 7), up(rank)), Action::Stand);
    }
}
