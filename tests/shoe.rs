//! Shoe tests.

use countess::{Card, ConfigError, DECK_SIZE, Shoe, Suit};

#[test]
fn new_shoe_holds_every_deck() {
    let shoe = Shoe::new(6, 1).unwrap();
    assert_eq!(shoe.len(), 6 * DECK_SIZE);
    assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
    assert_eq!(shoe.cursor(), 0);
    assert!(!shoe.is_empty());

    assert_eq!(Shoe::new(0, 1).unwrap_err(), ConfigError::NoDecks);
}

#[test]
fn shoe_contains_each_card_once_per_deck() {
    let mut shoe = Shoe::new(2, 5).unwrap();
    let mut cards = Vec::new();
    while let Some(card) = shoe.deal() {
        cards.push(card);
    }
    assert_eq!(cards.len(), 2 * DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            let copies = cards.iter().filter(|&&c| c == Card::new(suit, rank)).count();
            assert_eq!(copies, 2);
        }
    }
}

#[test]
fn depth_invariant_holds_while_dealing() {
    let mut shoe = Shoe::new(1, 3).unwrap();
    for dealt in 1..=DECK_SIZE {
        assert!(shoe.deal().is_some());
        assert_eq!(shoe.cursor(), dealt);
        assert_eq!(shoe.remaining() + shoe.cursor(), shoe.len());
    }
    assert_eq!(shoe.deal(), None);
    assert_eq!(shoe.remaining(), 0);

    shoe.shuffle();
    assert_eq!(shoe.remaining(), shoe.len());
    assert_eq!(shoe.cursor(), 0);
}

#[test]
fn reshuffle_threshold_rounds_reserve_down() {
    // 52 * 0.25 = 13 cards in reserve.
    let mut shoe = Shoe::new(1, 9).unwrap();
    for _ in 0..39 {
        shoe.deal();
    }
    assert_eq!(shoe.remaining(), 13);
    assert!(!shoe.needs_reshuffle(0.75));

    shoe.deal();
    assert!(shoe.needs_reshuffle(0.75));

    // 10 * 0.25 = 2.5, rounded down to 2.
    let mut small = Shoe::from_cards(vec![Card::new(Suit::Clubs, 2); 10], 1).unwrap();
    for _ in 0..8 {
        small.deal();
    }
    assert!(!small.needs_reshuffle(0.75));
    small.deal();
    assert!(small.needs_reshuffle(0.75));
}

#[test]
fn stacked_shoe_deals_in_order() {
    let cards = vec![
        Card::new(Suit::Hearts, 1),
        Card::new(Suit::Spades, 13),
        Card::new(Suit::Clubs, 4),
    ];
    let mut shoe = Shoe::from_cards(cards.clone(), 1).unwrap();
    for expected in cards {
        assert_eq!(shoe.deal(), Some(expected));
    }
    assert_eq!(shoe.deal(), None);

    assert_eq!(
        Shoe::from_cards(Vec::new(), 1).unwrap_err(),
        ConfigError::EmptyShoe
    );
}

#[test]
fn same_seed_same_order() {
    let mut first = Shoe::new(6, 42).unwrap();
    let mut second = Shoe::new(6, 42).unwrap();
    for _ in 0..100 {
        assert_eq!(first.deal(), second.deal());
    }

    first.shuffle();
    second.shuffle();
    for _ in 0..100 {
        assert_eq!(first.deal(), second.deal());
    }

    let mut other = Shoe::new(6, 43).unwrap();
    let mut fresh = Shoe::new(6, 42).unwrap();
    let differs = (0..50).any(|_| other.deal() != fresh.deal());
    assert!(differs);
}
