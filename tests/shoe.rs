//! Shoe and hand property tests.

extern crate alloc;

use alloc::collections::BTreeMap;

use bjshoe::{Card, ConfigError, DECK_SIZE, MAX_DECKS, Shoe, Suit, sum_cards};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn arb_card() -> impl Strategy<Value = Card> {
    (0usize..4, 1u8..=13).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
}

/// One step applied to a shoe: deal `n` cards, or recycle one card.
#[derive(Debug, Clone)]
enum ShoeOp {
    Deal(usize),
    Recycle,
}

fn arb_shoe_op() -> impl Strategy<Value = ShoeOp> {
    prop_oneof![(0usize..12).prop_map(ShoeOp::Deal), Just(ShoeOp::Recycle)]
}

fn sorted(cards: impl IntoIterator<Item = Card>) -> Vec<Card> {
    let mut cards: Vec<Card> = cards.into_iter().collect();
    cards.sort_unstable();
    cards
}

#[test]
fn deck_count_bounds() {
    assert_eq!(Shoe::new(0).unwrap_err(), ConfigError::NoDecks);
    assert_eq!(
        Shoe::new(MAX_DECKS + 1).unwrap_err(),
        ConfigError::TooManyDecks { decks: 9, max: 8 }
    );
    assert_eq!(Shoe::new(1).unwrap().remaining(), DECK_SIZE);
    assert_eq!(
        Shoe::new(MAX_DECKS).unwrap().remaining(),
        MAX_DECKS as usize * DECK_SIZE
    );
}

#[test]
fn new_shoe_is_in_building_order() {
    let shoe = Shoe::new(1).unwrap();
    let names: Vec<String> = shoe.live().iter().take(14).map(|c| c.name()).collect();

    assert_eq!(names[0], "2 of Clubs");
    assert_eq!(names[8], "10 of Clubs");
    assert_eq!(names[9], "J of Clubs");
    assert_eq!(names[12], "A of Clubs");
    assert_eq!(names[13], "2 of Diamonds");
    assert_eq!(shoe.live().back().map(|c| c.name()).as_deref(), Some("A of Hearts"));
}

#[test]
fn two_card_pass_swaps_twice() {
    // The back position must swap with the front and the front with the back,
    // so a single pass over two cards restores the original order.
    let cards = vec![Card::new(Suit::Hearts, 2), Card::new(Suit::Spades, 3)];
    let mut shoe = Shoe::from_cards(cards.clone());
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    shoe.shuffle(&mut rng, 1);
    assert_eq!(shoe.live().iter().copied().collect::<Vec<_>>(), cards);
}

#[test]
fn shuffle_leaves_tiny_shoes_alone() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut empty = Shoe::default();
    empty.shuffle(&mut rng, 5);
    assert!(empty.is_empty());

    let single = Card::new(Suit::Clubs, 1);
    let mut one = Shoe::from_cards(vec![single]);
    one.shuffle(&mut rng, 5);
    assert_eq!(one.live().front(), Some(&single));
}

#[test]
fn deal_past_the_end_returns_short_hand() {
    let mut shoe = Shoe::from_cards(vec![Card::new(Suit::Hearts, 4), Card::new(Suit::Hearts, 5)]);

    let cards = shoe.deal(5);
    assert_eq!(cards.len(), 2);
    assert_eq!(shoe.remaining(), 0);
    assert_eq!(shoe.dealt_count(), 2);
    assert!(shoe.deal(1).is_empty());
    assert_eq!(shoe.deal_one(), None);
}

#[test]
fn recycle_moves_oldest_dealt_card_to_the_front() {
    let first = Card::new(Suit::Hearts, 4);
    let second = Card::new(Suit::Spades, 9);
    let third = Card::new(Suit::Clubs, 12);
    let mut shoe = Shoe::from_cards(vec![first, second, third]);

    assert_eq!(shoe.recycle_one(), None);

    shoe.deal(2);
    assert_eq!(shoe.recycle_one(), Some(first));
    assert_eq!(shoe.live().iter().copied().collect::<Vec<_>>(), [first, third]);
    assert_eq!(shoe.dealt().iter().copied().collect::<Vec<_>>(), [second]);

    shoe.clear();
    assert!(shoe.is_empty());
    assert_eq!(shoe.len(), 0);
}

proptest! {
    #[test]
    fn shoe_holds_every_card_once_per_deck(decks in 1u8..=MAX_DECKS) {
        let shoe = Shoe::new(decks).unwrap();
        prop_assert_eq!(shoe.remaining(), decks as usize * DECK_SIZE);
        prop_assert_eq!(shoe.dealt_count(), 0);

        let mut counts: BTreeMap<Card, usize> = BTreeMap::new();
        for card in shoe.live() {
            *counts.entry(*card).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), DECK_SIZE);
        prop_assert!(counts.values().all(|&n| n == decks as usize));
    }

    #[test]
    fn shuffle_is_a_permutation(decks in 1u8..=MAX_DECKS, seed in any::<u64>(), passes in 0u8..4) {
        let mut shoe = Shoe::new(decks).unwrap();
        shoe.deal(3);
        let before = sorted(shoe.live().iter().copied());
        let dealt_before = shoe.dealt().clone();

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        shoe.shuffle(&mut rng, passes);

        prop_assert_eq!(sorted(shoe.live().iter().copied()), before);
        prop_assert_eq!(shoe.dealt(), &dealt_before);
    }

    #[test]
    fn deals_and_recycles_conserve_cards(
        decks in 1u8..=3,
        ops in prop::collection::vec(arb_shoe_op(), 0..60),
    ) {
        let mut shoe = Shoe::new(decks).unwrap();
        let total = shoe.len();
        let everything = sorted(shoe.live().iter().copied());

        for op in ops {
            match op {
                ShoeOp::Deal(n) => {
                    let expected: Vec<Card> = shoe.live().iter().take(n).copied().collect();
                    let dealt = shoe.deal(n);
                    prop_assert_eq!(dealt, expected);
                }
                ShoeOp::Recycle => {
                    let oldest = shoe.dealt().front().copied();
                    prop_assert_eq!(shoe.recycle_one(), oldest);
                }
            }
            prop_assert_eq!(shoe.remaining() + shoe.dealt_count(), total);
        }

        let all = sorted(shoe.live().iter().chain(shoe.dealt()).copied());
        prop_assert_eq!(all, everything);
    }

    #[test]
    fn totals_ignore_deal_order(
        (cards, shuffled) in prop::collection::vec(arb_card(), 0..12)
            .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
    ) {
        prop_assert_eq!(sum_cards(&cards), sum_cards(&shuffled));
        let expected: u32 = cards.iter().map(|c| u32::from(c.value())).sum();
        prop_assert_eq!(sum_cards(&cards), expected);
    }
}
