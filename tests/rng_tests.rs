//! RNG tests
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт
//! - работу Deck + shuffle + RandomSource

use std::collections::HashSet;

use poker_showdown::domain::card::Card;
use poker_showdown::domain::deck::Deck;
use poker_showdown::engine::RandomSource;
use poker_showdown::infra::{DeterministicRng, SystemRng};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — shuffled deck keeps all 52 cards
//
#[test]
fn shuffled_deck_has_no_duplicates() {
    let mut rng = DeterministicRng::from_seed(555);
    let deck = Deck::shuffled(&mut rng);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52, "Shuffled deck must contain 52 unique cards");
    assert_ne!(deck.cards, Deck::standard_52().cards);
}

//
// TEST 4 — same seed, same sequence of decks
//
#[test]
fn deterministic_rng_replays_deck_sequence() {
    let mut r1 = DeterministicRng::from_seed(999);
    let mut r2 = DeterministicRng::from_seed(999);

    for _ in 0..5 {
        assert_eq!(Deck::shuffled(&mut r1), Deck::shuffled(&mut r2));
    }
}

//
// TEST 5 — SystemRng shuffles without losing cards
//
#[test]
fn system_rng_keeps_deck_complete() {
    let mut rng = SystemRng;
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut rng);

    let unique: HashSet<Card> = deck.cards.into_iter().collect();
    assert_eq!(unique.len(), 52);
}

//
// TEST 6 — shuffle on empty slice must not crash
//
#[test]
fn shuffle_empty_slice_ok() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut arr: Vec<u32> = vec![];
    rng.shuffle(&mut arr);
    assert!(arr.is_empty());
}
