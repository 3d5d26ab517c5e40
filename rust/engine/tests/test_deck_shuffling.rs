use std::collections::{HashMap, HashSet};

use holdem_engine::cards::{full_deck, Card};
use holdem_engine::deck::{build_shuffled_deck, Deck};
use holdem_engine::errors::GameError;
use holdem_engine::ledger::Round;
use holdem_engine::random::{RandomSource, SeededRandom};

/// Always returns the same float.
struct Constant(f64);

impl RandomSource for Constant {
    fn next_float(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn shuffled_deck_has_52_unique_cards() {
    let cards = build_shuffled_deck(&mut SeededRandom::new_with_seed(42));
    assert_eq!(cards.len(), 52);
    let set: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(set.len(), 52);
    let pack: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(set, pack);
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let a = build_shuffled_deck(&mut SeededRandom::new_with_seed(12345));
    let b = build_shuffled_deck(&mut SeededRandom::new_with_seed(12345));
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let a = build_shuffled_deck(&mut SeededRandom::new_with_seed(1));
    let b = build_shuffled_deck(&mut SeededRandom::new_with_seed(2));
    assert_ne!(a, b, "different seeds should produce different orders");
}

#[test]
fn top_of_range_source_leaves_pack_order() {
    // every swap picks the current position, so nothing moves
    let cards = build_shuffled_deck(&mut Constant(0.999_999_999));
    assert_eq!(cards, full_deck());
}

#[test]
fn bottom_of_range_source_rotates_first_card_to_back() {
    // j = 0 on every step: the first swap parks the original first card at
    // the back and no later swap reaches it
    let pack = full_deck();
    let cards = build_shuffled_deck(&mut Constant(0.0));
    assert_eq!(cards[51], pack[0]);
    assert_eq!(cards.len(), 52);
}

#[test]
fn first_position_is_roughly_uniform() {
    let mut rng = SeededRandom::new_with_seed(2024);
    let mut counts: HashMap<Card, u32> = HashMap::new();
    let rounds = 5_200;
    for _ in 0..rounds {
        let cards = build_shuffled_deck(&mut rng);
        *counts.entry(cards[0]).or_default() += 1;
    }
    // 100 expected per card; a biased sort-style shuffle falls far outside
    assert_eq!(counts.len(), 52);
    for (card, n) in counts {
        assert!((40..=170).contains(&n), "{} led {} times", card, n);
    }
}

#[test]
fn community_draw_counts_follow_the_rounds() {
    let mut deck = Deck::shuffled(&mut SeededRandom::new_with_seed(9));
    deck.deal_hole_cards(6, 0).unwrap();
    let mut board = Vec::new();
    for (round, expected) in [
        (Round::PreFlop, 0),
        (Round::Flop, 3),
        (Round::Turn, 1),
        (Round::River, 1),
    ] {
        let drawn = deck.draw_community_cards(round).unwrap();
        assert_eq!(drawn.len(), expected, "{}", round);
        board.extend(drawn);
    }
    assert_eq!(board.len(), 5);
    assert_eq!(deck.remaining(), 52 - 12 - 5);
}

#[test]
fn dealing_more_seats_than_the_deck_serves_fails_up_front() {
    let mut deck = Deck::from_cards(full_deck()[..10].to_vec());
    let err = deck.deal_hole_cards(6, 0).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientDeck {
            requested: 12,
            remaining: 10
        }
    );
    assert_eq!(deck.remaining(), 10, "nothing consumed on failure");
}

#[test]
fn deal_and_draws_partition_the_deck() {
    let mut deck = Deck::shuffled(&mut SeededRandom::new_with_seed(777));
    let hands = deck.deal_hole_cards(6, 3).unwrap();
    let mut board = Vec::new();
    for round in [Round::Flop, Round::Turn, Round::River] {
        board.extend(deck.draw_community_cards(round).unwrap());
    }

    let mut all: Vec<Card> = hands.iter().flat_map(|h| h.cards).collect();
    all.extend(&board);
    all.extend(deck.remaining_cards());
    assert_eq!(all.len(), 52);
    let unique: HashSet<Card> = all.into_iter().collect();
    assert_eq!(unique.len(), 52);
}
