//! Тесты классификации рук: каждая категория, wheel, кикеры,
//! пересекающиеся стриты и примитивы группировки.

use poker_showdown::domain::card::{parse_cards, Card, Rank, Suit};
use poker_showdown::domain::pool::CardPool;
use poker_showdown::eval::grouping::{
    distinct_ranks_desc, group_by_rank, group_by_suit, straight_high, RankGroup,
};
use poker_showdown::eval::{
    describe_hand, evaluate, evaluate_best_hand, evaluate_cards, hand_category, EvalError,
    HandCategory, HandEvaluation, HandTier,
};

/// Утилита: разобрать карты из строки.
fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card string")
}

/// Утилита: оценить hole + board из строк.
fn eval(hole: &str, board: &str) -> HandEvaluation {
    evaluate_best_hand(&cards(hole), &cards(board)).expect("valid pool")
}

//
// ---- Сценарии ----
//

#[test]
fn royal_flush_is_ace_high_straight_flush() {
    let e = eval("As Ks", "Qs Js Ts 2d 3c");

    assert_eq!(e.category(), HandCategory::StraightFlush);
    assert_eq!(e.primary(), 14);
    assert!(e.kickers().is_empty());
    assert!(e.is_royal_flush());
    assert_eq!(e.tier(), HandTier::RoyalFlush);
    assert_eq!(describe_hand(&e), "Royal flush");
}

#[test]
fn four_of_a_kind_deuces_with_eight_kicker() {
    let e = eval("2h 2d", "2c 2s 6h 7d 8c");

    assert_eq!(e.category(), HandCategory::FourOfAKind);
    assert_eq!(e.primary(), 2);
    assert_eq!(e.kickers()[0], 8);
    assert_eq!(e.kickers(), &[8]);
}

#[test]
fn full_house_deuces_over_threes() {
    let e = eval("2d 2h", "2c 3s 3h 7d 8c");

    assert_eq!(e.category(), HandCategory::FullHouse);
    assert_eq!(e.primary(), 2);
    assert_eq!(e.secondary(), 3);
    assert!(e.kickers().is_empty());
}

//
// ---- Категории по одной ----
//

#[test]
fn straight_flush_low() {
    // 2-6 червей, плюс 7♦ 8♣ дают обычный стрит до 8 — но SF сильнее.
    let e = eval("2h 3h", "4h 5h 6h 7d 8c");
    assert_eq!(e.category(), HandCategory::StraightFlush);
    assert_eq!(e.primary(), 6);
    assert!(!e.is_royal_flush());
    assert_eq!(e.tier(), HandTier::StraightFlush);
}

#[test]
fn flush_keeps_top_five_suited_ranks() {
    let e = eval("2h 5h", "7h 9h Kh 3d Jc");
    assert_eq!(e.category(), HandCategory::Flush);
    assert_eq!(e.primary(), 13);
    assert_eq!(e.secondary(), 0);
    assert_eq!(e.kickers(), &[9, 7, 5, 2]);
}

#[test]
fn six_suited_cards_flush_beats_straight() {
    let e = eval("4h 6h", "7h 8h 9h Ts 2h");
    assert_eq!(e.category(), HandCategory::Flush);
    assert_eq!(e.primary(), 9);
    assert_eq!(e.kickers(), &[8, 7, 6, 4]);
}

#[test]
fn straight_eight_high() {
    let e = eval("2d 3h", "4h 5h 6h 7d 8c");
    assert_eq!(e.category(), HandCategory::Straight);
    assert_eq!(e.primary(), 8);
    assert!(e.kickers().is_empty());
}

#[test]
fn overlapping_straights_take_highest_run() {
    let e = eval("9c Th", "5d 6s 7h 8c Jd");
    assert_eq!(e.category(), HandCategory::Straight);
    assert_eq!(e.primary(), 11);
}

#[test]
fn wheel_is_five_high_straight() {
    let e = eval("Ah 2d", "3c 4s 5h 9d Kc");
    assert_eq!(e.category(), HandCategory::Straight);
    assert_eq!(e.primary(), 5);
}

#[test]
fn six_high_straight_beats_wheel_in_same_pool() {
    let e = eval("As 2s", "3h 4d 5c 6s Kd");
    assert_eq!(e.category(), HandCategory::Straight);
    assert_eq!(e.primary(), 6);
}

#[test]
fn suited_wheel_is_straight_flush_not_royal() {
    let e = eval("As 2s", "3s 4s 5s 9d Kc");
    assert_eq!(e.category(), HandCategory::StraightFlush);
    assert_eq!(e.primary(), 5);
    assert!(!e.is_royal_flush());
    assert_eq!(e.tier(), HandTier::StraightFlush);
}

#[test]
fn three_of_a_kind_with_secondary_and_kicker() {
    let e = eval("2d 2h", "2c 4h 5h 6h 7d");
    assert_eq!(e.category(), HandCategory::ThreeOfAKind);
    assert_eq!(e.primary(), 2);
    assert_eq!(e.secondary(), 7);
    assert_eq!(e.kickers(), &[6]);
}

#[test]
fn three_of_a_kind_in_five_card_pool() {
    let e = evaluate_cards(&cards("7c 7d 7h Ks 2d")).unwrap();
    assert_eq!(e.category(), HandCategory::ThreeOfAKind);
    assert_eq!(e.primary(), 7);
    assert_eq!(e.secondary(), 13);
    assert_eq!(e.kickers(), &[2]);
}

#[test]
fn two_pair_with_single_kicker() {
    let e = eval("2d 2h", "3c 4h 4s 6h 7d");
    assert_eq!(e.category(), HandCategory::TwoPair);
    assert_eq!(e.primary(), 4);
    assert_eq!(e.secondary(), 2);
    assert_eq!(e.kickers(), &[7]);
}

#[test]
fn three_pairs_use_third_pair_as_kicker() {
    let e = eval("Ah Ad", "Kc Ks Qh Qd 2c");
    assert_eq!(e.category(), HandCategory::TwoPair);
    assert_eq!(e.primary(), 14);
    assert_eq!(e.secondary(), 13);
    assert_eq!(e.kickers(), &[12]);
}

#[test]
fn one_pair_with_three_kickers() {
    let e = eval("2d 2h", "3c 4h 5s 7h 8d");
    assert_eq!(e.category(), HandCategory::OnePair);
    assert_eq!(e.primary(), 2);
    assert_eq!(e.kickers(), &[8, 7, 5]);
}

#[test]
fn high_card_primary_secondary_and_kickers() {
    let e = eval("Ad Kh", "3c 4h 5s 7h 8d");
    assert_eq!(e.category(), HandCategory::HighCard);
    assert_eq!(e.primary(), 14);
    assert_eq!(e.secondary(), 13);
    assert_eq!(e.kickers(), &[8, 7, 5]);
    assert_eq!(hand_category(&e), HandCategory::HighCard);
}

#[test]
fn two_sets_make_full_house_of_higher_over_lower() {
    let e = eval("Ah Ad", "Ac Ks Kh Kd 2c");
    assert_eq!(e.category(), HandCategory::FullHouse);
    assert_eq!(e.primary(), 14);
    assert_eq!(e.secondary(), 13);
}

#[test]
fn full_house_picks_highest_pair() {
    let e = eval("9h 9d", "9c 4s 4h Qd Qc");
    assert_eq!(e.category(), HandCategory::FullHouse);
    assert_eq!(e.primary(), 9);
    assert_eq!(e.secondary(), 12);
}

#[test]
fn quads_kicker_comes_from_board_pair() {
    let e = eval("Ac Ad", "Ah As Kc Kd 3c");
    assert_eq!(e.category(), HandCategory::FourOfAKind);
    assert_eq!(e.primary(), 14);
    assert_eq!(e.kickers(), &[13]);
}

//
// ---- Пул и ошибки ----
//

#[test]
fn pool_with_fewer_than_five_cards_is_invalid() {
    let res = evaluate_best_hand(&cards("As Ks"), &cards("Qs Js"));
    assert!(matches!(res, Err(EvalError::InvalidInput(_))));
}

#[test]
fn duplicate_cards_do_not_count_towards_pool_size() {
    let res = evaluate_best_hand(&cards("As Ks"), &cards("As Qs Js"));
    assert!(matches!(res, Err(EvalError::InvalidInput(_))));
}

#[test]
fn pool_with_more_than_seven_cards_is_invalid() {
    let res = evaluate_cards(&cards("2c 3c 4c 5c 6c 7c 8c 9c"));
    assert!(matches!(res, Err(EvalError::InvalidInput(_))));
}

#[test]
fn evaluation_does_not_depend_on_card_order() {
    let a = cards("Ah 2d 3c 4s 5h 9d Kc");
    let mut b = a.clone();
    b.reverse();

    let pa = CardPool::new(&a).unwrap();
    let pb = CardPool::new(&b).unwrap();
    assert_eq!(evaluate(&pa), evaluate(&pb));
}

#[test]
fn flop_only_pool_is_evaluable() {
    let e = eval("Kh Kd", "Ks 7c 2d");
    assert_eq!(e.category(), HandCategory::ThreeOfAKind);
    assert_eq!(e.primary(), 13);
    assert_eq!(e.secondary(), 7);
    assert_eq!(e.kickers(), &[2]);
}

//
// ---- Группировки ----
//

#[test]
fn group_by_rank_orders_by_count_then_rank() {
    let groups = group_by_rank(&cards("Kc Kd 7h 7s 7c 2d"));
    assert_eq!(
        groups,
        vec![
            RankGroup { rank: Rank::Seven, count: 3 },
            RankGroup { rank: Rank::King, count: 2 },
            RankGroup { rank: Rank::Two, count: 1 },
        ]
    );
}

#[test]
fn group_by_suit_skips_empty_suits() {
    let groups = group_by_suit(&cards("2h Kh 9c"));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].suit, Suit::Clubs);
    assert_eq!(groups[1].suit, Suit::Hearts);
    assert_eq!(groups[1].ranks, vec![Rank::King, Rank::Two]);
}

#[test]
fn distinct_ranks_collapse_duplicates() {
    let ranks = distinct_ranks_desc(&cards("9c 9d 2h Ah 2s"));
    assert_eq!(ranks, vec![Rank::Ace, Rank::Nine, Rank::Two]);
}

#[test]
fn straight_high_detection() {
    use Rank::*;
    assert_eq!(straight_high(&[Ace, Two, Three, Four, Five]), Some(5));
    assert_eq!(straight_high(&[Ten, Jack, Queen, King, Ace]), Some(14));
    assert_eq!(straight_high(&[Two, Three, Four, Five, Six, Seven]), Some(7));
    assert_eq!(straight_high(&[Five, Five, Six, Seven, Eight, Nine]), Some(9));
    assert_eq!(straight_high(&[Two, Four, Seven, Ace, King]), None);
    // K-A-2-3-4 не стрит: туз не «заворачивает»
    assert_eq!(straight_high(&[King, Ace, Two, Three, Four]), None);
}

#[test]
fn describe_hand_labels() {
    assert_eq!(describe_hand(&eval("2d 2h", "2c 3s 3h 7d 8c")), "Full house, 2 over 3");
    assert_eq!(describe_hand(&eval("Ah 2d", "3c 4s 5h 9d Kc")), "Straight, 5 high");
    assert_eq!(describe_hand(&eval("Ad Kh", "3c 4h 5s 7h 8d")), "High card, A");
    assert_eq!(
        eval("2d 2h", "3c 4h 4s 6h 7d").to_string(),
        "Two pair, 4 and 2 [7]"
    );
}
