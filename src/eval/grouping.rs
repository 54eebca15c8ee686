//! Общие примитивы группировки карт по рангу и масти.
//!
//! Каждая проверка категории в `evaluator` работает только через них,
//! поэтому порядок групп и кикеров везде одинаковый.

use crate::domain::card::{Card, Rank, Suit};

/// Ранг и сколько карт этого ранга в пуле.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub count: u8,
}

/// Карты одной масти (только ранги, от старшего к младшему).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuitGroup {
    pub suit: Suit,
    pub ranks: Vec<Rank>,
}

/// Группы по рангу: сначала по количеству (desc), затем по рангу (desc).
/// Например, для `K K 7 7 7 2` → [(7,3), (K,2), (2,1)].
pub fn group_by_rank(cards: &[Card]) -> Vec<RankGroup> {
    let mut counts = [0u8; 15]; // индексы 0..14, используем 2..14
    for card in cards {
        counts[card.rank.value() as usize] += 1;
    }

    let mut groups: Vec<RankGroup> = Rank::ALL
        .iter()
        .rev()
        .filter(|rank| counts[rank.value() as usize] > 0)
        .map(|&rank| RankGroup {
            rank,
            count: counts[rank.value() as usize],
        })
        .collect();

    // сортировка стабильная: внутри одного count остаётся порядок по рангу desc
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Группы по масти, пустые масти пропускаются.
pub fn group_by_suit(cards: &[Card]) -> Vec<SuitGroup> {
    Suit::ALL
        .iter()
        .filter_map(|&suit| {
            let mut ranks: Vec<Rank> = cards
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.rank)
                .collect();
            if ranks.is_empty() {
                return None;
            }
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            Some(SuitGroup { suit, ranks })
        })
        .collect()
}

/// Различные ранги пула, от старшего к младшему.
pub fn distinct_ranks_desc(cards: &[Card]) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks.dedup();
    ranks
}

/// Старшая карта лучшего стрита среди рангов, если стрит есть.
///
/// Ранги схлопываются, туз дополнительно считается единицей (wheel A2345,
/// старшая карта 5). Из нескольких пересекающихся стритов берётся старший.
pub fn straight_high(ranks: &[Rank]) -> Option<u8> {
    let mut values: Vec<u8> = ranks.iter().map(|r| r.value()).collect();
    values.sort_unstable();
    values.dedup();

    if values.last() == Some(&Rank::Ace.value()) {
        values.insert(0, 1);
    }
    if values.len() < 5 {
        return None;
    }

    (0..=values.len() - 5)
        .rev()
        .find(|&i| values[i + 4] - values[i] == 4)
        .map(|i| values[i + 4])
}
