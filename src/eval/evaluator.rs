use crate::domain::card::{Card, Rank};
use crate::domain::pool::CardPool;

use super::errors::EvalError;
use super::grouping::{
    distinct_ranks_desc, group_by_rank, group_by_suit, straight_high, RankGroup, SuitGroup,
};
use super::hand_rank::{HandCategory, HandEvaluation};

/// Размер итоговой руки, по которой идёт сравнение.
const HAND_SIZE: usize = 5;

/// Главная функция: лучшая 5-карточная рука из проверенного пула.
///
/// Категории проверяются от сильнейшей к слабейшей, возвращается первая
/// подходящая. Никаких перечислений 21 комбинации — всё через группировки.
pub fn evaluate(pool: &CardPool) -> HandEvaluation {
    let eval = Classifier::new(pool.cards()).classify();
    log::trace!(
        "evaluate: {} → {:?} p={} s={} k={:?}",
        format_cards(pool.cards()),
        eval.category(),
        eval.primary(),
        eval.secondary(),
        eval.kickers()
    );
    eval
}

/// Оценить произвольный набор из 5–7 карт.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    let pool = CardPool::new(cards)?;
    Ok(evaluate(&pool))
}

/// Оценить руку игрока: карманные карты + борд.
///
/// Обычно `hole.len() == 2`, `board.len()` от 3 до 5.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandEvaluation, EvalError> {
    let pool = CardPool::from_hole_and_board(hole, board)?;
    Ok(evaluate(&pool))
}

/// Разобранный на группы пул. Живёт только на время одной оценки.
struct Classifier {
    rank_groups: Vec<RankGroup>,
    suit_groups: Vec<SuitGroup>,
    ranks: Vec<Rank>,
}

impl Classifier {
    fn new(cards: &[Card]) -> Self {
        Self {
            rank_groups: group_by_rank(cards),
            suit_groups: group_by_suit(cards),
            ranks: distinct_ranks_desc(cards),
        }
    }

    fn classify(&self) -> HandEvaluation {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_four_of_a_kind())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_three_of_a_kind())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_one_pair())
            .unwrap_or_else(|| self.high_card())
    }

    fn find_straight_flush(&self) -> Option<HandEvaluation> {
        self.flush_group()
            .and_then(|group| straight_high(&group.ranks))
            .map(|high| HandEvaluation::new(HandCategory::StraightFlush, high, 0, Vec::new()))
    }

    fn find_four_of_a_kind(&self) -> Option<HandEvaluation> {
        let quad = self.rank_with_count(4)?;
        let kickers = self.remaining(&[quad], HAND_SIZE - 4);
        Some(HandEvaluation::new(
            HandCategory::FourOfAKind,
            quad.value(),
            0,
            kickers,
        ))
    }

    fn find_full_house(&self) -> Option<HandEvaluation> {
        let trips = self.rank_with_count(3)?;
        // пара может быть и вторым сетом (AAA KKK → A над K)
        let pair = self
            .rank_groups
            .iter()
            .filter(|g| g.count >= 2 && g.rank != trips)
            .map(|g| g.rank)
            .max()?;
        Some(HandEvaluation::new(
            HandCategory::FullHouse,
            trips.value(),
            pair.value(),
            Vec::new(),
        ))
    }

    fn find_flush(&self) -> Option<HandEvaluation> {
        let group = self.flush_group()?;
        let mut top = group.ranks.iter().take(HAND_SIZE).map(|r| r.value());
        let high = top.next()?;
        Some(HandEvaluation::new(
            HandCategory::Flush,
            high,
            0,
            top.collect(),
        ))
    }

    fn find_straight(&self) -> Option<HandEvaluation> {
        straight_high(&self.ranks)
            .map(|high| HandEvaluation::new(HandCategory::Straight, high, 0, Vec::new()))
    }

    fn find_three_of_a_kind(&self) -> Option<HandEvaluation> {
        let trips = self.rank_with_count(3)?;
        let mut rest = self.remaining(&[trips], HAND_SIZE - 3).into_iter();
        let secondary = rest.next().unwrap_or(0);
        Some(HandEvaluation::new(
            HandCategory::ThreeOfAKind,
            trips.value(),
            secondary,
            rest.collect(),
        ))
    }

    fn find_two_pair(&self) -> Option<HandEvaluation> {
        let mut pairs = self
            .rank_groups
            .iter()
            .filter(|g| g.count == 2)
            .map(|g| g.rank);
        let high = pairs.next()?;
        let low = pairs.next()?;
        let kickers = self.remaining(&[high, low], HAND_SIZE - 4);
        Some(HandEvaluation::new(
            HandCategory::TwoPair,
            high.value(),
            low.value(),
            kickers,
        ))
    }

    fn find_one_pair(&self) -> Option<HandEvaluation> {
        let pair = self.rank_with_count(2)?;
        let kickers = self.remaining(&[pair], HAND_SIZE - 2);
        Some(HandEvaluation::new(
            HandCategory::OnePair,
            pair.value(),
            0,
            kickers,
        ))
    }

    fn high_card(&self) -> HandEvaluation {
        let mut top = self.ranks.iter().take(HAND_SIZE).map(|r| r.value());
        let primary = top.next().unwrap_or(0);
        let secondary = top.next().unwrap_or(0);
        HandEvaluation::new(HandCategory::HighCard, primary, secondary, top.collect())
    }

    /// Масть, в которой 5+ карт. В 7 картах такая может быть только одна.
    fn flush_group(&self) -> Option<&SuitGroup> {
        self.suit_groups.iter().find(|g| g.ranks.len() >= HAND_SIZE)
    }

    /// Старший ранг, встречающийся ровно `count` раз.
    fn rank_with_count(&self, count: u8) -> Option<Rank> {
        // группы отсортированы по рангу desc внутри одного count
        self.rank_groups
            .iter()
            .find(|g| g.count == count)
            .map(|g| g.rank)
    }

    /// До `take` старших различных рангов, не входящих в `used`.
    fn remaining(&self, used: &[Rank], take: usize) -> Vec<u8> {
        self.ranks
            .iter()
            .filter(|r| !used.contains(r))
            .take(take)
            .map(|r| r.value())
            .collect()
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
