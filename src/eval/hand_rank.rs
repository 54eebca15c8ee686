use core::fmt;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

use super::showdown::compare_evaluations;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Результат оценки пула: категория + значения для тай-брейка.
///
/// Смысл `primary`/`secondary` зависит от категории:
///
/// | категория      | primary            | secondary           | kickers          |
/// |----------------|--------------------|---------------------|------------------|
/// | StraightFlush  | старшая карта      | 0                   | —                |
/// | FourOfAKind    | ранг каре          | 0                   | 1 карта          |
/// | FullHouse      | ранг сета          | ранг пары           | —                |
/// | Flush          | старшая карта масти| 0                   | 4 следующие      |
/// | Straight       | старшая карта      | 0                   | —                |
/// | ThreeOfAKind   | ранг сета          | старшая из прочих   | 1 карта          |
/// | TwoPair        | старшая пара       | младшая пара        | 1 карта          |
/// | OnePair        | ранг пары          | 0                   | 3 карты          |
/// | HighCard       | старшая карта      | вторая карта        | 3 карты          |
///
/// Для wheel (A2345) старшая карта = 5. Кикеры строго убывают и не
/// пересекаются с `primary`/`secondary`; набор пустой, если карт не осталось.
/// Сравнение никогда не требует исходных карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HandEvaluation {
    category: HandCategory,
    primary: u8,
    secondary: u8,
    kickers: Vec<u8>,
}

impl HandEvaluation {
    pub fn new(category: HandCategory, primary: u8, secondary: u8, kickers: Vec<u8>) -> Self {
        Self {
            category,
            primary,
            secondary,
            kickers,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn primary(&self) -> u8 {
        self.primary
    }

    pub fn secondary(&self) -> u8 {
        self.secondary
    }

    pub fn kickers(&self) -> &[u8] {
        &self.kickers
    }

    /// Royal flush — это straight flush до туза, отдельной категории нет.
    pub fn is_royal_flush(&self) -> bool {
        self.category == HandCategory::StraightFlush && self.primary == Rank::Ace.value()
    }

    pub fn tier(&self) -> HandTier {
        HandTier::of(self)
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_evaluations(self, other)
    }
}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Десять уровней для отображения и статистики: категории + Royal flush.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandTier {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandTier {
    pub const COUNT: usize = 10;

    pub const ALL: [HandTier; Self::COUNT] = [
        HandTier::HighCard,
        HandTier::OnePair,
        HandTier::TwoPair,
        HandTier::ThreeOfAKind,
        HandTier::Straight,
        HandTier::Flush,
        HandTier::FullHouse,
        HandTier::FourOfAKind,
        HandTier::StraightFlush,
        HandTier::RoyalFlush,
    ];

    pub fn of(eval: &HandEvaluation) -> Self {
        if eval.is_royal_flush() {
            return HandTier::RoyalFlush;
        }
        match eval.category {
            HandCategory::HighCard => HandTier::HighCard,
            HandCategory::OnePair => HandTier::OnePair,
            HandCategory::TwoPair => HandTier::TwoPair,
            HandCategory::ThreeOfAKind => HandTier::ThreeOfAKind,
            HandCategory::Straight => HandTier::Straight,
            HandCategory::Flush => HandTier::Flush,
            HandCategory::FullHouse => HandTier::FullHouse,
            HandCategory::FourOfAKind => HandTier::FourOfAKind,
            HandCategory::StraightFlush => HandTier::StraightFlush,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandTier::HighCard => "High card",
            HandTier::OnePair => "One pair",
            HandTier::TwoPair => "Two pair",
            HandTier::ThreeOfAKind => "Three of a kind",
            HandTier::Straight => "Straight",
            HandTier::Flush => "Flush",
            HandTier::FullHouse => "Full house",
            HandTier::FourOfAKind => "Four of a kind",
            HandTier::StraightFlush => "Straight flush",
            HandTier::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for HandTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Удобная функция – получить категорию из оценки.
pub fn hand_category(eval: &HandEvaluation) -> HandCategory {
    eval.category()
}

/// Человеческое описание руки: уровень + ключевые ранги.
pub fn describe_hand(eval: &HandEvaluation) -> String {
    let p = rank_label(eval.primary);
    let s = rank_label(eval.secondary);
    match eval.tier() {
        HandTier::RoyalFlush => HandTier::RoyalFlush.name().to_string(),
        HandTier::StraightFlush => format!("Straight flush, {p} high"),
        HandTier::FourOfAKind => format!("Four of a kind, {p}"),
        HandTier::FullHouse => format!("Full house, {p} over {s}"),
        HandTier::Flush => format!("Flush, {p} high"),
        HandTier::Straight => format!("Straight, {p} high"),
        HandTier::ThreeOfAKind => format!("Three of a kind, {p}"),
        HandTier::TwoPair => format!("Two pair, {p} and {s}"),
        HandTier::OnePair => format!("One pair, {p}"),
        HandTier::HighCard => format!("High card, {p}"),
    }
}

fn rank_label(value: u8) -> String {
    Rank::from_value(value).map_or_else(|| value.to_string(), |r| r.to_string())
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", describe_hand(self))?;
        if !self.kickers.is_empty() {
            let kickers: Vec<String> = self.kickers.iter().map(|&k| rank_label(k)).collect();
            write!(f, " [{}]", kickers.join(" "))?;
        }
        Ok(())
    }
}
