use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::errors::EvalError;

/// Пул карт одного участника: карманные + открытые на борде.
///
/// Инвариант: 5..=7 различных карт. Конструкторы проверяют его,
/// поэтому оценка готового пула уже не может упасть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    pub const MIN_CARDS: usize = 5;
    pub const MAX_CARDS: usize = 7;

    /// Собрать пул из произвольного набора карт.
    ///
    /// Дубликаты схлопываются (уникальность гарантирует дилер),
    /// дальше считаем только различные карты.
    pub fn new(cards: &[Card]) -> Result<Self, EvalError> {
        let mut unique: Vec<Card> = cards.to_vec();
        unique.sort_unstable_by(|a, b| b.cmp(a));
        unique.dedup();

        if unique.len() < Self::MIN_CARDS {
            return Err(EvalError::InvalidInput(format!(
                "pool has {} distinct cards, at least {} required",
                unique.len(),
                Self::MIN_CARDS
            )));
        }
        if unique.len() > Self::MAX_CARDS {
            return Err(EvalError::InvalidInput(format!(
                "pool has {} cards, at most {} allowed",
                unique.len(),
                Self::MAX_CARDS
            )));
        }

        Ok(Self { cards: unique })
    }

    /// Карманные карты + борд.
    pub fn from_hole_and_board(hole: &[Card], board: &[Card]) -> Result<Self, EvalError> {
        let mut all_cards = Vec::with_capacity(hole.len() + board.len());
        all_cards.extend_from_slice(hole);
        all_cards.extend_from_slice(board);
        Self::new(&all_cards)
    }

    /// Карты пула, от старшей к младшей.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
