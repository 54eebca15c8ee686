//! Определение победителя(ей) по готовым оценкам рук.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::errors::EvalError;
use super::hand_rank::HandEvaluation;

/// Сравнение двух оценок: категория → primary → secondary → кикеры.
///
/// Кикеры сравниваются поэлементно; если общий префикс равен,
/// выигрывает более длинная последовательность. Ничья (`Equal`)
/// ровно тогда, когда совпадают все поля.
pub fn compare_evaluations(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.category()
        .cmp(&b.category())
        .then_with(|| a.primary().cmp(&b.primary()))
        .then_with(|| a.secondary().cmp(&b.secondary()))
        .then_with(|| a.kickers().cmp(b.kickers()))
}

/// Итог шоудауна: кто забирает банк и с какой рукой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Showdown<K: Ord> {
    pub winners: BTreeSet<K>,
    pub best: HandEvaluation,
}

impl<K: Ord> Showdown<K> {
    /// Банк делится между несколькими участниками.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Все участники с максимальной оценкой (несколько — это сплит).
pub fn resolve_winners<K>(evaluations: &BTreeMap<K, HandEvaluation>) -> Result<BTreeSet<K>, EvalError>
where
    K: Ord + Clone + Debug,
{
    resolve_showdown(evaluations).map(|showdown| showdown.winners)
}

/// То же, что `resolve_winners`, но вместе с победившей оценкой.
pub fn resolve_showdown<K>(evaluations: &BTreeMap<K, HandEvaluation>) -> Result<Showdown<K>, EvalError>
where
    K: Ord + Clone + Debug,
{
    let best = evaluations
        .values()
        .max_by(|a, b| compare_evaluations(a, b))
        .ok_or_else(|| EvalError::InvalidInput("no hands to compare at showdown".into()))?;

    let winners: BTreeSet<K> = evaluations
        .iter()
        .filter(|(_, eval)| compare_evaluations(eval, best) == Ordering::Equal)
        .map(|(id, _)| id.clone())
        .collect();

    log::debug!(
        "showdown: {} hands, winners {:?} with {}",
        evaluations.len(),
        winners,
        best
    );

    Ok(Showdown {
        winners,
        best: best.clone(),
    })
}
