//! Модуль оценки силы покерных рук (Texas Hold'em) и шоудауна.
//!
//! Основные функции:
//!   `evaluate(&CardPool) -> HandEvaluation`
//!   `resolve_winners(&BTreeMap<K, HandEvaluation>) -> BTreeSet<K>`

pub mod errors;
pub mod evaluator;
pub mod grouping;
pub mod hand_rank;
pub mod showdown;

pub use errors::EvalError;
pub use evaluator::{evaluate, evaluate_best_hand, evaluate_cards};
pub use hand_rank::{describe_hand, hand_category, HandCategory, HandEvaluation, HandTier};
pub use showdown::{compare_evaluations, resolve_showdown, resolve_winners, Showdown};
