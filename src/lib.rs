//! Оценка покерных рук Texas Hold'em и определение победителей шоудауна.
//!
//! Слои:
//!   - `domain` – карты, колода, пул карт участника;
//!   - `eval` – классификация лучшей руки и сравнение оценок;
//!   - `engine` – дилер и симуляция частот рук;
//!   - `infra` – RNG-реализации;
//!   - `api` – DTO для фронта и сети.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, CardPool, Rank, Suit};
pub use eval::{evaluate, resolve_winners, EvalError, HandCategory, HandEvaluation};
