//! Раздача карт и прогон симуляций поверх оценщика.
//!
//! Высокоуровневый объект: `Dealer`
//! Основные операции:
//!   - `deal_hole_cards` – раздать карманные карты
//!   - `deal_next_street` – открыть флоп / тёрн / ривер
//!   - `showdown` – оценить все руки и определить победителей
//!   - `run_simulation` – много раздач подряд со статистикой по уровням рук

pub mod dealer;
pub mod errors;
pub mod simulation;

pub use dealer::{Dealer, MAX_PLAYERS, MIN_PLAYERS};
pub use errors::DealError;
pub use simulation::{run_simulation, SimulationConfig, SimulationReport, TierTally};

/// RNG интерфейс для колоды и дилера.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
