//! Доменная модель: карты, колода, пул карт участника, улицы.

pub mod card;
pub mod deck;
pub mod hand;
pub mod pool;

// Базовые идентификаторы участников.
pub type PlayerId = u64;
pub type SeatIndex = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use pool::*;
