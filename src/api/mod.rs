//! Внешнее представление результатов оценки.
//!
//! Здесь описываются DTO (dto.rs) — удобные структуры для фронта и сети,
//! и аргументы бинарников (cli.rs).
//! Сам оценщик ничего не знает про формат передачи.

pub mod cli;
pub mod dto;

pub use cli::*;
pub use dto::*;
