//! Инфраструктурный слой вокруг оценщика:
//! - RNG-реализации для колоды и дилера.

pub mod rng;

pub use rng::*;
