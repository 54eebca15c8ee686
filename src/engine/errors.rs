use thiserror::Error;

use crate::eval::EvalError;

/// Ошибки дилера: рассадка, раздача карт, шоудаун.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error("Недостаточно игроков для раздачи: {0}")]
    NotEnoughPlayers(usize),

    #[error("Слишком много игроков для одной колоды: {0}")]
    TooManyPlayers(usize),

    #[error("В колоде закончились карты")]
    DeckExhausted,

    #[error("Борд уже заполнен")]
    BoardFull,

    #[error("Карманные карты уже розданы")]
    HoleCardsAlreadyDealt,

    #[error("Карманные карты ещё не розданы")]
    HoleCardsNotDealt,

    #[error(transparent)]
    Eval(#[from] EvalError),
}
