use thiserror::Error;

/// Ошибки оценки рук и определения победителя.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// Пул меньше 5 различных карт, больше 7 карт, пустой набор рук
    /// на шоудауне или нераспознанная запись карты.
    #[error("Некорректный ввод: {0}")]
    InvalidInput(String),
}
