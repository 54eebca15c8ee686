//! Аргументы командной строки бинарников.

use std::path::PathBuf;

use clap::Parser;

/// Оценить руки игроков на общем борде и показать победителей.
///
/// Пример: poker_eval_cli "Qs Js Ts 2d 3c" "As Ks" "Ah Ad"
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "poker_eval_cli", version, about = "Texas Hold'em showdown evaluator", long_about = None)]
pub struct EvalCli {
    /// Output JSON instead of human-readable text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Board cards, e.g. "Qs Js Ts 2d 3c"
    pub board: String,

    /// Hole cards of each player, e.g. "As Ks"
    #[arg(required = true)]
    pub holes: Vec<String>,
}

/// Раздать много рук до ривера и посчитать частоты уровней.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "poker_hand_frequencies", version, about = "Hand-frequency simulation", long_about = None)]
pub struct FrequencyCli {
    /// Path to a JSON simulation config; defaults are used when omitted
    pub config: Option<PathBuf>,
}
