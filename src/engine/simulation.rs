use serde::{Deserialize, Serialize};

use crate::eval::{resolve_showdown, HandEvaluation, HandTier};

use super::dealer::{Dealer, MAX_PLAYERS, MIN_PLAYERS};
use super::errors::DealError;
use super::RandomSource;

/// Как часто писать прогресс в лог.
const PROGRESS_EVERY: u64 = 100_000;

/// Параметры симуляции частот рук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Игроков за столом.
    pub players: usize,
    /// Сколько полных раздач (до ривера) сыграть.
    pub deals: u64,
    /// Seed для воспроизводимого прогона; None — системный RNG.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            players: 5,
            deals: 1_000_000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), DealError> {
        if self.players < MIN_PLAYERS {
            return Err(DealError::NotEnoughPlayers(self.players));
        }
        if self.players > MAX_PLAYERS {
            return Err(DealError::TooManyPlayers(self.players));
        }
        Ok(())
    }
}

/// Счётчики по десяти уровням рук (Royal flush считается отдельно).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierTally {
    counts: [u64; HandTier::COUNT],
}

impl TierTally {
    pub fn record(&mut self, eval: &HandEvaluation) {
        self.counts[eval.tier().index()] += 1;
    }

    pub fn count(&self, tier: HandTier) -> u64 {
        self.counts[tier.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Пары (уровень, счётчик) от слабейшего к сильнейшему.
    pub fn iter(&self) -> impl Iterator<Item = (HandTier, u64)> + '_ {
        HandTier::ALL.iter().map(move |&tier| (tier, self.count(tier)))
    }
}

/// Итог симуляции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationReport {
    pub players: usize,
    pub deals: u64,
    pub tally: TierTally,
    /// Раздачи, где банк делится между несколькими игроками.
    pub split_pots: u64,
}

/// Сыграть `config.deals` раздач до ривера и посчитать уровни всех рук.
pub fn run_simulation<R: RandomSource>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationReport, DealError> {
    config.validate()?;

    let mut dealer = Dealer::new(config.players, rng)?;
    let mut tally = TierTally::default();
    let mut split_pots = 0u64;

    for deal in 0..config.deals {
        if deal > 0 {
            dealer.reset(rng);
        }
        dealer.deal_hole_cards()?;
        dealer.deal_to_river()?;

        let evaluations = dealer.evaluate_all()?;
        for eval in evaluations.values() {
            tally.record(eval);
        }

        let showdown = resolve_showdown(&evaluations)?;
        if showdown.is_split() {
            split_pots += 1;
        }

        if (deal + 1) % PROGRESS_EVERY == 0 {
            log::debug!("simulation: {} / {} deals", deal + 1, config.deals);
        }
    }

    log::info!(
        "simulation finished: {} deals × {} players, {} split pots",
        config.deals,
        config.players,
        split_pots
    );

    Ok(SimulationReport {
        players: config.players,
        deals: config.deals,
        tally,
        split_pots,
    })
}
