use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use poker_showdown::api::FrequencyCli;
use poker_showdown::engine::{run_simulation, DealError, SimulationConfig, SimulationReport};
use poker_showdown::infra::{DeterministicRng, SystemRng};

fn main() -> ExitCode {
    env_logger::init();
    let args = FrequencyCli::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[SIM] ОШИБКА чтения конфига: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "poker_hand_frequencies: {} раздач, {} игроков, seed={:?}",
        config.deals, config.players, config.seed
    );

    match simulate(&config) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[SIM] ОШИБКА симуляции: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Без пути к конфигу берём значения по умолчанию.
fn load_config(path: Option<&Path>) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(SimulationConfig::from_json(&raw)?)
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn simulate(config: &SimulationConfig) -> Result<SimulationReport, DealError> {
    match config.seed {
        Some(seed) => run_simulation(config, &mut DeterministicRng::from_seed(seed)),
        None => run_simulation(config, &mut SystemRng),
    }
}

fn print_report(report: &SimulationReport) {
    let total = report.tally.total();

    println!();
    println!("Simulation results after {} deals:", report.deals);
    for (tier, count) in report.tally.iter() {
        let share = if total > 0 {
            count as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        println!("{:<16} {:>10} {:>9.4}%", format!("{tier}:"), count, share);
    }
    println!("Split pots: {}", report.split_pots);
}
