//! Experiment execution loop.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::ExperimentConfig;
use super::report::{CaseSummary, Report};
use crate::board::Board;
use crate::search::Strategy;

/// Runs every (strategy, board size) case for `config.runs` trials
/// and aggregates the outcomes.
///
/// Each trial gets its own `StdRng` derived from the base seed and
/// the trial's global index, so a fixed-seed experiment reproduces
/// exactly regardless of trial ordering.
///
/// # Panics
///
/// Panics if the configuration is invalid (call
/// [`ExperimentConfig::validate`] first to get a descriptive error).
pub fn run_experiment(strategies: &[Strategy], config: &ExperimentConfig) -> Report {
    config.validate().expect("invalid ExperimentConfig");

    let base_seed = config.seed.unwrap_or_else(rand::random);
    let mut rows = Vec::with_capacity(config.board_sizes.len() * strategies.len());
    let mut case = 0u64;

    for &n in &config.board_sizes {
        for strategy in strategies {
            rows.push(run_case(strategy, n, config.runs, base_seed, case));
            case += 1;
        }
    }

    Report::new(rows)
}

fn run_case(
    strategy: &Strategy,
    n: usize,
    runs: usize,
    base_seed: u64,
    case: u64,
) -> CaseSummary {
    let trial = |index: usize| -> (Duration, usize) {
        let offset = case * runs as u64 + index as u64;
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(offset));
        let start = Board::random(n, &mut rng);
        let begin = Instant::now();
        let result = strategy.optimize(&start, &mut rng);
        (begin.elapsed(), result.best_conflicts)
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<(Duration, usize)> = (0..runs).into_par_iter().map(trial).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<(Duration, usize)> = (0..runs).map(trial).collect();

    let total_time: Duration = outcomes.iter().map(|&(elapsed, _)| elapsed).sum();
    let total_conflicts: usize = outcomes.iter().map(|&(_, conflicts)| conflicts).sum();
    let solved = outcomes.iter().filter(|&&(_, conflicts)| conflicts == 0).count();

    CaseSummary {
        strategy: strategy.name(),
        board_size: n,
        runs,
        avg_time: total_time / runs as u32,
        avg_conflicts: total_conflicts as f64 / runs as f64,
        success_rate: solved as f64 / runs as f64,
    }
}
