//! Simulated annealing execution loop.

use rand::Rng;

use super::config::AnnealConfig;
use crate::board::Board;
use crate::search::{SearchResult, Termination};

/// Executes simulated annealing.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Anneals from `start` for at most `max_iterations` iterations,
    /// stopping early on a 0-conflict board.
    ///
    /// The temperature is owned by this run alone and decays by
    /// `cooling_rate` every iteration, accepted move or not. The
    /// returned board is the best ever observed, which the chain may
    /// have wandered away from by the time it stops; `history` tracks
    /// the current (not best) conflict count per iteration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`AnnealConfig::validate`] first to get a descriptive error).
    pub fn run<R: Rng>(start: &Board, config: &AnnealConfig, rng: &mut R) -> SearchResult {
        config.validate().expect("invalid AnnealConfig");

        let mut current = start.clone();
        let mut current_conflicts = current.conflicts();
        let mut best = current.clone();
        let mut best_conflicts = current_conflicts;
        let mut temperature = config.initial_temperature;
        let mut history = vec![current_conflicts];
        let mut iterations = 0;

        for _ in 0..config.max_iterations {
            if current_conflicts == 0 {
                break;
            }

            let mv = current.random_move(rng);
            let candidate = current.with_move(mv).conflicts();
            let delta = candidate as f64 - current_conflicts as f64;

            // Metropolis criterion: downhill always, uphill (and
            // sideways, exp(0) = 1) with probability exp(-delta / T).
            let accept = if delta < 0.0 {
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current.apply(mv);
                current_conflicts = candidate;
                if current_conflicts < best_conflicts {
                    best = current.clone();
                    best_conflicts = current_conflicts;
                }
            }

            temperature *= config.cooling_rate;
            iterations += 1;
            history.push(current_conflicts);
        }

        let termination = if current_conflicts == 0 {
            Termination::Solved
        } else {
            Termination::BudgetExhausted
        };

        SearchResult {
            best,
            best_conflicts,
            iterations,
            termination,
            history,
        }
    }
}
