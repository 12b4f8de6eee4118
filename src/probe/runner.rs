//! Stochastic probing execution loop.

use rand::Rng;

use super::config::ProbeConfig;
use crate::board::Board;
use crate::search::{SearchResult, Termination};

/// Executes stochastic probing.
pub struct ProbeRunner;

impl ProbeRunner {
    /// Probes from `start` until a solution is found or
    /// `max_stagnant` consecutive probes fail to improve.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`ProbeConfig::validate`] first to get a descriptive error).
    pub fn run<R: Rng>(start: &Board, config: &ProbeConfig, rng: &mut R) -> SearchResult {
        config.validate().expect("invalid ProbeConfig");

        let mut current = start.clone();
        let mut current_conflicts = current.conflicts();
        let mut history = vec![current_conflicts];
        let mut iterations = 0;
        let mut stagnant = 0;

        while current_conflicts > 0 && stagnant < config.max_stagnant {
            let mv = current.random_move(rng);
            let candidate = current.with_move(mv).conflicts();

            if candidate < current_conflicts {
                current.apply(mv);
                current_conflicts = candidate;
                stagnant = 0;
            } else {
                stagnant += 1;
            }
            iterations += 1;
            history.push(current_conflicts);
        }

        let termination = if current_conflicts == 0 {
            Termination::Solved
        } else {
            Termination::BudgetExhausted
        };

        SearchResult {
            best_conflicts: current_conflicts,
            best: current,
            iterations,
            termination,
            history,
        }
    }
}
