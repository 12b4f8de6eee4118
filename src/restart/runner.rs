//! Random-restart execution loop.

use rand::Rng;

use super::config::RestartConfig;
use crate::board::Board;
use crate::search::{SearchResult, Termination};
use crate::steepest::SteepestRunner;

/// Executes random-restart hill climbing.
pub struct RestartRunner;

impl RestartRunner {
    /// Runs up to `max_restarts` steepest-ascent descents from fresh
    /// random boards of size `n`, returning the best local optimum.
    /// Exits early the first time a descent reaches zero conflicts.
    ///
    /// `history` records one entry per restart: that descent's final
    /// conflict count. `iterations` sums the inner descent iterations.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or the configuration is invalid.
    pub fn run<R: Rng>(n: usize, config: &RestartConfig, rng: &mut R) -> SearchResult {
        assert!(n >= 1, "board size must be at least 1");
        config.validate().expect("invalid RestartConfig");

        let first = SteepestRunner::run(&Board::random(n, rng));
        let mut iterations = first.iterations;
        let mut history = vec![first.best_conflicts];
        let mut best = first.best;
        let mut best_conflicts = first.best_conflicts;

        for _ in 1..config.max_restarts {
            if best_conflicts == 0 {
                break;
            }
            let descent = SteepestRunner::run(&Board::random(n, rng));
            iterations += descent.iterations;
            history.push(descent.best_conflicts);
            if descent.best_conflicts < best_conflicts {
                best = descent.best;
                best_conflicts = descent.best_conflicts;
            }
        }

        let termination = if best_conflicts == 0 {
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
