//! Shared optimizer surface.
//!
//! The five search strategies differ only in neighbor selection and
//! termination policy; they share one result shape and, through
//! [`Strategy`], one dispatchable entry point. This keeps board-copy
//! and loop bookkeeping out of the call sites that iterate over
//! algorithms, such as the [`crate::experiment`] harness.

use rand::Rng;

use crate::anneal::{AnnealConfig, AnnealRunner};
use crate::board::Board;
use crate::probe::{ProbeConfig, ProbeRunner};
use crate::restart::{RestartConfig, RestartRunner};
use crate::steepest::SteepestRunner;
use crate::stochastic::StochasticRunner;

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A 0-conflict placement was reached.
    Solved,
    /// No strictly improving neighbor exists.
    LocalOptimum,
    /// An iteration, stagnation, or restart cap was exhausted.
    BudgetExhausted,
}

/// Result of one optimizer run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Best board found during the run.
    pub best: Board,

    /// Conflict count of `best`. Zero means a valid solution.
    pub best_conflicts: usize,

    /// Outer iterations executed (for random-restart, the summed
    /// iterations of all inner descents).
    pub iterations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Conflict count of the current board once per outer iteration,
    /// starting with the initial board. Diagnostics only.
    pub history: Vec<usize>,
}

impl SearchResult {
    /// Whether the run ended on a valid solution.
    pub fn solved(&self) -> bool {
        self.termination == Termination::Solved
    }
}

/// One of the five search strategies, with its parameters.
///
/// Strategies that carry no parameters are unit variants; the others
/// embed their config. All dispatch through [`Strategy::optimize`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Steepest-ascent hill climbing.
    Steepest,
    /// Random choice among all improving neighbors.
    Stochastic,
    /// Single-random-probe climbing with a stagnation cap.
    Probe(ProbeConfig),
    /// Repeated steepest-ascent descents from fresh random boards.
    Restart(RestartConfig),
    /// Simulated annealing with geometric cooling.
    Anneal(AnnealConfig),
}

impl Strategy {
    /// The five strategies with their default parameters.
    pub fn all() -> Vec<Strategy> {
        vec![
            Strategy::Steepest,
            Strategy::Stochastic,
            Strategy::Probe(ProbeConfig::default()),
            Strategy::Restart(RestartConfig::default()),
            Strategy::Anneal(AnnealConfig::default()),
        ]
    }

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Steepest => "steepest-ascent",
            Strategy::Stochastic => "stochastic",
            Strategy::Probe(_) => "stochastic-probe",
            Strategy::Restart(_) => "random-restart",
            Strategy::Anneal(_) => "simulated-annealing",
        }
    }

    /// Runs the strategy from `start`.
    ///
    /// Random-restart's own contract takes a board size, not a board;
    /// here it receives `start.size()` and ignores the placement, so
    /// that one signature fits every strategy.
    pub fn optimize<R: Rng>(&self, start: &Board, rng: &mut R) -> SearchResult {
        match self {
            Strategy::Steepest => SteepestRunner::run(start),
            Strategy::Stochastic => StochasticRunner::run(start, rng),
            Strategy::Probe(config) => ProbeRunner::run(start, config, rng),
            Strategy::Restart(config) => RestartRunner::run(start.size(), config, rng),
            Strategy::Anneal(config) => AnnealRunner::run(start, config, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_strategy_names_are_distinct() {
        let names: HashSet<&str> = Strategy::all().iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_every_strategy_runs_from_the_same_start() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::random(6, &mut rng);
        let start_conflicts = start.conflicts();

        for strategy in Strategy::all() {
            let result = strategy.optimize(&start, &mut rng);
            assert_eq!(result.best.size(), 6, "{}", strategy.name());
            assert_eq!(result.best_conflicts, result.best.conflicts());
            assert!(
                result.best_conflicts <= start_conflicts
                    || matches!(strategy, Strategy::Restart(_)),
                "{} worsened the start",
                strategy.name()
            );
            assert!(!result.history.is_empty(), "{}", strategy.name());
        }
    }

    #[test]
    fn test_solved_start_terminates_immediately() {
        let start = Board::from_rows(vec![1, 3, 0, 2]);
        let mut rng = StdRng::seed_from_u64(42);
        for strategy in Strategy::all() {
            if matches!(strategy, Strategy::Restart(_)) {
                continue; // restart ignores the placement
            }
            let result = strategy.optimize(&start, &mut rng);
            assert_eq!(result.termination, Termination::Solved, "{}", strategy.name());
            assert_eq!(result.iterations, 0, "{}", strategy.name());
        }
    }

    #[test]
    fn test_restart_adapter_uses_board_size_only() {
        let strategy = Strategy::Restart(RestartConfig::default().with_max_restarts(3));
        let mut rng = StdRng::seed_from_u64(42);
        // A degenerate start must not leak into the restarts.
        let start = Board::from_rows(vec![0; 5]);
        let result = strategy.optimize(&start, &mut rng);
        assert_eq!(result.best.size(), 5);
        assert!(result.best_conflicts < start.conflicts());
    }
}
