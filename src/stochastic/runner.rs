//! Stochastic hill climbing execution loop.

use rand::Rng;

use crate::board::{Board, Move};
use crate::search::{SearchResult, Termination};

/// Executes stochastic hill climbing: a uniformly random choice among
/// all strictly improving neighbors.
pub struct StochasticRunner;

impl StochasticRunner {
    /// Climbs from `start` until no neighbor strictly improves.
    pub fn run<R: Rng>(start: &Board, rng: &mut R) -> SearchResult {
        let mut current = start.clone();
        let mut current_conflicts = current.conflicts();
        let mut history = vec![current_conflicts];
        let mut iterations = 0;

        while current_conflicts > 0 {
            let improving: Vec<(Move, usize)> = current
                .moves()
                .filter_map(|mv| {
                    let candidate = current.with_move(mv).conflicts();
                    (candidate < current_conflicts).then_some((mv, candidate))
                })
                .collect();

            if improving.is_empty() {
                break; // local optimum
            }
            let (mv, conflicts) = improving[rng.random_range(0..improving.len())];
            current.apply(mv);
            current_conflicts = conflicts;
            iterations += 1;
            history.push(current_conflicts);
        }

        let termination = if current_conflicts == 0 {
            Termination::Solved
        } else {
            Termination::LocalOptimum
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_history_is_strictly_decreasing() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=10 {
            let start = Board::random(n, &mut rng);
            let result = StochasticRunner::run(&start, &mut rng);
            for window in result.history.windows(2) {
                assert!(window[1] < window[0]);
            }
        }
    }

    #[test]
    fn test_terminates_at_a_local_optimum() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = Board::random(8, &mut rng);
        let result = StochasticRunner::run(&start, &mut rng);

        for mv in result.best.moves() {
            assert!(result.best.with_move(mv).conflicts() >= result.best_conflicts);
        }
        if result.best_conflicts == 0 {
            assert_eq!(result.termination, Termination::Solved);
        } else {
            assert_eq!(result.termination, Termination::LocalOptimum);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let start = Board::from_rows(vec![0, 0, 0, 0, 0, 0]);
        let a = StochasticRunner::run(&start, &mut StdRng::seed_from_u64(42));
        let b = StochasticRunner::run(&start, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_degenerate_start_strictly_improves() {
        let start = Board::from_rows(vec![0, 0, 0, 0]);
        let mut rng = StdRng::seed_from_u64(42);
        let result = StochasticRunner::run(&start, &mut rng);
        assert!(result.best_conflicts < 6);
    }

    #[test]
    fn test_solved_start() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = StochasticRunner::run(&Board::from_rows(vec![1, 3, 0, 2]), &mut rng);
        assert_eq!(result.termination, Termination::Solved);
        assert_eq!(result.iterations, 0);
    }
}
