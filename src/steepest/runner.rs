//! Steepest-ascent execution loop.

use crate::board::Board;
use crate::search::{SearchResult, Termination};

/// Executes steepest-ascent hill climbing.
pub struct SteepestRunner;

impl SteepestRunner {
    /// Climbs from `start` to a local optimum.
    ///
    /// Every outer iteration scans all N×(N-1) neighbors; each
    /// candidate is an independent copy of the current board, so the
    /// best-so-far slot never aliases the buffer being mutated. The
    /// run stops when no neighbor strictly improves, which may leave
    /// residual conflicts.
    pub fn run(start: &Board) -> SearchResult {
        let mut current = start.clone();
        let mut current_conflicts = current.conflicts();
        let mut history = vec![current_conflicts];
        let mut iterations = 0;

        // A 0-conflict board has no strictly improving neighbor, so
        // the scan is skipped outright.
        while current_conflicts > 0 {
            let mut best_move = None;
            let mut best_conflicts = current_conflicts;

            for mv in current.moves() {
                let candidate = current.with_move(mv).conflicts();
                if candidate < best_conflicts {
                    best_conflicts = candidate;
                    best_move = Some(mv);
                }
            }

            let Some(mv) = best_move else {
                break; // local optimum
            };
            current.apply(mv);
            current_conflicts = best_conflicts;
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
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_degenerate_start_strictly_improves() {
        // All four queens on one row: 6 conflicts. The climb must
        // terminate below that.
        let start = Board::from_rows(vec![0, 0, 0, 0]);
        let result = SteepestRunner::run(&start);
        assert!(result.best_conflicts < 6);
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_returns_a_local_optimum() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::random(8, &mut rng);
        let result = SteepestRunner::run(&start);

        for mv in result.best.moves() {
            assert!(
                result.best.with_move(mv).conflicts() >= result.best_conflicts,
                "an improving neighbor survived"
            );
        }
    }

    #[test]
    fn test_history_is_monotone_non_increasing() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=10 {
            let start = Board::random(n, &mut rng);
            let result = SteepestRunner::run(&start);
            for window in result.history.windows(2) {
                assert!(window[1] < window[0], "each accepted move must strictly improve");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::random(9, &mut rng);
        let a = SteepestRunner::run(&start);
        let b = SteepestRunner::run(&start);
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_start_is_not_mutated() {
        let start = Board::from_rows(vec![0, 0, 0, 0]);
        let _ = SteepestRunner::run(&start);
        assert_eq!(start.rows(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_solved_start() {
        let result = SteepestRunner::run(&Board::from_rows(vec![1, 3, 0, 2]));
        assert_eq!(result.termination, Termination::Solved);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.history, vec![0]);
    }

    #[test]
    fn test_single_queen_board() {
        let result = SteepestRunner::run(&Board::from_rows(vec![0]));
        assert_eq!(result.termination, Termination::Solved);
        assert_eq!(result.best_conflicts, 0);
    }

    proptest! {
        #[test]
        fn prop_climb_never_worsens_and_certifies_optimum(
            rows in (1usize..9).prop_flat_map(|n| prop::collection::vec(0..n, n))
        ) {
            let start = Board::from_rows(rows);
            let result = SteepestRunner::run(&start);

            prop_assert!(result.best_conflicts <= start.conflicts());
            prop_assert_eq!(*result.history.first().unwrap(), start.conflicts());
            prop_assert_eq!(*result.history.last().unwrap(), result.best_conflicts);
            for mv in result.best.moves() {
                prop_assert!(result.best.with_move(mv).conflicts() >= result.best_conflicts);
            }
        }
    }
}
