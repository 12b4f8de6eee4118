//! Conflict-counting objective function.

use super::Board;

/// Counts queen pairs that attack each other: same row, same
/// ascending diagonal, or same descending diagonal. Same-column
/// attacks are impossible by construction.
///
/// Runs in O(N): queens are bucketed by row index, by ascending
/// diagonal id `column + row`, and by descending diagonal id
/// `column - row + N` (offset to stay non-negative); each bucket of
/// size k contributes `k*(k-1)/2` unordered pairs. The steepest-ascent
/// loop evaluates on the order of N² neighbors per outer iteration,
/// so the objective must stay linear.
pub fn conflicts(board: &Board) -> usize {
    let n = board.size();

    let mut row_count = vec![0usize; n];
    let mut asc_count = vec![0usize; 2 * n];
    let mut desc_count = vec![0usize; 2 * n];

    for (column, &row) in board.rows().iter().enumerate() {
        row_count[row] += 1;
        asc_count[column + row] += 1;
        desc_count[column + n - row] += 1;
    }

    row_count
        .iter()
        .chain(&asc_count)
        .chain(&desc_count)
        .map(|&k| pairs(k))
        .sum()
}

/// Unordered pairs among k queens sharing one line: k choose 2.
fn pairs(k: usize) -> usize {
    k * k.saturating_sub(1) / 2
}
