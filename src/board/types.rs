//! Core board and move types.

use rand::Rng;

/// A single-queen move: reassign the queen in `column` to `row`.
///
/// A move is only ever constructed for a row that differs from the
/// queen's current row, so the neighborhood never contains the no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Column whose queen moves.
    pub column: usize,
    /// Destination row.
    pub row: usize,
}

/// A candidate placement: one queen per column, `rows[column]` is the
/// occupied row.
///
/// The length is always the board size N; rows may repeat. Candidate
/// neighbors are built with [`Board::with_move`], which copies before
/// mutating, so no evaluation ever aliases the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board of size `n` with each queen's row drawn
    /// independently and uniformly from `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        assert!(n >= 1, "board size must be at least 1");
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { rows }
    }

    /// Creates a board from explicit per-column rows.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or any row is out of range.
    pub fn from_rows(rows: Vec<usize>) -> Self {
        assert!(!rows.is_empty(), "board size must be at least 1");
        let n = rows.len();
        for (column, &row) in rows.iter().enumerate() {
            assert!(
                row < n,
                "row {row} in column {column} out of range for board size {n}"
            );
        }
        Self { rows }
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row occupied by the queen in `column`.
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Per-column rows, left to right.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of attacking queen pairs. Zero means a valid solution.
    pub fn conflicts(&self) -> usize {
        super::conflicts(self)
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Returns an independent copy with `mv` applied. The receiver is
    /// untouched.
    pub fn with_move(&self, mv: Move) -> Self {
        let mut copy = self.clone();
        copy.apply(mv);
        copy
    }

    /// Applies `mv` in place. Used only for the one accepted move of
    /// an iteration, never inside neighbor evaluation.
    pub fn apply(&mut self, mv: Move) {
        debug_assert_ne!(self.rows[mv.column], mv.row, "no-op move");
        self.rows[mv.column] = mv.row;
    }

    /// All N×(N-1) single-queen moves in (column, row) order. The
    /// current row of each column is excluded.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        let n = self.rows.len();
        (0..n).flat_map(move |column| {
            let current = self.rows[column];
            (0..n)
                .filter(move |&row| row != current)
                .map(move |row| Move { column, row })
        })
    }

    /// One uniformly random move: uniform column, then uniform row
    /// among the N-1 rows differing from that column's current row.
    ///
    /// # Panics
    ///
    /// Panics if the board has fewer than two rows, since a 1×1 board
    /// has no valid moves.
    pub fn random_move<R: Rng>(&self, rng: &mut R) -> Move {
        let n = self.rows.len();
        assert!(n >= 2, "board of size {n} has no single-queen moves");
        let column = rng.random_range(0..n);
        let current = self.rows[column];
        // Draw from n-1 slots and skip over the current row.
        let mut row = rng.random_range(0..n - 1);
        if row >= current {
            row += 1;
        }
        Move { column, row }
    }
}
