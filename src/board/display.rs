//! Text rendering of a board.

use std::fmt;

use super::Board;

/// Renders the board as a checkerboard grid, one `♛` per column at
/// its occupied row. Row 0 is the top line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            for column in 0..n {
                if self.row(column) == row {
                    write!(f, " ♛")?;
                } else if (row + column) % 2 == 0 {
                    write!(f, " ·")?;
                } else {
                    write!(f, "  ")?;
                }
            }
            if row + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
