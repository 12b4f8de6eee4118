//! Tabular experiment report.

use std::fmt;
use std::time::Duration;

/// Aggregated outcome of one (strategy, board size) case.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseSummary {
    /// Strategy display name.
    pub strategy: &'static str,

    /// Board size N.
    pub board_size: usize,

    /// Trials executed.
    pub runs: usize,

    /// Mean wall-clock duration per trial.
    pub avg_time: Duration,

    /// Mean conflict count of the returned boards.
    pub avg_conflicts: f64,

    /// Fraction of trials that reached zero conflicts.
    pub success_rate: f64,
}

/// All case summaries of one experiment, printable as a text table.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    rows: Vec<CaseSummary>,
}

impl Report {
    pub(crate) fn new(rows: Vec<CaseSummary>) -> Self {
        Self { rows }
    }

    /// Case summaries in (board size, strategy) order.
    pub fn rows(&self) -> &[CaseSummary] {
        &self.rows
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:>4} {:>6} {:>14} {:>14} {:>9}",
            "algorithm", "n", "runs", "avg time (s)", "avg conflicts", "success"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20} {:>4} {:>6} {:>14.6} {:>14.2} {:>8.0}%",
                row.strategy,
                row.board_size,
                row.runs,
                row.avg_time.as_secs_f64(),
                row.avg_conflicts,
                row.success_rate * 100.0,
            )?;
        }
        Ok(())
    }
}
