//! Batch benchmarking harness.
//!
//! Runs every (strategy, board size) pair for a configured number of
//! trials, each from a fresh random board with its own seeded RNG,
//! and aggregates wall-clock time, residual conflicts, and success
//! rate into a [`Report`] that prints as an aligned text table.
//!
//! Trials are independent; with the `parallel` feature they fan out
//! across a rayon thread pool (per-trial seeds keep a fixed-seed
//! experiment deterministic either way, though contended wall-clock
//! timings will differ).

mod config;
mod report;
mod runner;

pub use config::ExperimentConfig;
pub use report::{CaseSummary, Report};
pub use runner::run_experiment;
