//! Steepest-ascent hill climbing.
//!
//! At each step the full neighborhood of N×(N-1) single-queen
//! reassignments is evaluated and the search moves to the neighbor
//! with the strictly lowest conflict count, stopping at the first
//! local optimum. Deterministic: ties break on the first neighbor
//! encountered in (column, row) order.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*,
//!   ch. 4 (local search, hill-climbing variants on N-Queens)

mod runner;

pub use runner::SteepestRunner;
