//! Stochastic hill climbing.
//!
//! Each iteration collects every strictly improving neighbor and
//! moves to one of them chosen uniformly at random. Identical to
//! steepest ascent except for the selection policy, so the trajectory
//! is still strictly decreasing and the run still ends at the first
//! local optimum.

mod runner;

pub use runner::StochasticRunner;
