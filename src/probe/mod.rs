//! Stochastic probing (standard stochastic hill climbing).
//!
//! Instead of scanning the full neighborhood, each iteration samples
//! one uniformly random single-queen move and takes it only if it
//! strictly improves. Equal-or-worse probes are never accepted, so
//! the search can stall on a plateau for up to the stagnation cap
//! before giving up. The cheap per-iteration cost trades against a
//! much weaker escape capability than simulated annealing.

mod config;
mod runner;

pub use config::ProbeConfig;
pub use runner::ProbeRunner;
