//! Simulated Annealing (SA).
//!
//! Samples one random single-queen move per iteration and accepts
//! worsening moves with the Metropolis probability
//! `exp(-delta / T)` under a geometrically cooling temperature.
//! Sideways moves (`delta == 0`) are therefore always accepted, which
//! is what lets the chain drift across plateaus that stall the pure
//! climbing variants. The best board ever observed is returned, not
//! the final state of the chain.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::AnnealRunner;
