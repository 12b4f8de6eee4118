//! Local-search heuristics for the N-Queens placement problem.
//!
//! Places N queens on an N×N board, one per column, and minimizes the
//! number of pairwise attacks with a family of single-solution
//! trajectory heuristics:
//!
//! - **Steepest-ascent hill climbing**: move to the best of all
//!   N×(N-1) single-queen reassignments until no neighbor improves.
//! - **Stochastic hill climbing**: move to a uniformly random member
//!   of the set of all strictly improving neighbors.
//! - **Stochastic probing**: evaluate one random neighbor per
//!   iteration, move only on strict improvement, give up after a run
//!   of stagnant probes.
//! - **Random-restart hill climbing**: repeated steepest-ascent
//!   descents from fresh random boards, keeping the best local
//!   optimum.
//! - **Simulated Annealing (SA)**: Metropolis acceptance of worsening
//!   moves under a geometrically cooling temperature.
//!
//! # Architecture
//!
//! The [`board`] module owns the placement representation and the
//! O(N) conflict-counting objective; each algorithm lives in its own
//! module with its configuration and execution loop, and all of them
//! report through the shared [`search::SearchResult`]. The
//! [`experiment`] module batches optimizer runs into a comparative
//! report (mean runtime, mean residual conflicts, success rate).
//!
//! All randomness flows through caller-supplied [`rand::Rng`]
//! instances, so every run is independently seedable.

pub mod anneal;
pub mod board;
pub mod experiment;
pub mod probe;
pub mod restart;
pub mod search;
pub mod steepest;
pub mod stochastic;
