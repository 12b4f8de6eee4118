//! Board representation and conflict-counting objective.
//!
//! A board holds one queen per column; only the row of each queen
//! varies. Rows may repeat, which is exactly the infeasibility the
//! search explores. The objective function counts attacking pairs in
//! O(N) by bucketing queens per row and per diagonal.

mod conflicts;
mod display;
mod types;

pub use conflicts::conflicts;
pub use types::{Board, Move};
