//! The external solver collaborator: the query trait, an HTTP client for it,
//! and a dispatcher that runs queries on worker threads.

pub mod dispatch;
mod http;

pub use dispatch::{SolverDispatcher, SolverUpdate};
pub use http::HttpSolver;

use crate::error::SolverError;
use crate::solution::SolutionStep;

/// Minimum-moves and full-solution queries keyed by disk count.
///
/// Answers are opaque to the puzzle: neither the count nor the returned
/// steps are checked against the board.
pub trait Solver: Send + Sync {
    fn minimum_moves(&self, disks: usize) -> Result<u64, SolverError>;

    fn solve(&self, disks: usize) -> Result<Vec<SolutionStep>, SolverError>;
}
