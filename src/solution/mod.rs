//! Solver output: step records, the step-through player, and the
//! "how long by hand" table derived from minimum move counts.

mod player;
mod step;
pub mod timing;

pub use player::{Advance, SolutionPlayer};
pub use step::{PegLabel, SolutionStep};
pub use timing::HypotheticalTime;
