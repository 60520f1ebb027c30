//! Core puzzle logic: the three-peg board and the click-driven selection
//! state machine that moves disks between pegs.

mod board;
mod state;

pub use board::{Board, Disk, PEG_COUNT};
pub use state::{Move, MoveError, PuzzleState, SelectOutcome, Selection};
