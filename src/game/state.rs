use std::num::NonZeroUsize;

use tracing::debug;

use super::board::{Board, Disk, PEG_COUNT};

/// A disk picked up from a peg, waiting for its destination click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub disk: Disk,
    pub peg: usize,
}

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: Disk,
    pub from: usize,
    pub to: usize,
}

/// What a peg click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing selected and the clicked peg was empty.
    Ignored,
    Picked(Selection),
    Moved(Move),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("You cannot place a larger disk onto a smaller disk")]
    InvalidMove { disk: Disk, onto: Disk, to: usize },

    #[error("peg {0} does not exist")]
    InvalidPeg(usize),
}

/// Board plus selection and move counter.
///
/// Two states: idle (`selection() == None`) and disk-selected. A click on a
/// peg either picks up its top disk or tries to drop the held one there; a
/// failed drop still returns to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    board: Board,
    selection: Option<Selection>,
    moves: u64,
}

impl PuzzleState {
    pub fn new(disk_count: NonZeroUsize) -> Self {
        PuzzleState {
            board: Board::new(disk_count.get()),
            selection: None,
            moves: 0,
        }
    }

    /// Rebuild the starting tower and clear the counter and selection.
    pub fn reset(&mut self, disk_count: NonZeroUsize) {
        *self = PuzzleState::new(disk_count);
        debug!(disks = disk_count.get(), "board reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// All disks stacked on one peg other than the starting one.
    pub fn is_solved(&self) -> bool {
        let total = self.board.disk_count();
        total > 0 && (1..PEG_COUNT).any(|peg| self.board.peg(peg).len() == total)
    }

    /// Handle a click on `peg`.
    pub fn select_at(&mut self, peg: usize) -> Result<SelectOutcome, MoveError> {
        if peg >= PEG_COUNT {
            return Err(MoveError::InvalidPeg(peg));
        }

        let Some(held) = self.selection.take() else {
            return Ok(match self.board.top(peg) {
                Some(disk) => {
                    let selection = Selection { disk, peg };
                    self.selection = Some(selection);
                    debug!(disk, peg, "disk selected");
                    SelectOutcome::Picked(selection)
                }
                None => SelectOutcome::Ignored,
            });
        };

        match self.board.move_top(held.peg, peg) {
            Some(disk) => {
                self.moves += 1;
                debug!(disk, from = held.peg, to = peg, moves = self.moves, "disk moved");
                Ok(SelectOutcome::Moved(Move {
                    disk,
                    from: held.peg,
                    to: peg,
                }))
            }
            None => {
                // Only a non-empty destination can reject a move.
                let onto = self.board.top(peg).unwrap_or_default();
                debug!(disk = held.disk, onto, to = peg, "move rejected");
                Err(MoveError::InvalidMove {
                    disk: held.disk,
                    onto,
                    to: peg,
                })
            }
        }
    }
}
