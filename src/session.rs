//! Everything one puzzle window owns: the board state machine, the solution
//! player, the solver's minimum-moves answer and the hypothetical-time
//! table. No I/O happens here; solver results are handed in by the caller.

use std::num::NonZeroUsize;

use tracing::{debug, info, warn};

use crate::error::SolverError;
use crate::game::{MoveError, PuzzleState, SelectOutcome};
use crate::layout::{self, DrawCommand};
use crate::solution::{timing, Advance, HypotheticalTime, SolutionPlayer, SolutionStep};

#[derive(Debug, Clone)]
pub struct Session {
    disk_count: NonZeroUsize,
    puzzle: PuzzleState,
    player: SolutionPlayer,
    min_moves: Option<u64>,
    hypothetical: Vec<HypotheticalTime>,
}

impl Session {
    pub fn new(disk_count: NonZeroUsize) -> Self {
        Session {
            disk_count,
            puzzle: PuzzleState::new(disk_count),
            player: SolutionPlayer::new(),
            min_moves: None,
            hypothetical: Vec::new(),
        }
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count.get()
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    pub fn player(&self) -> &SolutionPlayer {
        &self.player
    }

    /// Solver's minimum move count for the current disk count, once known.
    pub fn min_moves(&self) -> Option<u64> {
        self.min_moves
    }

    pub fn hypothetical_times(&self) -> &[HypotheticalTime] {
        &self.hypothetical
    }

    /// Put all disks back on the first peg. The minimum-moves answer is
    /// dropped so the caller can query it again.
    pub fn restart(&mut self) {
        self.puzzle.reset(self.disk_count);
        self.min_moves = None;
    }

    pub fn set_disk_count(&mut self, disk_count: NonZeroUsize) {
        self.disk_count = disk_count;
        self.restart();
    }

    pub fn select_peg(&mut self, peg: usize) -> Result<SelectOutcome, MoveError> {
        self.puzzle.select_at(peg)
    }

    /// Click at surface x-coordinate `x`. Clicks between pegs do nothing.
    pub fn click(&mut self, x: i32) -> Result<SelectOutcome, MoveError> {
        match layout::hit_test(x) {
            Some(peg) => self.select_peg(peg),
            None => Ok(SelectOutcome::Ignored),
        }
    }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        layout::layout(self.puzzle.board(), self.puzzle.selection())
    }

    pub fn advance_solution(&mut self) -> Advance {
        self.player.advance()
    }

    /// Store a minimum-moves answer. Answers for another disk count (the
    /// size changed while the query was in flight) are dropped. On failure
    /// nothing changes and the error is handed back for display.
    pub fn apply_minimum_moves(
        &mut self,
        disks: usize,
        result: Result<u64, SolverError>,
    ) -> Result<(), SolverError> {
        let moves =
            result.inspect_err(|e| warn!(disks, error = %e, "minimum moves query failed"))?;
        if disks != self.disk_count() {
            debug!(disks, current = self.disk_count(), "stale minimum moves ignored");
            return Ok(());
        }
        info!(disks, moves, "minimum moves received");
        self.min_moves = Some(moves);
        Ok(())
    }

    /// Load a solver's move list into the player, same rules as
    /// [`Session::apply_minimum_moves`].
    pub fn apply_solution(
        &mut self,
        disks: usize,
        result: Result<Vec<SolutionStep>, SolverError>,
    ) -> Result<(), SolverError> {
        let steps = result.inspect_err(|e| warn!(disks, error = %e, "solve query failed"))?;
        if disks != self.disk_count() {
            debug!(disks, current = self.disk_count(), "stale solution ignored");
            return Ok(());
        }
        info!(disks, steps = steps.len(), "solution received");
        self.player.load(steps);
        Ok(())
    }

    /// Add a row to the hypothetical-time table.
    pub fn apply_hypothetical(
        &mut self,
        disks: usize,
        result: Result<u64, SolverError>,
    ) -> Result<(), SolverError> {
        let moves = result
            .inspect_err(|e| warn!(disks, error = %e, "hypothetical minimum moves query failed"))?;
        timing::insert_sorted(&mut self.hypothetical, HypotheticalTime::new(disks, moves));
        Ok(())
    }
}
