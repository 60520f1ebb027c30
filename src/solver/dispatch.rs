use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use super::Solver;
use crate::error::SolverError;
use crate::solution::SolutionStep;

/// Completions sent from solver worker threads to the UI loop.
#[derive(Debug)]
pub enum SolverUpdate {
    MinimumMoves {
        disks: usize,
        result: Result<u64, SolverError>,
    },
    Solution {
        disks: usize,
        result: Result<Vec<SolutionStep>, SolverError>,
    },
    /// Minimum moves fetched for the hypothetical-time table.
    Hypothetical {
        disks: usize,
        result: Result<u64, SolverError>,
    },
}

/// Fire-and-forget solver queries. Every request gets its own worker thread
/// which sends exactly one [`SolverUpdate`]. Overlapping requests are
/// neither cancelled nor merged.
pub struct SolverDispatcher<S> {
    solver: Arc<S>,
    updates: Sender<SolverUpdate>,
}

impl<S: Solver + 'static> SolverDispatcher<S> {
    pub fn new(solver: S, updates: Sender<SolverUpdate>) -> Self {
        SolverDispatcher {
            solver: Arc::new(solver),
            updates,
        }
    }

    pub fn request_minimum_moves(&self, disks: usize) {
        self.spawn("minimum-moves", move |solver| SolverUpdate::MinimumMoves {
            disks,
            result: solver.minimum_moves(disks),
        });
    }

    pub fn request_solution(&self, disks: usize) {
        self.spawn("solve", move |solver| SolverUpdate::Solution {
            disks,
            result: solver.solve(disks),
        });
    }

    pub fn request_hypothetical(&self, disks: usize) {
        self.spawn("hypothetical", move |solver| SolverUpdate::Hypothetical {
            disks,
            result: solver.minimum_moves(disks),
        });
    }

    fn spawn<F>(&self, kind: &'static str, query: F)
    where
        F: FnOnce(&S) -> SolverUpdate + Send + 'static,
    {
        let solver = Arc::clone(&self.solver);
        let updates = self.updates.clone();
        let spawned = thread::Builder::new()
            .name(format!("solver-{kind}"))
            .spawn(move || {
                let update = query(solver.as_ref());
                debug!(kind, "solver query finished");
                // The UI may already have shut down.
                let _ = updates.send(update);
            });

        if let Err(e) = spawned {
            warn!(kind, error = %e, "failed to spawn solver worker");
        }
    }
}
