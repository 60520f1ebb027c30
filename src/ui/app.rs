use std::io;
use std::num::NonZeroUsize;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crate::config::AppConfig;
use crate::game::{MoveError, SelectOutcome};
use crate::session::Session;
use crate::solution::Advance;
use crate::solver::{Solver, SolverDispatcher, SolverUpdate};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, info};

use super::board_widget;

pub struct App<S> {
    session: Session,
    dispatcher: SolverDispatcher<S>,
    updates: Receiver<SolverUpdate>,
    max_disks: usize,
    hypothetical_disks: Vec<usize>,
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
}

impl<S: Solver + 'static> App<S> {
    pub fn new(session: Session, solver: S, config: &AppConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        App {
            session,
            dispatcher: SolverDispatcher::new(solver, tx),
            updates: rx,
            max_disks: config.puzzle.max_disks.max(1),
            hypothetical_disks: config.display.hypothetical_disks.clone(),
            board_area: Rect::default(),
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Kick off the startup queries: minimum moves for the current board and
    /// one per hypothetical-time row.
    pub fn start(&self) {
        self.dispatcher
            .request_minimum_moves(self.session.disk_count());
        for &disks in &self.hypothetical_disks {
            self.dispatcher.request_hypothetical(disks);
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.drain_updates();

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn drain_updates(&mut self) {
        while let Ok(update) = self.updates.try_recv() {
            self.apply_update(update);
        }
    }

    /// Fold one solver completion into the session. Failures only set the
    /// message line.
    pub fn apply_update(&mut self, update: SolverUpdate) {
        match update {
            SolverUpdate::MinimumMoves { disks, result } => {
                if self.session.apply_minimum_moves(disks, result).is_err() {
                    self.message = Some("Error getting minimum moves".to_string());
                }
            }
            SolverUpdate::Solution { disks, result } => {
                if self.session.apply_solution(disks, result).is_err() {
                    self.message = Some("Error getting solution".to_string());
                }
            }
            SolverUpdate::Hypothetical { disks, result } => {
                if self.session.apply_hypothetical(disks, result).is_err() {
                    self.message = Some(format!("Error getting minimum moves for {disks} disks"));
                }
            }
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.restart();
                self.dispatcher
                    .request_minimum_moves(self.session.disk_count());
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                info!(disks = self.session.disk_count(), "solution requested");
                self.dispatcher.request_solution(self.session.disk_count());
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => {
                if self.session.advance_solution() == Advance::Finished {
                    self.message = Some("You won!".to_string());
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.change_disk_count(self.session.disk_count() + 1);
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.change_disk_count(self.session.disk_count().saturating_sub(1));
            }
            _ => {}
        }
    }

    fn change_disk_count(&mut self, disks: usize) {
        let Some(disks) = NonZeroUsize::new(disks).filter(|n| n.get() <= self.max_disks) else {
            self.message = Some(format!("Disk count must be between 1 and {}", self.max_disks));
            return;
        };
        if disks.get() == self.session.disk_count() {
            return;
        }
        self.session.set_disk_count(disks);
        self.dispatcher.request_minimum_moves(disks.get());
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.handle_click(mouse.column, mouse.row);
        }
    }

    /// Translate a click on the terminal into a peg click on the surface.
    fn handle_click(&mut self, column: u16, row: u16) {
        let inside = row >= self.board_area.y && row < self.board_area.y + self.board_area.height;
        let Some(x) = board_widget::column_to_surface_x(self.board_area, column).filter(|_| inside)
        else {
            return;
        };
        self.message = None;

        match self.session.click(x) {
            Ok(SelectOutcome::Moved(_)) if self.session.puzzle().is_solved() => {
                self.message = Some(format!(
                    "Solved in {} moves!",
                    self.session.puzzle().moves()
                ));
            }
            Ok(outcome) => debug!(?outcome, x, "click"),
            Err(e @ MoveError::InvalidMove { .. }) => {
                self.message = Some(e.to_string());
            }
            Err(e) => {
                self.message = Some(format!("Invalid click: {e}"));
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = super::game_view::render(frame, &self.session, &self.message);
    }
}
