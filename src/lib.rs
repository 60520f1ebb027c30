//! # Tower of Hanoi
//!
//! An interactive Tower of Hanoi puzzle for the terminal. Disks are moved by
//! clicking pegs; an external solver supplies the minimum move count and an
//! optimal move list that can be stepped through one instruction at a time.
//!
//! ## Modules
//!
//! - [`game`] — Board, move legality, disk-selection state machine
//! - [`layout`] — Board → pixel draw commands, pixel → peg hit testing
//! - [`solution`] — Solver steps, step-through player, hypothetical times
//! - [`session`] — Owned state of one puzzle window, solver result handling
//! - [`solver`] — Solver trait, HTTP client, background dispatcher
//! - [`ui`] — Terminal UI: board rendering, panels, event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod layout;
pub mod session;
pub mod solution;
pub mod solver;
pub mod ui;
