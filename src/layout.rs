//! Board → pixel geometry and the inverse pixel → peg lookup.
//!
//! Everything here is pure. The board is drawn on a fixed 600×400 surface
//! with the three pegs anchored at x = 100, 300, 500; the terminal UI scales
//! that surface onto whatever area it has.

use crate::game::{Board, Disk, Selection, PEG_COUNT};

pub const SURFACE_WIDTH: i32 = 600;
pub const SURFACE_HEIGHT: i32 = 400;

/// Horizontal anchor of each peg.
pub const PEG_ANCHORS: [i32; PEG_COUNT] = [100, 300, 500];

/// Half-width of the clickable window around each anchor.
pub const HIT_TOLERANCE: i32 = 20;

pub const POST_WIDTH: i32 = 10;
pub const POST_HEIGHT: i32 = 100;
pub const DISK_HEIGHT: i32 = 20;
pub const DISK_WIDTH_PER_SIZE: i32 = 20;

/// Named fill colours. The UI decides how each one looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Red,
    Orange,
    Blue,
    Green,
    Yellow,
    Purple,
    Cyan,
    Magenta,
    Violet,
    Pink,
    Black,
}

/// A filled rectangle in surface pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub paint: Paint,
}

/// Fixed palette for sizes 1–8. Larger disks all share black.
pub fn disk_paint(disk: Disk) -> Paint {
    match disk {
        1 => Paint::Blue,
        2 => Paint::Green,
        3 => Paint::Yellow,
        4 => Paint::Purple,
        5 => Paint::Cyan,
        6 => Paint::Magenta,
        7 => Paint::Violet,
        8 => Paint::Pink,
        _ => Paint::Black,
    }
}

/// Draw commands for the whole board: the three posts, then every disk from
/// the bottom of each peg upward. The selected disk is painted orange.
pub fn layout(board: &Board, selection: Option<Selection>) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(PEG_COUNT + board.disk_count());

    for anchor in PEG_ANCHORS {
        commands.push(DrawCommand {
            x: anchor - POST_WIDTH / 2,
            y: SURFACE_HEIGHT - POST_HEIGHT,
            width: POST_WIDTH,
            height: POST_HEIGHT,
            paint: Paint::Red,
        });
    }

    for (peg, anchor) in PEG_ANCHORS.into_iter().enumerate() {
        for (level, &disk) in board.peg(peg).iter().enumerate() {
            let width = disk as i32 * DISK_WIDTH_PER_SIZE;
            let paint = match selection {
                Some(sel) if sel.disk == disk => Paint::Orange,
                _ => disk_paint(disk),
            };
            commands.push(DrawCommand {
                x: anchor - width / 2,
                y: SURFACE_HEIGHT - (POST_HEIGHT + (level as i32 + 1) * DISK_HEIGHT),
                width,
                height: DISK_HEIGHT,
                paint,
            });
        }
    }

    commands
}

/// Peg whose click window contains `x`, if any.
pub fn hit_test(x: i32) -> Option<usize> {
    PEG_ANCHORS
        .iter()
        .position(|&anchor| (anchor - HIT_TOLERANCE..=anchor + HIT_TOLERANCE).contains(&x))
}
