//! Terminal UI: the board rasterised from draw commands, solution and
//! hypothetical-time panels, and the mouse/keyboard event loop.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
