//! Terminal output module.
//!
//! `BoardView` maps board state into scene members (pure); `TerminalRenderer`
//! owns the crossterm lifecycle and the glyph policy. The core never touches
//! the terminal.

pub mod renderer;
pub mod view;

pub use renderer::{push_glyph, TerminalRenderer};
pub use view::BoardView;
