//! Terminal falling-block puzzle.
//!
//! Two subsystems do the real work: the board/piece model in [`core`]
//! (bounded grid, collision-aware falling piece, locking, line clearing) and
//! the layered compositor in [`scene`] (depth-ordered, viewport-clipped,
//! opacity-aware merging of rectangular objects). The [`term`] layer is thin
//! glue that maps board state into scene members and flushes composited rows
//! through crossterm.

pub mod core;
pub mod error;
pub mod scene;
pub mod term;
pub mod types;

pub use error::{Error, Result};
