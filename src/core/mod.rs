//! Core module - pure game logic with no I/O dependencies
//!
//! Deterministic and testable: same seed and catalog, same game.

pub mod board;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;

// Re-export commonly used types
pub use board::{Board, Phase};
pub use grid::Grid;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::{Shape, ShapeCatalog};
