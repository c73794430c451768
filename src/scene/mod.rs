//! Scene module - layered compositing of rectangular screen objects
//!
//! Pure (no I/O): output is a viewport-sized cell buffer that the terminal
//! layer turns into glyphs.

pub mod object;
pub mod scene;

pub use object::ScreenObject;
pub use scene::{MemberId, Scene, Viewport};
