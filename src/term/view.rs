//! BoardView: maps board state into scene members.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::scene::{Scene, ScreenObject};
use crate::types::{Blend, Coordinate};

/// Draw-order layers used by the game composition.
const LAYER_FRAME: i32 = 0;
const LAYER_BOARD: i32 = 1;
const LAYER_HUD: i32 = 2;
const LAYER_OVERLAY: i32 = 3;

/// Rebuilds the scene member set from the board every frame: an opaque
/// frame outline, the transparent board content above it, and the HUD.
#[derive(Debug, Default)]
pub struct BoardView;

impl BoardView {
    /// Replace the scene's members with the board's current visual state
    /// and composite a frame.
    pub fn compose(&self, board: &Board, scene: &mut Scene) {
        scene.clear_members();

        let viewport = scene.viewport();
        let frame_w = board.width() + 2;
        let frame_h = board.height() + 2;
        let start_x = (viewport.width.saturating_sub(frame_w) / 2) as i32;
        let start_y = (viewport.height.saturating_sub(frame_h) / 2) as i32;

        scene.add_member(ScreenObject::framed(
            frame_w,
            frame_h,
            Coordinate::new(start_x, start_y),
            LAYER_FRAME,
        ));

        // Locked cells plus the active piece, clipped to the grid; sits
        // inside the frame border and never blanks it.
        scene.add_member(ScreenObject::new(
            board.visible_grid(),
            Coordinate::new(start_x + 1, start_y + 1),
            LAYER_BOARD,
            Blend::Transparent,
        ));

        scene.add_member(ScreenObject::label(
            "LINES",
            Coordinate::new(start_x, start_y - 1),
            LAYER_HUD,
        ));
        scene.add_member(ScreenObject::counter(
            board.lines_cleared(),
            Coordinate::new(start_x + 6, start_y - 1),
            LAYER_HUD,
        ));

        if board.game_over() {
            let text = "GAME OVER";
            let x = start_x + (frame_w as i32 - text.len() as i32) / 2;
            let y = start_y + frame_h as i32 / 2;
            scene.add_member(ScreenObject::label(text, Coordinate::new(x, y), LAYER_OVERLAY));
        }

        scene.render_frame();
    }
}
