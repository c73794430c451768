//! Piece module - the falling piece
//!
//! A piece is shape geometry plus a board position. It owns no grid and
//! performs no collision checks itself; translation is pure and the board
//! decides whether a move stands.

use crate::core::rng::SimpleRng;
use crate::core::shapes::{Shape, ShapeCatalog};
use crate::types::{Coordinate, RotateDir, ShapeKind, SPAWN_PEEK_ROWS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    shape: Shape,
    /// Top-left corner of the shape grid in board coordinates.
    /// `y` is negative while the piece is still entering from above.
    position: Coordinate,
}

impl Piece {
    /// Spawn a random piece above the visible grid: `SPAWN_PEEK_ROWS` of it
    /// poke into view and it scrolls down from there. The column is
    /// pseudo-random within the play field.
    pub fn spawn(catalog: &ShapeCatalog, rng: &mut SimpleRng, board_width: usize) -> Self {
        let kind = rng.draw_kind();
        let shape = catalog.lookup(kind).clone();

        let max_x = board_width.saturating_sub(shape.width());
        let x = rng.next_range(max_x as u32 + 1) as i32;
        let y = SPAWN_PEEK_ROWS - shape.height() as i32;

        Self {
            kind,
            shape,
            position: Coordinate::new(x, y),
        }
    }

    /// Explicitly placed piece, for tests and scripted setups.
    pub fn with_shape(kind: ShapeKind, shape: Shape, position: Coordinate) -> Self {
        Self {
            kind,
            shape,
            position,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Pure translation. Never rejects; the board's collision logic decides
    /// whether to call this.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    /// Swap in the 90-degree-rotated shape. Pure, like `translate`; the
    /// board validates the rotated footprint before applying.
    pub fn rotate(&mut self, dir: RotateDir) {
        self.shape = self.shape.rotated(dir);
    }

    /// Absolute `(row, col)` board coordinates of every filled cell.
    /// Rows can be negative while the piece is entering the grid.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.cells().map(move |(r, c)| {
            (self.position.y + r as i32, self.position.x + c as i32)
        })
    }
}
