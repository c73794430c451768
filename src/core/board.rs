//! Board module - the locked grid plus the falling-piece state machine
//!
//! One call to `tick` performs one transition of the spawn -> fall -> lock ->
//! line-clear machine. The locked grid holds only `Empty`/`Filled` cells; a
//! piece is always present unless the game is over.

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::core::shapes::ShapeCatalog;
use crate::types::{RotateDir, Space, MAX_SHAPE_DIM};

/// Per-tick outcome of the board state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The active piece moved (or stayed) and keeps falling.
    Falling,
    /// The active piece just merged into the locked grid; a fresh piece has
    /// been spawned for the next tick.
    Locked,
    /// Terminal. Further ticks leave the board untouched.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Board {
    locked: Grid,
    active: Option<Piece>,
    phase: Phase,
    catalog: ShapeCatalog,
    rng: SimpleRng,
    lines_cleared: u32,
}

impl Board {
    /// Create a board of fixed dimensions and spawn the first piece.
    /// The catalog is validated-total, so spawning never fails.
    pub fn new(width: usize, height: usize, catalog: ShapeCatalog, mut rng: SimpleRng) -> Self {
        let first = Piece::spawn(&catalog, &mut rng, width);
        Self {
            locked: Grid::new(width, height),
            active: Some(first),
            phase: Phase::Falling,
            catalog,
            rng,
            lines_cleared: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.locked.width()
    }

    pub fn height(&self) -> usize {
        self.locked.height()
    }

    pub fn locked(&self) -> &Grid {
        &self.locked
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Advance the state machine by one tick.
    ///
    /// Blocked pieces either end the game (when any part is still above
    /// row 0) or lock, clear full rows in a single pass, and hand over to a
    /// freshly spawned piece.
    pub fn tick(&mut self) -> Phase {
        let blocked = match &self.active {
            Some(piece) => self.contact(piece),
            // Only GameOver leaves the board without a piece.
            None => return self.phase,
        };

        if !blocked {
            if let Some(piece) = &mut self.active {
                piece.translate(0, 1);
            }
            self.phase = Phase::Falling;
        } else if self.active.as_ref().is_some_and(|p| p.position().y < 0) {
            // Blocked before fully entering the grid: the stack topped out.
            self.active = None;
            self.phase = Phase::GameOver;
        } else if let Some(piece) = self.active.take() {
            self.merge(&piece);
            let cleared = self.clear_full_rows();
            self.lines_cleared += cleared.len() as u32;
            let width = self.width();
            self.active = Some(Piece::spawn(&self.catalog, &mut self.rng, width));
            self.phase = Phase::Locked;
        }

        self.phase
    }

    /// Lateral collision-aware movement. Rejection is a normal boolean
    /// outcome, not an error.
    pub fn try_shift(&mut self, dx: i32) -> bool {
        self.try_transform(|piece| piece.translate(dx, 0))
    }

    /// Rotate the active piece if the rotated footprint is free.
    pub fn try_rotate(&mut self, dir: RotateDir) -> bool {
        self.try_transform(|piece| piece.rotate(dir))
    }

    fn try_transform(&mut self, transform: impl FnOnce(&mut Piece)) -> bool {
        let Some(piece) = &self.active else {
            return false;
        };
        let mut candidate = piece.clone();
        transform(&mut candidate);
        if self.fits(&candidate) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// The locked grid with the active piece stamped in, in-bounds cells
    /// only. This is the board's visual state for the compositor.
    pub fn visible_grid(&self) -> Grid {
        let mut grid = self.locked.clone();
        if let Some(piece) = &self.active {
            for (row, col) in piece.cells() {
                if row >= 0 && col >= 0 {
                    let _ = grid.set(row as usize, col as usize, Space::Filled);
                }
            }
        }
        grid
    }

    /// Whether the piece cannot descend one more row: any filled cell would
    /// land on the floor or on a locked cell. Cells still above row 0 only
    /// collide once their target row is inside the grid.
    fn contact(&self, piece: &Piece) -> bool {
        piece.cells().any(|(row, col)| {
            let below = row + 1;
            below >= self.height() as i32 || self.solid_at(below, col)
        })
    }

    /// Whether every filled cell of the piece is inside the play field
    /// horizontally, above the floor, and off the locked stack. Rows above
    /// the grid are fine; the piece is still entering.
    fn fits(&self, piece: &Piece) -> bool {
        piece.cells().all(|(row, col)| {
            col >= 0
                && col < self.width() as i32
                && row < self.height() as i32
                && !self.solid_at(row, col)
        })
    }

    fn solid_at(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.locked
            .get(row as usize, col as usize)
            .map(|space| space.is_solid())
            .unwrap_or(false)
    }

    /// Merge every filled cell of the piece into the locked grid. Cells
    /// outside the grid are discarded.
    fn merge(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            if row >= 0 && col >= 0 {
                let _ = self.locked.set(row as usize, col as usize, Space::Filled);
            }
        }
    }

    fn is_row_full(&self, row: usize) -> bool {
        self.locked.row(row).iter().all(Space::is_solid)
    }

    /// Clear every full row in a single pass and return their indices
    /// (top to bottom). Rows above a cleared row shift down one step per
    /// cleared row below them; fresh empty rows appear at the top.
    ///
    /// A single lock can complete at most `MAX_SHAPE_DIM` rows (the shape
    /// height bound), which keeps the result on the stack.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_SHAPE_DIM> {
        let width = self.locked.width();
        let height = self.locked.height();
        let mut cleared = ArrayVec::new();
        let mut write_row = height;

        // Two-pointer compaction from the bottom up: full rows are skipped,
        // everything else slides down into place.
        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let cells = self.locked.cells_mut();
                    let src = read_row * width;
                    cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Freshly exposed rows at the top become empty.
        self.locked.cells_mut()[..write_row * width].fill(Space::Empty);

        cleared.reverse();
        cleared
    }

    /// Replace the active piece. Intended for scripted setups and tests;
    /// normal play replaces pieces through `tick`.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
        self.phase = Phase::Falling;
    }

    /// Write one locked cell directly. Keeps the locked-grid invariant by
    /// only accepting filled/empty, never display tags.
    pub fn set_locked(&mut self, row: usize, col: usize, filled: bool) -> crate::error::Result<()> {
        let space = if filled { Space::Filled } else { Space::Empty };
        self.locked.set(row, col, space)
    }
}
