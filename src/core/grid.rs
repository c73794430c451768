//! Grid module - the bounded 2D cell buffer under both subsystems
//!
//! Fixed dimensions, row-major flat storage, zero-based `(row, col)`
//! indexing. Out-of-range access is a caller bug and is reported as
//! `Error::OutOfBounds`, never clamped.

use crate::error::{Error, Result};
use crate::types::Space;

/// Rectangular fixed-size buffer of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major: `row * width + col`
    cells: Vec<Space>,
}

impl Grid {
    /// Create a grid fully initialized to `Space::Empty`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Space::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Space> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Space) -> Result<()> {
        let i = self.index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Overwrite every cell. Used once per frame to reset the scene buffer.
    pub fn fill(&mut self, value: Space) {
        self.cells.fill(value);
    }

    /// One row as a slice. Panics on an out-of-range row (internal use is
    /// always bounded by `height()`).
    pub fn row(&self, row: usize) -> &[Space] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom. Restartable: each call yields a fresh
    /// iterator over the same cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Space]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    pub(crate) fn cells(&self) -> &[Space] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Space] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.get(row, col).unwrap(), Space::Empty);
            }
        }
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut grid = Grid::new(4, 3);
        grid.set(2, 1, Space::Filled).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), Space::Filled);
        grid.set(2, 1, Space::Empty).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), Space::Empty);
    }

    #[test]
    fn out_of_bounds_is_rejected_not_clamped() {
        let mut grid = Grid::new(4, 3);
        assert!(matches!(grid.get(3, 0), Err(Error::OutOfBounds { .. })));
        assert!(matches!(grid.get(0, 4), Err(Error::OutOfBounds { .. })));
        assert!(matches!(
            grid.set(3, 0, Space::Filled),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.set(0, 4, Space::Filled),
            Err(Error::OutOfBounds { .. })
        ));
        // Nothing was written anywhere
        assert!(grid.rows().all(|r| r.iter().all(Space::is_empty)));
    }

    #[test]
    fn fill_overwrites_every_cell() {
        let mut grid = Grid::new(2, 2);
        grid.fill(Space::Filled);
        assert!(grid.rows().all(|r| r.iter().all(Space::is_solid)));
        grid.fill(Space::Empty);
        assert!(grid.rows().all(|r| r.iter().all(Space::is_empty)));
    }

    #[test]
    fn rows_iterator_is_restartable() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 2, Space::Filled).unwrap();

        let first: Vec<_> = grid.rows().collect();
        let second: Vec<_> = grid.rows().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[1][2], Space::Filled);
    }
}
