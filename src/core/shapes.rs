//! Shapes module - piece geometry and the shape catalog
//!
//! Shapes are small immutable grids loaded from a JSON catalog mapping each
//! kind name to rows of 0/1. The catalog is a total mapping validated at
//! load time, so lookups after construction cannot fail.

use std::collections::HashMap;

use serde::Deserialize;

use crate::core::grid::Grid;
use crate::error::{Error, Result};
use crate::types::{RotateDir, ShapeKind, Space, MAX_SHAPE_DIM};

/// Immutable piece geometry. Invariant: rectangular, nonempty, at most
/// `MAX_SHAPE_DIM` cells in either dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    grid: Grid,
}

impl Shape {
    fn from_rows(kind: ShapeKind, rows: &[Vec<u8>]) -> Result<Self> {
        let malformed = |reason: String| Error::UnknownShapeKind { kind, reason };

        let height = rows.len();
        if height == 0 {
            return Err(malformed("shape has no rows".into()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(malformed("shape rows are empty".into()));
        }
        if height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(malformed(format!(
                "shape is {width}x{height}, larger than {MAX_SHAPE_DIM}x{MAX_SHAPE_DIM}"
            )));
        }

        let mut grid = Grid::new(width, height);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(malformed(format!(
                    "row {r} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => grid.set(r, c, Space::Filled)?,
                    other => {
                        return Err(malformed(format!(
                            "cell ({r}, {c}) is {other}, expected 0 or 1"
                        )))
                    }
                }
            }
        }

        Ok(Self { grid })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn filled_at(&self, row: usize, col: usize) -> bool {
        self.grid.row(row)[col].is_solid()
    }

    /// Iterate `(row, col)` offsets of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |r| {
            (0..self.width()).filter_map(move |c| self.filled_at(r, c).then_some((r, c)))
        })
    }

    /// The shape rotated 90 degrees. Dimensions swap; the result satisfies
    /// the same invariants as the source.
    pub fn rotated(&self, dir: RotateDir) -> Shape {
        let (w, h) = (self.width(), self.height());
        let mut grid = Grid::new(h, w);
        for (r, c) in self.cells() {
            let (nr, nc) = match dir {
                RotateDir::Cw => (c, h - 1 - r),
                RotateDir::Ccw => (w - 1 - c, r),
            };
            // Target indices stay inside the swapped dimensions.
            grid.set(nr, nc, Space::Filled).unwrap();
        }
        Shape { grid }
    }
}

#[derive(Deserialize)]
struct RawCatalog(HashMap<String, Vec<Vec<u8>>>);

/// Total mapping from shape kind to geometry, built once at startup and
/// passed into `Board` construction. Replaces the original's module-global
/// parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    square: Shape,
    letter_l: Shape,
    bar: Shape,
    letter_t: Shape,
    skew: Shape,
}

impl ShapeCatalog {
    /// Parse and validate a JSON catalog. Every kind must be present and
    /// well-formed; the first offender fails the whole load.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let RawCatalog(entries) = serde_json::from_str(text)?;

        let shape_for = |kind: ShapeKind| -> Result<Shape> {
            let rows = entries.get(kind.as_str()).ok_or_else(|| Error::UnknownShapeKind {
                kind,
                reason: "missing from catalog".into(),
            })?;
            Shape::from_rows(kind, rows)
        };

        Ok(Self {
            square: shape_for(ShapeKind::Square)?,
            letter_l: shape_for(ShapeKind::LetterL)?,
            bar: shape_for(ShapeKind::Bar)?,
            letter_t: shape_for(ShapeKind::LetterT)?,
            skew: shape_for(ShapeKind::Skew)?,
        })
    }

    /// The embedded default catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(include_str!("../../assets/shapes.json"))
    }

    /// Total lookup: the catalog holds one shape per kind by construction.
    pub fn lookup(&self, kind: ShapeKind) -> &Shape {
        match kind {
            ShapeKind::Square => &self.square,
            ShapeKind::LetterL => &self.letter_l,
            ShapeKind::Bar => &self.bar,
            ShapeKind::LetterT => &self.letter_t,
            ShapeKind::Skew => &self.skew,
        }
    }
}
