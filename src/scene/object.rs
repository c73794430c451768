//! ScreenObject - a positioned, layered, optionally-opaque cell rectangle
//!
//! The display-side generalization of pieces and boards: anything the scene
//! can composite is content plus placement, a draw-order layer, and a blend
//! policy.

use crate::core::grid::Grid;
use crate::types::{Blend, Coordinate, Space};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenObject {
    position: Coordinate,
    layer: i32,
    blend: Blend,
    content: Grid,
}

impl ScreenObject {
    pub fn new(content: Grid, position: Coordinate, layer: i32, blend: Blend) -> Self {
        Self {
            position,
            layer,
            blend,
            content,
        }
    }

    /// An opaque rectangular outline: the classic board frame. Interior
    /// cells are empty and, being opaque, blank out anything beneath them.
    pub fn framed(width: usize, height: usize, position: Coordinate, layer: i32) -> Self {
        let mut content = Grid::new(width, height);
        if width > 0 && height > 0 {
            for col in 0..width {
                let _ = content.set(0, col, Space::Filled);
                let _ = content.set(height - 1, col, Space::Filled);
            }
            for row in 0..height {
                let _ = content.set(row, 0, Space::Filled);
                let _ = content.set(row, width - 1, Space::Filled);
            }
        }
        Self::new(content, position, layer, Blend::Opaque)
    }

    /// A one-row transparent text label carried through the compositor as
    /// `Space::Text` tags.
    pub fn label(text: &str, position: Coordinate, layer: i32) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut content = Grid::new(chars.len().max(1), 1);
        for (col, ch) in chars.into_iter().enumerate() {
            let _ = content.set(0, col, Space::Text(ch));
        }
        Self::new(content, position, layer, Blend::Transparent)
    }

    /// A one-row transparent decimal counter made of `Space::Digit` tags.
    pub fn counter(value: u32, position: Coordinate, layer: i32) -> Self {
        let digits: Vec<u8> = if value == 0 {
            vec![0]
        } else {
            let mut acc = Vec::new();
            let mut rest = value;
            while rest > 0 {
                acc.push((rest % 10) as u8);
                rest /= 10;
            }
            acc.reverse();
            acc
        };

        let mut content = Grid::new(digits.len(), 1);
        for (col, d) in digits.into_iter().enumerate() {
            let _ = content.set(0, col, Space::Digit(d));
        }
        Self::new(content, position, layer, Blend::Transparent)
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position.x += dx;
        self.position.y += dy;
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn blend(&self) -> Blend {
        self.blend
    }

    pub fn content(&self) -> &Grid {
        &self.content
    }

    pub fn width(&self) -> usize {
        self.content.width()
    }

    pub fn height(&self) -> usize {
        self.content.height()
    }
}
