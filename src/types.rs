//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default play field dimensions (cells)
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Default compositing viewport dimensions (cells)
pub const VIEWPORT_WIDTH: usize = 40;
pub const VIEWPORT_HEIGHT: usize = 30;

/// Game timing (milliseconds)
pub const GAME_TICK_MS: u64 = 150;

/// Render cadence: ~3 frames per second, independent of the game tick
pub const FRAME_RATE: u64 = 3;
pub const RENDER_TICK_MS: u64 = 1000 / FRAME_RATE;

/// Rows of a freshly spawned piece that are already inside the visible grid
pub const SPAWN_PEEK_ROWS: i32 = 2;

/// Upper bound on shape width/height accepted by the catalog.
/// Keeps the per-lock cleared-row list on the stack.
pub const MAX_SHAPE_DIM: usize = 8;

/// State of one grid cell.
///
/// Only `Empty` and `Filled` participate in collision and line clearing;
/// `Text` and `Digit` are display tags that ride through the compositor
/// untouched and are mapped to glyphs by the output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Space {
    #[default]
    Empty,
    Filled,
    Text(char),
    Digit(u8),
}

impl Space {
    /// Whether this cell blocks a falling piece / counts toward a full row.
    pub fn is_solid(&self) -> bool {
        matches!(self, Space::Filled)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Space::Empty)
    }
}

/// Shape kinds available to the piece spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    LetterL,
    Bar,
    LetterT,
    Skew,
}

impl ShapeKind {
    /// All kinds, in catalog order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Square,
        ShapeKind::LetterL,
        ShapeKind::Bar,
        ShapeKind::LetterT,
        ShapeKind::Skew,
    ];

    /// Catalog key for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::LetterL => "letter_l",
            ShapeKind::Bar => "bar",
            ShapeKind::LetterT => "letter_t",
            ShapeKind::Skew => "skew",
        }
    }

    /// Parse a catalog key (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(ShapeKind::Square),
            "letter_l" => Some(ShapeKind::LetterL),
            "bar" => Some(ShapeKind::Bar),
            "letter_t" => Some(ShapeKind::LetterT),
            "skew" => Some(ShapeKind::Skew),
            _ => None,
        }
    }
}

/// Rotation direction for pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDir {
    Cw,
    Ccw,
}

/// Blend policy for scene members.
///
/// `Opaque` members stamp every cell of their content, including empty ones.
/// `Transparent` members only write non-empty cells, letting lower layers
/// show through their holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    Opaque,
    Transparent,
}

/// Integer screen/grid position. Negative values place an object partially
/// (or wholly) outside the viewport; the compositor clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Explicit construction parameters for a game session.
///
/// There is no CLI/file configuration surface; callers build this value
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub viewport_width: usize,
    pub viewport_height: usize,
    pub game_tick_ms: u64,
    pub render_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            game_tick_ms: GAME_TICK_MS,
            render_tick_ms: RENDER_TICK_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_kind_round_trips_catalog_keys() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ShapeKind::from_str("LETTER_T"), Some(ShapeKind::LetterT));
        assert_eq!(ShapeKind::from_str("hexagon"), None);
    }

    #[test]
    fn space_solidity() {
        assert!(Space::Filled.is_solid());
        assert!(!Space::Empty.is_solid());
        // Display tags never block collision
        assert!(!Space::Text('G').is_solid());
        assert!(!Space::Digit(7).is_solid());
    }
}
