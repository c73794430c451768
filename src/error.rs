//! Typed errors for the core and the terminal output layer.

use std::io;

use crate::types::ShapeKind;

#[derive(Debug)]
pub enum Error {
    /// Grid access outside `[0, height) x [0, width)`. A contract violation
    /// by the caller; never silently clamped.
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    /// A shape kind was absent from the catalog or its entry was malformed
    /// (ragged rows, empty, or oversized).
    UnknownShapeKind { kind: ShapeKind, reason: String },
    /// The catalog text itself was not valid JSON of the expected form.
    InvalidCatalog(serde_json::Error),
    /// The terminal rejected output. Fatal; retrying a frame has no benefit.
    TerminalUnavailable(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "grid access ({row}, {col}) outside {width}x{height} bounds"
            ),
            Self::UnknownShapeKind { kind, reason } => {
                write!(f, "shape catalog entry '{}': {reason}", kind.as_str())
            }
            Self::InvalidCatalog(err) => write!(f, "malformed shape catalog: {err}"),
            Self::TerminalUnavailable(err) => write!(f, "terminal unavailable: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCatalog(err) => Some(err),
            Self::TerminalUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidCatalog(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
