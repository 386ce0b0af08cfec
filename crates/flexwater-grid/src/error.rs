//! Error types for grid construction.

use flexwater_core::TilePos;
use std::fmt;

/// Errors arising from building a [`FarmGrid`](crate::FarmGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An ASCII description used a character with no soil meaning.
    UnknownGlyph {
        /// The offending character.
        glyph: char,
        /// Where it appeared.
        tile: TilePos,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGlyph { glyph, tile } => {
                write!(f, "unknown soil glyph {glyph:?} at {tile}")
            }
        }
    }
}

impl std::error::Error for GridError {}
