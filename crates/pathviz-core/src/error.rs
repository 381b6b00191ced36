use thiserror::Error;

use crate::geom::Pos;

/// Errors raised while building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    #[error("position {pos} is outside the grid")]
    OutOfBounds { pos: Pos },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid layout character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Pos },
    #[error("layout contains more than one \u{201c}{marker}\u{201d} marker")]
    DuplicateMarker { marker: char },
}
