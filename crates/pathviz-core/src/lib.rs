//! **pathviz-core**: the editable grid that step-by-step searches run on.
//!
//! This crate provides the coordinate type, the [`Cell`] with its layout and
//! per-run search fields, and the [`Grid`] that owns them, along with the
//! editing and reset operations a front end drives between runs.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellId, MIN_WEIGHT, UNREACHABLE};
pub use error::GridError;
pub use geom::Pos;
pub use grid::Grid;
