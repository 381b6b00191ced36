//! The [`Cell`] type: one grid square with its search bookkeeping.

use std::fmt;

use crate::geom::Pos;

/// Sentinel distance for a cell that no search has relaxed yet.
pub const UNREACHABLE: u32 = u32::MAX;

/// Smallest allowed traversal weight.
pub const MIN_WEIGHT: u32 = 1;

/// Index of a cell in its grid's row-major storage.
///
/// A `CellId` never owns anything; it is only meaningful for the grid that
/// produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub usize);

impl CellId {
    /// The raw storage index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single grid square.
///
/// `pos` is fixed at creation. `weight` and the wall/start/goal markers are
/// layout and survive between runs; everything else is per-run state that
/// [`reset_run`](Cell::reset_run) clears.
///
/// Only the per-run fields are public. Markers are moved through the
/// [`Grid`](crate::Grid) editing methods so that start and goal stay unique:
///
/// ```compile_fail
/// let mut grid = pathviz_core::Grid::parse("S.G").unwrap();
/// grid.cell_mut(0, 1).unwrap().is_start = true;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    pub distance: u32,
    pub heuristic: u32,
    weight: u32,
    pub parent: Option<CellId>,
    pub(crate) is_wall: bool,
    pub(crate) is_start: bool,
    pub(crate) is_goal: bool,
    pub is_visited: bool,
    pub on_path: bool,
}

impl Cell {
    /// A fresh open cell at `pos`.
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            distance: UNREACHABLE,
            heuristic: 0,
            weight: MIN_WEIGHT,
            parent: None,
            is_wall: false,
            is_start: false,
            is_goal: false,
            is_visited: false,
            on_path: false,
        }
    }

    /// Position of this cell in the grid.
    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    /// Row of this cell.
    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    /// Column of this cell.
    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    /// Traversal cost of entering this cell. Always at least [`MIN_WEIGHT`].
    #[inline]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Whether this cell is a wall. Walls are never entered.
    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.is_wall
    }

    /// Whether this cell holds the grid's start marker.
    #[inline]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    /// Whether this cell holds the grid's goal marker.
    #[inline]
    pub const fn is_goal(&self) -> bool {
        self.is_goal
    }

    /// Set the traversal cost, flooring at [`MIN_WEIGHT`].
    #[inline]
    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight.max(MIN_WEIGHT);
    }

    /// Whether any search has left a mark on this cell since the last reset.
    #[inline]
    pub fn is_touched(&self) -> bool {
        self.is_visited || self.on_path || self.parent.is_some() || self.distance != UNREACHABLE
    }

    /// Clear per-run search state. Layout (weight, markers) is kept.
    pub fn reset_run(&mut self) {
        self.distance = UNREACHABLE;
        self.heuristic = 0;
        self.parent = None;
        self.is_visited = false;
        self.on_path = false;
    }

    /// Back to a plain open cell: no markers, no run state. Weight is kept.
    pub(crate) fn reset_layout(&mut self) {
        self.reset_run();
        self.is_wall = false;
        self.is_start = false;
        self.is_goal = false;
    }
}
