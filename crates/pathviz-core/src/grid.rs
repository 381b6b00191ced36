//! The [`Grid`] type: a fixed-size, row-major collection of [`Cell`]s.
//!
//! The grid owns the layout (walls, weights, start and goal) that callers
//! edit between runs, and the per-run fields that searches write while they
//! step. A search receives `&mut Grid` on every tick, so an editor can change
//! the layout between ticks through ordinary borrows.

use std::fmt::Write as _;
use std::ops::{Index, IndexMut};

use crate::cell::{Cell, CellId};
use crate::error::GridError;
use crate::geom::Pos;

/// A 2D grid of [`Cell`]s with a unique start and a unique goal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Option<CellId>,
    goal: Option<CellId>,
}

impl Grid {
    /// Create a grid of open, weight-1 cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Pos::new(row as i32, col as i32)));
            }
        }
        Ok(Self {
            cells,
            rows,
            cols,
            start: None,
            goal: None,
        })
    }

    /// Build a grid from an ASCII layout.
    ///
    /// One line per row: `.` open, `#` wall, `S` start, `G` goal, `1`-`9` an
    /// open cell with that weight. Surrounding whitespace and blank lines are
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Self::new(rows, cols)?;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_wall(pos)?,
                    'S' => {
                        if grid.start.is_some() {
                            return Err(GridError::DuplicateMarker { marker: 'S' });
                        }
                        grid.set_start(pos)?;
                    }
                    'G' => {
                        if grid.goal.is_some() {
                            return Err(GridError::DuplicateMarker { marker: 'G' });
                        }
                        grid.set_goal(pos)?;
                    }
                    '1'..='9' => grid.set_weight(pos, ch as u32 - '0' as u32)?,
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Dimensions and addressing
    // -----------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// The id of the cell at `pos`, or `None` if `pos` is outside the grid.
    #[inline]
    pub fn id(&self, pos: Pos) -> Option<CellId> {
        if !self.contains(pos) {
            return None;
        }
        Some(CellId(pos.row as usize * self.cols + pos.col as usize))
    }

    /// Position of the cell with the given id.
    #[inline]
    pub fn pos(&self, id: CellId) -> Pos {
        Pos::new((id.0 / self.cols) as i32, (id.0 % self.cols) as i32)
    }

    /// The cell at `(row, col)`.
    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell> {
        let id = self.id(Pos::new(row, col))?;
        self.cells.get(id.0)
    }

    /// Mutable access to the cell at `(row, col)`.
    ///
    /// Only the per-run fields can be written this way; walls, start and
    /// goal move through the editing methods.
    pub fn cell_mut(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        let id = self.id(Pos::new(row, col))?;
        self.cells.get_mut(id.0)
    }

    /// The cell with the given id, if it belongs to this grid.
    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// Mutable access to the cell with the given id.
    #[inline]
    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.0)
    }

    /// The start cell, if one is placed.
    #[inline]
    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    /// The goal cell, if one is placed.
    #[inline]
    pub fn goal(&self) -> Option<CellId> {
        self.goal
    }

    /// Row-major iterator over `(CellId, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    fn require(&self, pos: Pos) -> Result<CellId, GridError> {
        self.id(pos).ok_or(GridError::OutOfBounds { pos })
    }

    /// Drop the start/goal bookkeeping for `id` if it holds either marker.
    fn forget_markers(&mut self, id: CellId) {
        if self.start == Some(id) {
            self.start = None;
        }
        if self.goal == Some(id) {
            self.goal = None;
        }
        let cell = &mut self.cells[id.0];
        cell.is_start = false;
        cell.is_goal = false;
    }

    /// Turn the cell at `pos` into a wall.
    pub fn set_wall(&mut self, pos: Pos) -> Result<(), GridError> {
        let id = self.require(pos)?;
        self.forget_markers(id);
        let cell = &mut self.cells[id.0];
        cell.reset_run();
        cell.is_wall = true;
        Ok(())
    }

    /// Turn the cell at `pos` back into a plain open cell. Its weight is kept.
    pub fn erase(&mut self, pos: Pos) -> Result<(), GridError> {
        let id = self.require(pos)?;
        self.forget_markers(id);
        self.cells[id.0].reset_layout();
        Ok(())
    }

    /// Move the start marker to `pos`.
    pub fn set_start(&mut self, pos: Pos) -> Result<(), GridError> {
        let id = self.require(pos)?;
        if let Some(old) = self.start.take() {
            self.cells[old.0].is_start = false;
        }
        self.forget_markers(id);
        let cell = &mut self.cells[id.0];
        cell.is_wall = false;
        cell.is_start = true;
        self.start = Some(id);
        Ok(())
    }

    /// Move the goal marker to `pos`.
    pub fn set_goal(&mut self, pos: Pos) -> Result<(), GridError> {
        let id = self.require(pos)?;
        if let Some(old) = self.goal.take() {
            self.cells[old.0].is_goal = false;
        }
        self.forget_markers(id);
        let cell = &mut self.cells[id.0];
        cell.is_wall = false;
        cell.is_goal = true;
        self.goal = Some(id);
        Ok(())
    }

    /// Set the traversal weight at `pos`, flooring at 1.
    pub fn set_weight(&mut self, pos: Pos, weight: u32) -> Result<(), GridError> {
        let id = self.require(pos)?;
        self.cells[id.0].set_weight(weight);
        Ok(())
    }

    /// Add `delta` to the weight at `pos` (saturating, floored at 1) and
    /// return the new weight.
    pub fn adjust_weight(&mut self, pos: Pos, delta: i32) -> Result<u32, GridError> {
        let id = self.require(pos)?;
        let cell = &mut self.cells[id.0];
        cell.set_weight(cell.weight().saturating_add_signed(delta));
        Ok(cell.weight())
    }

    // -----------------------------------------------------------------------
    // Resets
    // -----------------------------------------------------------------------

    /// Full clear: every cell back to an open weight-1 cell, no start, no goal.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset_layout();
            cell.set_weight(1);
        }
        self.start = None;
        self.goal = None;
    }

    /// Soft reset: clear per-run state on every cell the last run touched.
    /// Walls, weights, start and goal are kept.
    ///
    /// Returns the number of cells that were cleared.
    pub fn reset(&mut self) -> usize {
        let mut n = 0;
        for cell in self.cells.iter_mut().filter(|c| c.is_touched()) {
            cell.reset_run();
            n += 1;
        }
        n
    }

    /// Clear per-run state on every cell.
    pub fn reset_run_state(&mut self) {
        for cell in &mut self.cells {
            cell.reset_run();
        }
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    /// Render the grid as text, one line per row.
    ///
    /// Uses the [`parse`](Grid::parse) alphabet plus `*` for cells on the
    /// played-back path and `o` for visited cells.
    ///
    /// Weights above 9 are drawn as `9`, so such a grid does not survive a
    /// `render`/`parse` round trip unchanged. Markers and run state take
    /// precedence over the weight digit.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                let ch = if cell.is_wall {
                    '#'
                } else if cell.is_start {
                    'S'
                } else if cell.is_goal {
                    'G'
                } else if cell.on_path {
                    '*'
                } else if cell.is_visited {
                    'o'
                } else if cell.weight() > 1 {
                    char::from_digit(cell.weight().min(9), 10).unwrap_or('9')
                } else {
                    '.'
                };
                out.push(ch);
            }
            let _ = writeln!(out);
        }
        out
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    /// Panics if `id` was not produced by a grid of the same size.
    #[inline]
    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

impl IndexMut<CellId> for Grid {
    #[inline]
    fn index_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }
}
