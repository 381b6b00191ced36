//! Path reconstruction and one-cell-per-tick playback.

use std::iter::FusedIterator;

use log::warn;
use pathviz_core::{CellId, Grid, Pos};

/// A start-to-goal path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<CellId>,
}

impl Path {
    /// Cells from start to goal, both included.
    #[inline]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves along the path.
    #[inline]
    pub fn edges(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Total traversal cost: the weight of every cell entered after the start.
    pub fn cost(&self, grid: &Grid) -> u64 {
        self.cells
            .iter()
            .skip(1)
            .map(|&id| u64::from(grid[id].weight()))
            .sum()
    }

    /// Positions from start to goal.
    pub fn positions(&self, grid: &Grid) -> Vec<Pos> {
        self.cells.iter().map(|&id| grid.pos(id)).collect()
    }
}

/// One-shot playback of a path, start first, one cell per call.
///
/// As an [`Iterator`] it just yields cells; [`advance`](Playback::advance)
/// also flags each yielded cell as on-path for display. Once exhausted it
/// stays exhausted; a new run builds a new playback.
#[derive(Debug, Clone)]
pub struct Playback {
    /// Goal first, start last; consumed from the tail.
    trace: Vec<CellId>,
}

impl Playback {
    /// Pop the next cell and mark it on-path.
    pub fn advance(&mut self, grid: &mut Grid) -> Option<CellId> {
        let id = self.next()?;
        if let Some(cell) = grid.get_mut(id) {
            cell.on_path = true;
        }
        Some(id)
    }

    /// Cells not yet played.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.trace.len()
    }

    /// Whether every cell has been played.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.trace.is_empty()
    }

    /// The path still ahead, start to goal.
    pub fn to_path(&self) -> Path {
        Path {
            cells: self.trace.iter().rev().copied().collect(),
        }
    }
}

impl Iterator for Playback {
    type Item = CellId;

    #[inline]
    fn next(&mut self) -> Option<CellId> {
        self.trace.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.trace.len(), Some(self.trace.len()))
    }
}

impl ExactSizeIterator for Playback {}

impl FusedIterator for Playback {}

/// Walk `parent` links from `terminal` back to the root of the search tree.
///
/// A parent is always a cell discovered earlier in the same run, so the
/// chain ends at the start. The walk is still capped at `grid.len()` links
/// so that parents corrupted by outside edits cannot loop forever.
pub fn build_path(grid: &Grid, terminal: CellId) -> Playback {
    let mut trace = Vec::new();
    let mut cur = Some(terminal);
    while let Some(id) = cur {
        if trace.len() == grid.len() {
            warn!("parent chain from {} exceeds grid size, truncated", grid.pos(terminal));
            break;
        }
        trace.push(id);
        cur = grid.get(id).and_then(|c| c.parent);
    }
    Playback { trace }
}
