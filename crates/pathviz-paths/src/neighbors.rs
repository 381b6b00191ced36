use pathviz_core::{Cell, CellId, Grid, Pos};

/// Cached neighbour lookup for the steppers.
///
/// Yields the in-grid orthogonal neighbours of a cell in the fixed order
/// up, left, down, right, filtered by a predicate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<CellId>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// An empty buffer with room for four neighbours.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Neighbours of `id` inside `grid` for which `keep` returns `true`.
    pub fn cardinal(&mut self, grid: &Grid, id: CellId, keep: impl Fn(&Cell) -> bool) -> &[CellId] {
        self.buf.clear();
        let p = grid.pos(id);
        for d in Pos::CARDINALS {
            let Some(n) = grid.id(p + d) else {
                continue;
            };
            if keep(&grid[n]) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// The neighbour filter every stepper uses: not a wall, not yet visited.
#[inline]
pub(crate) fn open(cell: &Cell) -> bool {
    !cell.is_wall() && !cell.is_visited
}
