use log::trace;
use pathviz_core::{CellId, Grid};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::{Frontier, MinHeap};
use crate::neighbors::{Neighbors, open};
use crate::run::{Run, RunState, prepare};
use crate::traits::Stepper;

/// Priority of an A* heap entry: `(distance + heuristic, heuristic)`.
///
/// Among equal totals the entry closer to the goal comes out first.
type Priority = (u32, u32);

/// A* search guided by the Manhattan distance to the goal.
///
/// Same as [`Dijkstra`](crate::Dijkstra) except that every cell's
/// `heuristic` is filled in at init and the heap is keyed by
/// `distance + heuristic`.
#[derive(Debug, Clone)]
pub struct AStar {
    heap: MinHeap<Priority, CellId>,
    goal: CellId,
    nbuf: Neighbors,
    run: Run,
}

impl Stepper for AStar {
    fn init(grid: &mut Grid, capacity: usize) -> Result<Self, SearchError> {
        let (start, goal) = prepare("astar", grid, capacity)?;
        let mut run = Run::new("astar");
        let mut heap = MinHeap::with_capacity(capacity);

        let target = grid.pos(goal);
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                if let Some(cell) = grid.cell_mut(row, col) {
                    cell.heuristic = manhattan(cell.pos(), target);
                }
            }
        }

        let h = grid[start].heuristic;
        grid[start].distance = 0;
        heap.push(((h, h), start));
        run.pushed();

        Ok(Self {
            heap,
            goal,
            nbuf: Neighbors::new(),
            run,
        })
    }

    fn step(&mut self, grid: &mut Grid) -> RunState {
        if self.run.state().is_terminal() {
            return self.run.state();
        }
        self.run.tick();

        let Some((_, current)) = self.heap.pop() else {
            return self.run.fail();
        };
        // Stale entry, or walled off since it was pushed.
        if grid[current].is_visited || grid[current].is_wall() {
            return self.run.discard();
        }
        self.run.visit(grid, current);
        if current == self.goal {
            return self.run.succeed(grid, current);
        }

        let base = grid[current].distance;
        trace!("astar: expand {} at {base}", grid.pos(current));

        for &next in self.nbuf.cardinal(grid, current, open) {
            let cell = &mut grid[next];
            let tentative = base.saturating_add(cell.weight());
            if tentative < cell.distance {
                cell.distance = tentative;
                cell.parent = Some(current);
                let h = cell.heuristic;
                self.heap.push(((tentative.saturating_add(h), h), next));
                self.run.pushed();
            }
        }
        RunState::Running
    }

    #[inline]
    fn run(&self) -> &Run {
        &self.run
    }

    #[inline]
    fn run_mut(&mut self) -> &mut Run {
        &mut self.run
    }
}
