use log::trace;
use pathviz_core::{CellId, Grid};

use crate::error::SearchError;
use crate::frontier::{Frontier, MinHeap};
use crate::neighbors::{Neighbors, open};
use crate::run::{Run, RunState, prepare};
use crate::traits::Stepper;

/// Uniform-cost search keyed by distance, one extraction per step.
///
/// Cells are marked visited when extracted. Relaxing a neighbour pushes a
/// fresh entry instead of decreasing the old one; superseded entries stay in
/// the heap and are dropped when popped, which costs that step.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    heap: MinHeap<u32, CellId>,
    goal: CellId,
    nbuf: Neighbors,
    run: Run,
}

impl Stepper for Dijkstra {
    fn init(grid: &mut Grid, capacity: usize) -> Result<Self, SearchError> {
        let (start, goal) = prepare("dijkstra", grid, capacity)?;
        let mut run = Run::new("dijkstra");
        let mut heap = MinHeap::with_capacity(capacity);

        grid[start].distance = 0;
        heap.push((0, start));
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
        trace!("dijkstra: expand {} at {base}", grid.pos(current));

        for &next in self.nbuf.cardinal(grid, current, open) {
            let cell = &mut grid[next];
            let tentative = base.saturating_add(cell.weight());
            if tentative < cell.distance {
                cell.distance = tentative;
                cell.parent = Some(current);
                self.heap.push((tentative, next));
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
