use log::trace;
use pathviz_core::{CellId, Grid};

use crate::error::SearchError;
use crate::frontier::{Frontier, Queue};
use crate::neighbors::{Neighbors, open};
use crate::run::{Run, RunState, prepare};
use crate::traits::Stepper;

/// Breadth-first search, one dequeue per step.
///
/// Cells are marked visited and given their parent when first discovered,
/// so each cell enters the queue at most once. The goal is recognised on
/// discovery. Shortest by edge count; weights are ignored.
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    queue: Queue<CellId>,
    goal: CellId,
    nbuf: Neighbors,
    run: Run,
}

impl Stepper for BreadthFirst {
    fn init(grid: &mut Grid, capacity: usize) -> Result<Self, SearchError> {
        let (start, goal) = prepare("bfs", grid, capacity)?;
        let mut run = Run::new("bfs");
        let mut queue = Queue::with_capacity(capacity);

        grid[start].distance = 0;
        queue.push(start);
        run.pushed();
        run.visit(grid, start);

        Ok(Self {
            queue,
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

        let Some(current) = self.queue.pop() else {
            return self.run.fail();
        };
        // Walled off since it was queued.
        if grid[current].is_wall() {
            return self.run.discard();
        }
        trace!("bfs: expand {}", grid.pos(current));

        for &next in self.nbuf.cardinal(grid, current, open) {
            self.run.visit(grid, next);
            grid[next].parent = Some(current);
            if next == self.goal {
                return self.run.succeed(grid, next);
            }
            self.queue.push(next);
            self.run.pushed();
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
