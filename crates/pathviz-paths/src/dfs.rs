use log::trace;
use pathviz_core::{CellId, Grid};

use crate::error::SearchError;
use crate::frontier::{Frontier, Stack};
use crate::neighbors::{Neighbors, open};
use crate::run::{Run, RunState, prepare};
use crate::traits::Stepper;

/// Depth-first search, one pop per step.
///
/// Unlike [`BreadthFirst`](crate::BreadthFirst), a cell is marked visited
/// when it is popped, so it may sit on the stack several times; later copies
/// are discarded when popped. The parent is overwritten on every push, and
/// since the most recent push is popped first the surviving parent is the
/// one the cell is expanded from. Finds a path if one exists, with no length
/// guarantee.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    stack: Stack<CellId>,
    goal: CellId,
    nbuf: Neighbors,
    run: Run,
}

impl Stepper for DepthFirst {
    fn init(grid: &mut Grid, capacity: usize) -> Result<Self, SearchError> {
        let (start, goal) = prepare("dfs", grid, capacity)?;
        let mut run = Run::new("dfs");
        let mut stack = Stack::with_capacity(capacity);

        grid[start].distance = 0;
        stack.push(start);
        run.pushed();

        Ok(Self {
            stack,
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

        let Some(current) = self.stack.pop() else {
            return self.run.fail();
        };
        // Stale entry, or walled off since it was pushed.
        if grid[current].is_visited || grid[current].is_wall() {
            return self.run.discard();
        }
        self.run.visit(grid, current);
        trace!("dfs: expand {}", grid.pos(current));

        for &next in self.nbuf.cardinal(grid, current, open) {
            grid[next].parent = Some(current);
            if next == self.goal {
                self.run.visit(grid, next);
                return self.run.succeed(grid, next);
            }
            self.stack.push(next);
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

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Pos;

    fn solve(grid: &mut Grid) -> DepthFirst {
        let cells = grid.len();
        let mut dfs = DepthFirst::init(grid, cells).unwrap();
        while !dfs.should_stop() {
            dfs.step(grid);
        }
        dfs
    }

    #[test]
    fn start_is_visited_on_first_pop() {
        let mut g = Grid::parse("S.\n.G").unwrap();
        let mut dfs = DepthFirst::init(&mut g, 4).unwrap();
        assert!(!g.cell(0, 0).unwrap().is_visited);
        dfs.step(&mut g);
        assert!(g.cell(0, 0).unwrap().is_visited);
    }

    #[test]
    fn dives_along_last_pushed_direction() {
        // Right is pushed last, so it is explored first.
        let mut g = Grid::parse("S...\n....\n...G").unwrap();
        let dfs = solve(&mut g);
        assert_eq!(dfs.state(), RunState::Success);
        let order: Vec<Pos> = dfs.stats().visit_order[..4]
            .iter()
            .map(|&id| g.pos(id))
            .collect();
        assert_eq!(
            order,
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]
        );
    }

    #[test]
    fn duplicate_entries_are_discarded() {
        let mut g = Grid::parse("S..\n...\n..G").unwrap();
        let dfs = solve(&mut g);
        let mut seen = dfs.stats().visit_order.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), dfs.stats().visited());
        // Some cell got pushed more than once.
        assert!(dfs.stats().pushes > dfs.stats().visited());
    }

    #[test]
    fn path_is_connected_and_avoids_walls() {
        let mut g = Grid::parse(
            "
            S.#..
            .##.#
            ...#.
            #.#..
            ....G
            ",
        )
        .unwrap();
        let dfs = solve(&mut g);
        assert_eq!(dfs.state(), RunState::Success);
        let path = dfs.path().unwrap().positions(&g);
        assert_eq!(path.first(), Some(&Pos::new(0, 0)));
        assert_eq!(path.last(), Some(&Pos::new(4, 4)));
        for w in path.windows(2) {
            assert_eq!(crate::manhattan(w[0], w[1]), 1);
        }
        for p in &path {
            assert!(!g.cell(p.row, p.col).unwrap().is_wall());
        }
    }

    #[test]
    fn cells_walled_after_pushing_are_skipped() {
        let mut g = Grid::parse("S..G\n....").unwrap();
        let mut dfs = DepthFirst::init(&mut g, 8).unwrap();
        dfs.step(&mut g);
        g.set_wall(Pos::new(0, 1)).unwrap();
        while !dfs.should_stop() {
            dfs.step(&mut g);
        }
        assert_eq!(dfs.state(), RunState::Success);
        assert!(dfs.stats().discarded >= 1);
        let path = dfs.path().unwrap().positions(&g);
        assert_eq!(
            path,
            vec![
                Pos::new(0, 0),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
                Pos::new(1, 3),
                Pos::new(0, 3)
            ]
        );
    }

    #[test]
    fn wall_between_start_and_goal_ends_in_failure() {
        let mut g = Grid::parse("S..G").unwrap();
        let mut dfs = DepthFirst::init(&mut g, 4).unwrap();
        dfs.step(&mut g);
        g.set_wall(Pos::new(0, 1)).unwrap();
        while !dfs.should_stop() {
            dfs.step(&mut g);
        }
        assert_eq!(dfs.state(), RunState::Failure);
        assert!(dfs.path().is_none());
        assert_eq!(dfs.stats().discarded, 1);
    }

    #[test]
    fn walled_off_goal_fails() {
        let mut g = Grid::parse("S.#\n..#\n##G").unwrap();
        let dfs = solve(&mut g);
        assert_eq!(dfs.state(), RunState::Failure);
        assert!(dfs.path().is_none());
        assert_eq!(dfs.stats().visited(), 4);
    }
}
