//! Algorithm selection and the [`Search`] run context.

use std::fmt;
use std::str::FromStr;

use pathviz_core::Grid;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::error::SearchError;
use crate::path::{Path, Playback};
use crate::run::{RunState, RunStats};
use crate::traits::Stepper;

/// The available searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::Dijkstra,
        Self::AStar,
    ];

    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// Whether the search minimises total weight.
    pub fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "dijkstra" | "ucs" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A run of whichever algorithm the caller selected.
#[derive(Debug, Clone)]
pub enum Search {
    BreadthFirst(BreadthFirst),
    DepthFirst(DepthFirst),
    Dijkstra(Dijkstra),
    AStar(AStar),
}

impl Search {
    /// Start a run of `algorithm` on `grid`. See [`Stepper::init`].
    pub fn init(algorithm: Algorithm, grid: &mut Grid, capacity: usize) -> Result<Self, SearchError> {
        Ok(match algorithm {
            Algorithm::BreadthFirst => Self::BreadthFirst(BreadthFirst::init(grid, capacity)?),
            Algorithm::DepthFirst => Self::DepthFirst(DepthFirst::init(grid, capacity)?),
            Algorithm::Dijkstra => Self::Dijkstra(Dijkstra::init(grid, capacity)?),
            Algorithm::AStar => Self::AStar(AStar::init(grid, capacity)?),
        })
    }

    /// Which search this run uses.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::BreadthFirst(_) => Algorithm::BreadthFirst,
            Self::DepthFirst(_) => Algorithm::DepthFirst,
            Self::Dijkstra(_) => Algorithm::Dijkstra,
            Self::AStar(_) => Algorithm::AStar,
        }
    }

    /// Advance one quantum. See [`Stepper::step`].
    pub fn step(&mut self, grid: &mut Grid) -> RunState {
        self.stepper_mut().step(grid)
    }

    /// Step until the run is terminal.
    pub fn run_to_end(&mut self, grid: &mut Grid) -> RunState {
        while !self.should_stop() {
            self.step(grid);
        }
        self.state()
    }

    /// Where the run stands.
    pub fn state(&self) -> RunState {
        self.stepper().state()
    }

    /// True once the run reached success or failure.
    pub fn should_stop(&self) -> bool {
        self.stepper().should_stop()
    }

    /// Counters collected so far.
    pub fn stats(&self) -> &RunStats {
        self.stepper().stats()
    }

    /// The start-to-goal path, once the run succeeded.
    pub fn path(&self) -> Option<&Path> {
        self.stepper().path()
    }

    /// See [`Run::take_playback`](crate::Run::take_playback).
    pub fn take_playback(&mut self) -> Option<Playback> {
        self.stepper_mut().take_playback()
    }

    /// The selected stepper as a trait object.
    pub fn stepper(&self) -> &dyn Stepper {
        match self {
            Self::BreadthFirst(s) => s,
            Self::DepthFirst(s) => s,
            Self::Dijkstra(s) => s,
            Self::AStar(s) => s,
        }
    }

    /// The selected stepper as a mutable trait object.
    pub fn stepper_mut(&mut self) -> &mut dyn Stepper {
        match self {
            Self::BreadthFirst(s) => s,
            Self::DepthFirst(s) => s,
            Self::Dijkstra(s) => s,
            Self::AStar(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{CellId, Pos};

    fn solve(algorithm: Algorithm, grid: &mut Grid) -> Search {
        let cells = grid.len();
        let mut search = Search::init(algorithm, grid, cells).unwrap();
        search.run_to_end(grid);
        search
    }

    fn cost(algorithm: Algorithm, grid: &mut Grid) -> Option<u64> {
        let search = solve(algorithm, grid);
        search.path().map(|p| p.cost(grid))
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::DepthFirst));
        assert_eq!(" dijkstra ".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("a*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(SearchError::UnknownAlgorithm("greedy".into()))
        );
        assert_eq!(Algorithm::AStar.to_string(), "A*");
    }

    #[test]
    fn init_reports_configuration_errors() {
        let mut g = Grid::parse("S.\n.G").unwrap();
        for algorithm in Algorithm::ALL {
            let err = Search::init(algorithm, &mut g, 3).unwrap_err();
            assert_eq!(err, SearchError::CapacityTooSmall { capacity: 3, cells: 4 });
        }
        let mut g = Grid::parse("S.\n..").unwrap();
        assert_eq!(
            Search::init(Algorithm::AStar, &mut g, 4).unwrap_err(),
            SearchError::MissingGoal
        );
    }

    #[test]
    fn open_three_by_three_costs_four() {
        for algorithm in [Algorithm::BreadthFirst, Algorithm::Dijkstra, Algorithm::AStar] {
            let mut g = Grid::parse("S..\n...\n..G").unwrap();
            assert_eq!(cost(algorithm, &mut g), Some(4), "{algorithm}");
        }
    }

    #[test]
    fn gap_in_wall_row() {
        for algorithm in Algorithm::ALL {
            let mut g = Grid::parse("S..\n.##\nG..").unwrap();
            assert_eq!(cost(algorithm, &mut g), Some(2), "{algorithm}");

            g.set_wall(Pos::new(1, 0)).unwrap();
            let search = solve(algorithm, &mut g);
            assert_eq!(search.state(), RunState::Failure, "{algorithm}");
            assert!(search.path().is_none());
        }
    }

    #[test]
    fn heavy_cell_reroutes_weighted_searches_only() {
        let heavy = Pos::new(0, 1);
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::DepthFirst {
                continue;
            }
            let mut g = Grid::parse("S.G\n...").unwrap();
            let before = solve(algorithm, &mut g).path().cloned().unwrap();
            assert_eq!(before.edges(), 2);

            g.set_weight(heavy, 10).unwrap();
            g.reset();
            let after = solve(algorithm, &mut g).path().cloned().unwrap();
            if algorithm.is_weighted() {
                assert!(!after.positions(&g).contains(&heavy), "{algorithm}");
                assert_eq!(after.cost(&g), 4);
            } else {
                assert_eq!(after.edges(), 2);
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn walled_in_start_fails_for_every_algorithm() {
        let layout = "
            S.#..
            ..#..
            ###..
            ....G
        ";
        for algorithm in Algorithm::ALL {
            let mut g = Grid::parse(layout).unwrap();
            let search = solve(algorithm, &mut g);
            assert_eq!(search.state(), RunState::Failure, "{algorithm}");
            assert_eq!(search.stats().visited(), 4, "{algorithm}");
            assert!(g.iter().all(|(_, c)| !c.on_path));
        }
    }

    #[test]
    fn reruns_after_reset_match() {
        let layout = "
            S.3.#
            .#..1
            .2#..
            ..5.G
        ";
        for algorithm in Algorithm::ALL {
            let mut g = Grid::parse(layout).unwrap();
            let first = solve(algorithm, &mut g);
            let snapshot = g.clone();
            g.reset();
            let second = solve(algorithm, &mut g);

            assert_eq!(first.stats(), second.stats(), "{algorithm}");
            assert_eq!(first.path(), second.path(), "{algorithm}");
            assert_eq!(snapshot, g, "{algorithm}");
        }
    }

    #[test]
    fn astar_takes_fewer_steps_than_dijkstra_on_open_ground() {
        let mut g = Grid::new(8, 8).unwrap();
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_goal(Pos::new(7, 7)).unwrap();

        let dijkstra = solve(Algorithm::Dijkstra, &mut g);
        g.reset();
        let astar = solve(Algorithm::AStar, &mut g);

        assert_eq!(
            dijkstra.path().unwrap().cost(&g),
            astar.path().unwrap().cost(&g)
        );
        assert!(astar.stats().steps < dijkstra.stats().steps);
        assert!(astar.stats().visited() < dijkstra.stats().visited());
    }

    #[test]
    fn astar_can_pay_for_stale_entries_dijkstra_never_sees() {
        // A* reaches (0,2) through (1,2) first, then finds the cheaper route
        // through (0,1) and leaves a stale entry behind.
        let layout = "
            S2.#5
            2..6G
        ";
        let mut g = Grid::parse(layout).unwrap();
        let dijkstra = solve(Algorithm::Dijkstra, &mut g);
        let d_cost = dijkstra.path().unwrap().cost(&g);
        let astar = solve(Algorithm::AStar, &mut g);
        let a_cost = astar.path().unwrap().cost(&g);

        assert_eq!((d_cost, a_cost), (11, 11));
        assert_eq!(dijkstra.stats().visited(), 8);
        assert_eq!(astar.stats().visited(), 8);
        assert_eq!(dijkstra.stats().discarded, 0);
        assert_eq!(astar.stats().discarded, 1);
        assert_eq!(dijkstra.stats().steps, 8);
        assert_eq!(astar.stats().steps, 9);
    }

    #[test]
    fn walls_added_between_ticks_are_respected() {
        let mut g = Grid::parse(".....\nS...G\n.....").unwrap();
        let mut search = Search::init(Algorithm::Dijkstra, &mut g, 15).unwrap();
        search.step(&mut g);
        g.set_wall(Pos::new(1, 2)).unwrap();
        assert_eq!(search.run_to_end(&mut g), RunState::Success);
        let path = search.path().unwrap();
        assert!(!path.positions(&g).contains(&Pos::new(1, 2)));
        assert_eq!(path.cost(&g), 6);
    }

    #[test]
    fn playback_is_handed_out_once() {
        let mut g = Grid::parse("S.G").unwrap();
        let mut search = solve(Algorithm::BreadthFirst, &mut g);
        let mut playback = search.take_playback().unwrap();
        assert!(search.take_playback().is_none());

        let mut played = Vec::new();
        while let Some(id) = playback.advance(&mut g) {
            played.push(id);
        }
        assert_eq!(played, vec![CellId(0), CellId(1), CellId(2)]);
        assert_eq!(g.render(), "S*G\n");
        // The path stays available after playback.
        assert_eq!(search.path().unwrap().len(), 3);
    }

    #[test]
    fn failed_run_has_no_playback() {
        let mut g = Grid::parse("S#G").unwrap();
        let mut search = solve(Algorithm::DepthFirst, &mut g);
        assert_eq!(search.algorithm(), Algorithm::DepthFirst);
        assert!(search.take_playback().is_none());
    }

    mod properties {
        use std::collections::VecDeque;

        use proptest::prelude::*;

        use super::*;

        /// Grid with start top-left, goal bottom-right, and the given walls
        /// and weights laid out row-major.
        fn layout(rows: usize, cols: usize, walls: &[bool], weights: &[u32]) -> Grid {
            let mut g = Grid::new(rows, cols).unwrap();
            for (i, (&wall, &weight)) in walls.iter().zip(weights).enumerate() {
                let p = Pos::new((i / cols) as i32, (i % cols) as i32);
                g.set_weight(p, weight).unwrap();
                if wall {
                    g.set_wall(p).unwrap();
                }
            }
            g.set_start(Pos::new(0, 0)).unwrap();
            g.set_goal(Pos::new(rows as i32 - 1, cols as i32 - 1)).unwrap();
            g
        }

        fn grids() -> impl Strategy<Value = Grid> {
            (1usize..7, 2usize..7).prop_flat_map(|(rows, cols)| {
                let n = rows * cols;
                (
                    proptest::collection::vec(prop::bool::weighted(0.3), n),
                    proptest::collection::vec(1u32..=9, n),
                )
                    .prop_map(move |(walls, weights)| layout(rows, cols, &walls, &weights))
            })
        }

        /// Plain edge-count distance from start to goal, if reachable.
        fn hops(grid: &Grid) -> Option<usize> {
            let start = grid.start()?;
            let goal = grid.goal()?;
            let mut dist = vec![usize::MAX; grid.len()];
            let mut queue = VecDeque::from([start]);
            dist[start.index()] = 0;
            while let Some(id) = queue.pop_front() {
                for d in Pos::CARDINALS {
                    let Some(next) = grid.id(grid.pos(id) + d) else {
                        continue;
                    };
                    if !grid[next].is_wall() && dist[next.index()] == usize::MAX {
                        dist[next.index()] = dist[id.index()] + 1;
                        queue.push_back(next);
                    }
                }
            }
            (dist[goal.index()] != usize::MAX).then_some(dist[goal.index()])
        }

        fn assert_valid_path(grid: &Grid, path: &Path) {
            let cells = path.cells();
            assert_eq!(cells.first().copied(), grid.start());
            assert_eq!(cells.last().copied(), grid.goal());
            for w in cells.windows(2) {
                assert_eq!(crate::manhattan(grid.pos(w[0]), grid.pos(w[1])), 1);
            }
            assert!(cells.iter().all(|&id| !grid[id].is_wall()));
        }

        proptest! {
            #[test]
            fn searches_agree(mut grid in grids()) {
                let expected = hops(&grid);
                let mut runs = Vec::new();
                for algorithm in Algorithm::ALL {
                    grid.reset();
                    let search = solve(algorithm, &mut grid);
                    prop_assert_eq!(search.state() == RunState::Success, expected.is_some());
                    if let Some(path) = search.path() {
                        assert_valid_path(&grid, path);
                    }
                    runs.push(search);
                }

                let [bfs, _dfs, dijkstra, astar] = &runs[..] else {
                    unreachable!()
                };
                if let Some(edges) = expected {
                    prop_assert_eq!(bfs.path().unwrap().edges(), edges);
                    let best = dijkstra.path().unwrap().cost(&grid);
                    prop_assert_eq!(astar.path().unwrap().cost(&grid), best);
                    prop_assert!(best <= bfs.path().unwrap().cost(&grid));
                }
                prop_assert!(astar.stats().visited() <= dijkstra.stats().visited());
                // Every heap step either expands a cell or drops an entry.
                for search in [dijkstra, astar] {
                    let stats = search.stats();
                    let failed = usize::from(search.state() == RunState::Failure);
                    prop_assert_eq!(stats.steps, stats.visited() + stats.discarded + failed);
                }
            }

            #[test]
            fn runs_are_reproducible(grid in grids(), pick in 0usize..4) {
                let algorithm = Algorithm::ALL[pick];
                let mut a = grid.clone();
                let mut b = grid;
                let first = solve(algorithm, &mut a);
                let second = solve(algorithm, &mut b);
                prop_assert_eq!(first.stats(), second.stats());
                prop_assert_eq!(first.path(), second.path());
                prop_assert_eq!(a, b);
            }

            #[test]
            fn each_cell_is_visited_once(mut grid in grids(), pick in 0usize..4) {
                let search = solve(Algorithm::ALL[pick], &mut grid);
                let mut seen = search.stats().visit_order.clone();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), search.stats().visited());
                let flagged = grid.iter().filter(|(_, c)| c.is_visited).count();
                prop_assert_eq!(flagged, search.stats().visited());
            }
        }
    }
}
