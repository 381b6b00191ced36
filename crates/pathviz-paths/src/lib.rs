//! Resumable, step-at-a-time searches over a [`pathviz_core::Grid`].
//!
//! Each search is a [`Stepper`]: [`Stepper::init`] validates the grid and
//! seeds the frontier, and every [`Stepper::step`] performs exactly one
//! frontier extraction so a front end can draw the grid between steps.
//!
//! - **BFS** ([`BreadthFirst`]) shortest by edge count
//! - **DFS** ([`DepthFirst`]) any path, no length guarantee
//! - **Dijkstra** ([`Dijkstra`]) minimum total weight
//! - **A\*** ([`AStar`]) minimum total weight, guided by [`manhattan`]
//!
//! [`Search`] picks one of them at runtime from an [`Algorithm`].
//!
//! All searches expand neighbours in the same order (up, left, down, right)
//! and break priority ties by insertion order, so a run on a given grid is
//! fully reproducible.
//!
//! # Example
//!
//! ```
//! use pathviz_core::Grid;
//! use pathviz_paths::{Algorithm, RunState, Search};
//!
//! let mut grid = Grid::parse("S..\n.#.\n..G").unwrap();
//! let cells = grid.len();
//! let mut search = Search::init(Algorithm::AStar, &mut grid, cells).unwrap();
//! while !search.should_stop() {
//!     search.step(&mut grid);
//! }
//! assert_eq!(search.state(), RunState::Success);
//! assert_eq!(search.path().unwrap().cost(&grid), 4);
//! ```

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod run;
mod search;
mod traits;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use error::SearchError;
pub use frontier::{Frontier, MinHeap, Queue, Stack};
pub use neighbors::Neighbors;
pub use path::{Path, Playback, build_path};
pub use run::{Run, RunState, RunStats};
pub use search::{Algorithm, Search};
pub use traits::Stepper;
