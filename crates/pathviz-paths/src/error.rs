use thiserror::Error;

/// Errors raised when a search cannot be started.
///
/// Running out of frontier is not an error: it ends the run in
/// [`RunState::Failure`](crate::RunState::Failure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("frontier capacity {capacity} is smaller than the grid's {cells} cells")]
    CapacityTooSmall { capacity: usize, cells: usize },
    #[error("no start cell is placed")]
    MissingStart,
    #[error("no goal cell is placed")]
    MissingGoal,
    #[error("unknown algorithm \u{201c}{0}\u{201d} (expected bfs, dfs, dijkstra or astar)")]
    UnknownAlgorithm(String),
}
