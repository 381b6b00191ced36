//! Per-run bookkeeping shared by every stepper.

use log::{debug, info};
use pathviz_core::{CellId, Grid};

use crate::error::SearchError;
use crate::path::{Path, Playback, build_path};

/// Where a run stands. A run starts `Running` as soon as it is initialised
/// and ends in exactly one terminal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    Running,
    /// The goal was reached and a path was built.
    Success,
    /// The frontier ran dry without reaching the goal.
    Failure,
}

impl RunState {
    /// True for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Counters collected while a run steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of `step` calls that did work, including those that only
    /// discarded a stale frontier entry.
    pub steps: usize,
    /// Number of frontier insertions, the seed included.
    pub pushes: usize,
    /// Steps that removed an entry without expanding it: a duplicate of a
    /// cell already visited, or a cell walled off after it was pushed.
    pub discarded: usize,
    /// Cells in the order they were marked visited.
    pub visit_order: Vec<CellId>,
}

impl RunStats {
    /// Number of cells marked visited.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visit_order.len()
    }
}

/// State of one run: its status, counters and, on success, the path.
#[derive(Debug, Clone)]
pub struct Run {
    label: &'static str,
    state: RunState,
    stats: RunStats,
    path: Option<Path>,
    playback: Option<Playback>,
}

impl Run {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            state: RunState::Running,
            stats: RunStats::default(),
            path: None,
            playback: None,
        }
    }

    /// Where the run stands.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Counters collected so far.
    #[inline]
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// The path from start to goal, once the run succeeded.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Hand the playback sequence to the caller. Returns it once per
    /// successful run; `None` afterwards or if the run did not succeed.
    pub fn take_playback(&mut self) -> Option<Playback> {
        self.playback.take()
    }

    /// Count one quantum of work.
    #[inline]
    pub(crate) fn tick(&mut self) {
        self.stats.steps += 1;
    }

    #[inline]
    pub(crate) fn pushed(&mut self) {
        self.stats.pushes += 1;
    }

    /// Record a popped entry that was dropped instead of expanded.
    #[inline]
    pub(crate) fn discard(&mut self) -> RunState {
        self.stats.discarded += 1;
        RunState::Running
    }

    /// Mark `id` visited and record it in the visit order.
    pub(crate) fn visit(&mut self, grid: &mut Grid, id: CellId) {
        grid[id].is_visited = true;
        self.stats.visit_order.push(id);
    }

    /// End the run at `goal`, building the path from its parent chain.
    pub(crate) fn succeed(&mut self, grid: &Grid, goal: CellId) -> RunState {
        let playback = build_path(grid, goal);
        let path = playback.to_path();
        info!(
            "{}: found path, {} cells, cost {}, {} steps",
            self.label,
            path.len(),
            path.cost(grid),
            self.stats.steps
        );
        self.path = Some(path);
        self.playback = Some(playback);
        self.state = RunState::Success;
        self.state
    }

    /// End the run without a path.
    pub(crate) fn fail(&mut self) -> RunState {
        info!("{}: no path, {} steps", self.label, self.stats.steps);
        self.state = RunState::Failure;
        self.state
    }
}

/// Validate a run's preconditions and clear the grid's per-run state.
///
/// Returns the `(start, goal)` pair.
pub(crate) fn prepare(
    label: &'static str,
    grid: &mut Grid,
    capacity: usize,
) -> Result<(CellId, CellId), SearchError> {
    if capacity < grid.len() {
        return Err(SearchError::CapacityTooSmall {
            capacity,
            cells: grid.len(),
        });
    }
    let start = grid.start().ok_or(SearchError::MissingStart)?;
    let goal = grid.goal().ok_or(SearchError::MissingGoal)?;
    grid.reset_run_state();
    debug!(
        "{label}: init, {} cells, capacity {capacity}, start {} goal {}",
        grid.len(),
        grid.pos(start),
        grid.pos(goal)
    );
    Ok((start, goal))
}
