use pathviz_core::Grid;

use crate::error::SearchError;
use crate::path::{Path, Playback};
use crate::run::{Run, RunState, RunStats};

/// A search that advances one quantum of work per call to [`step`].
///
/// The stepper is the run's context: [`init`] creates it with a seeded
/// frontier, and the grid is passed back in on every tick so the caller
/// keeps ownership of it between ticks.
///
/// [`step`]: Stepper::step
/// [`init`]: Stepper::init
pub trait Stepper {
    /// Clear the grid's run state, validate `capacity` (at least one slot
    /// per cell) and seed the frontier with the start cell.
    fn init(grid: &mut Grid, capacity: usize) -> Result<Self, SearchError>
    where
        Self: Sized;

    /// Perform one unit of work. No-op once the run is terminal.
    fn step(&mut self, grid: &mut Grid) -> RunState;

    /// The run's bookkeeping.
    fn run(&self) -> &Run;

    /// Mutable access to the run's bookkeeping.
    fn run_mut(&mut self) -> &mut Run;

    /// Where the run stands.
    #[inline]
    fn state(&self) -> RunState {
        self.run().state()
    }

    /// True once the run reached success or failure.
    #[inline]
    fn should_stop(&self) -> bool {
        self.state().is_terminal()
    }

    /// Counters collected so far.
    #[inline]
    fn stats(&self) -> &RunStats {
        self.run().stats()
    }

    /// The start-to-goal path, once the run succeeded.
    #[inline]
    fn path(&self) -> Option<&Path> {
        self.run().path()
    }

    /// See [`Run::take_playback`].
    fn take_playback(&mut self) -> Option<Playback> {
        self.run_mut().take_playback()
    }
}
