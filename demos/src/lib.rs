//! Headless demo driver shared by the `pathviz` binary and its tests.
//!
//! Builds a seeded random grid, then runs each selected search on it one
//! step per tick, plays the path back one cell per tick and prints the
//! rendered grid with a one-line summary.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Parser};
use log::{debug, info};
use pathviz_core::{Grid, GridError, Pos};
use pathviz_paths::{Algorithm, RunState, Search, SearchError};
use rand::{RngExt, SeedableRng};
use thiserror::Error;

/// ANSI "clear screen, cursor home".
const CLEAR: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("{key} must be {expected}, got {value}")]
    BadValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("writing output: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings for one demo session.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell becomes a wall, in `0.0..=1.0`.
    pub wall_density: f64,
    /// Open cells get a random weight in `1..=max_weight`.
    pub max_weight: u32,
    pub seed: u64,
    /// Searches to run, in order, on the same grid.
    pub algorithms: Vec<Algorithm>,
    /// Delay between animation frames.
    pub tick: Duration,
    /// Redraw the grid every tick. When off, only the final grid of each
    /// run is printed and no time is spent sleeping.
    pub animate: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 32,
            wall_density: 0.25,
            max_weight: 5,
            seed: 42,
            algorithms: Algorithm::ALL.to_vec(),
            tick: Duration::from_millis(30),
            animate: false,
        }
    }
}

impl DemoConfig {
    /// Check that the settings can produce a grid with distinct start and goal.
    pub fn validate(&self) -> Result<(), DemoError> {
        if self.rows.saturating_mul(self.cols) < 2 {
            return Err(DemoError::BadValue {
                key: "rows x cols",
                expected: "at least 2",
                value: format!("{}x{}", self.rows, self.cols),
            });
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(DemoError::BadValue {
                key: "walls",
                expected: "between 0 and 1",
                value: self.wall_density.to_string(),
            });
        }
        if self.max_weight == 0 {
            return Err(DemoError::BadValue {
                key: "weight",
                expected: "at least 1",
                value: "0".into(),
            });
        }
        Ok(())
    }
}

/// Command line of the `pathviz` binary. Every option takes `--key=value`
/// (or `--key value`) and defaults to [`DemoConfig::default`].
#[derive(Debug, Parser)]
#[command(name = "pathviz")]
#[command(about = "Animate BFS, DFS, Dijkstra and A* on a random weighted grid")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Grid height in cells")]
    pub rows: Option<usize>,
    #[arg(long, help = "Grid width in cells")]
    pub cols: Option<usize>,
    #[arg(long, value_name = "P", help = "Wall probability per cell (0..=1)")]
    pub walls: Option<f64>,
    #[arg(long, value_name = "MAX", help = "Largest random cell weight")]
    pub weight: Option<u32>,
    #[arg(long, help = "Seed for the grid generator")]
    pub seed: Option<u64>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Searches to run, comma-separated (bfs, dfs, dijkstra, astar)"
    )]
    pub algo: Vec<Algorithm>,
    #[arg(long, value_name = "MS", help = "Milliseconds between frames")]
    pub tick_ms: Option<u64>,
    #[arg(
        long,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set,
        help = "Redraw the grid on every tick"
    )]
    pub animate: bool,
}

impl Cli {
    /// Overlay the given options on the defaults and validate the result.
    pub fn into_config(self) -> Result<DemoConfig, DemoError> {
        let defaults = DemoConfig::default();
        let config = DemoConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            cols: self.cols.unwrap_or(defaults.cols),
            wall_density: self.walls.unwrap_or(defaults.wall_density),
            max_weight: self.weight.unwrap_or(defaults.max_weight),
            seed: self.seed.unwrap_or(defaults.seed),
            algorithms: if self.algo.is_empty() {
                defaults.algorithms
            } else {
                self.algo
            },
            tick: self.tick_ms.map_or(defaults.tick, Duration::from_millis),
            animate: self.animate,
        };
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Grid generation
// ---------------------------------------------------------------------------

/// Build the demo grid: random walls and weights from `config.seed`, start
/// in the top-left corner and goal in the bottom-right one, both open.
pub fn random_grid(config: &DemoConfig) -> Result<Grid, DemoError> {
    config.validate()?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(config.seed);
    let mut grid = Grid::new(config.rows, config.cols)?;

    for row in 0..config.rows as i32 {
        for col in 0..config.cols as i32 {
            let p = Pos::new(row, col);
            if rng.random_bool(config.wall_density) {
                grid.set_wall(p)?;
            } else {
                grid.set_weight(p, rng.random_range(1..=config.max_weight))?;
            }
        }
    }

    grid.set_start(Pos::new(0, 0))?;
    grid.set_goal(Pos::new(config.rows as i32 - 1, config.cols as i32 - 1))?;
    let walls = grid.iter().filter(|(_, c)| c.is_wall()).count();
    debug!(
        "grid {}x{} seed {}: {walls} walls",
        config.rows, config.cols, config.seed
    );
    Ok(grid)
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Outcome of one search, printed after its final frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub algorithm: Algorithm,
    pub state: RunState,
    pub steps: usize,
    pub visited: usize,
    /// Path cost on success.
    pub cost: Option<u64>,
}

impl Report {
    fn new(algorithm: Algorithm, search: &Search, grid: &Grid) -> Self {
        let stats = search.stats();
        Self {
            algorithm,
            state: search.state(),
            steps: stats.steps,
            visited: stats.visited(),
            cost: search.path().map(|p| p.cost(grid)),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<8} {:?}: {} steps, {} visited",
            self.algorithm.label(),
            self.state,
            self.steps,
            self.visited
        )?;
        match self.cost {
            Some(cost) => write!(f, ", path cost {cost}"),
            None => write!(f, ", no path"),
        }
    }
}

fn frame(out: &mut impl Write, grid: &Grid, title: &str, config: &DemoConfig) -> io::Result<()> {
    if !config.animate {
        return Ok(());
    }
    write!(out, "{CLEAR}{title}\n{}", grid.render())?;
    out.flush()?;
    thread::sleep(config.tick);
    Ok(())
}

/// Soft-reset `grid`, then run `algorithm` on it to completion and play its
/// path back, one tick per step.
pub fn run_algorithm(
    grid: &mut Grid,
    algorithm: Algorithm,
    config: &DemoConfig,
    out: &mut impl Write,
) -> Result<Report, DemoError> {
    let cleared = grid.reset();
    debug!("{algorithm}: cleared {cleared} cells");

    let cells = grid.len();
    let mut search = Search::init(algorithm, grid, cells)?;
    while !search.should_stop() {
        search.step(grid);
        frame(out, grid, algorithm.label(), config)?;
    }
    if let Some(mut playback) = search.take_playback() {
        while playback.advance(grid).is_some() {
            frame(out, grid, algorithm.label(), config)?;
        }
    }

    let report = Report::new(algorithm, &search, grid);
    info!("{report}");
    if !config.animate {
        write!(out, "{}", grid.render())?;
    }
    writeln!(out, "{report}")?;
    writeln!(out)?;
    Ok(report)
}

/// Generate the grid and run every configured search on it in turn.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> Result<Vec<Report>, DemoError> {
    let mut grid = random_grid(config)?;
    writeln!(out, "{}", grid.render())?;

    let mut reports = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        reports.push(run_algorithm(&mut grid, algorithm, config, out)?);
    }
    Ok(reports)
}
