//! Headless search animation in the terminal.
//!
//! Run: cargo run --bin pathviz -- --rows=20 --cols=40 --algo=dijkstra,astar --animate
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the searches step by step.

use clap::Parser;
use pathviz_demos::{Cli, run};

fn main() {
    env_logger::init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = run(&config, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
