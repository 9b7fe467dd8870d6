//! Command-line driver for the Game of Life simulation.
//!
//! Renders generation 0 and then every following generation to stdout,
//! one grid per generation separated by blank lines. Diagnostics go to
//! stderr so the grid stream stays clean. The default configuration runs
//! until the process is interrupted.

use anyhow::Result;
use life_core::SimConfig;
use life_world::{patterns, Simulation};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = SimConfig::default();
    info!(
        width = config.grid.width,
        height = config.grid.height,
        "Starting Game of Life"
    );

    let mut sim = Simulation::new(config, patterns::classic_seed())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = sim.run(&mut out)?;
    out.flush()?;

    // Only reachable when a generation limit is configured
    info!(
        generations = summary.generations,
        live_cells = summary.live_cells,
        "Run complete"
    );
    Ok(())
}
