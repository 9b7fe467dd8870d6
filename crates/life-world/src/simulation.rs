//! Simulation engine driving the grid through generations.

use crate::grid::Grid;
use crate::render;
use crate::rule;
use life_core::{CellState, Position, Result, SimConfig};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::mem;
use tracing::{debug, info};

/// Double-buffered Game of Life simulation.
///
/// `current` is the authoritative grid; `staging` accumulates the next
/// generation so that every cell's neighbor count is taken from the prior
/// generation only.
pub struct Simulation {
    current: Grid,
    staging: Grid,
    config: SimConfig,
    generation: u64,
}

impl Simulation {
    /// Build a simulation with the given seed cells alive. Fails if any
    /// seed cell lies outside the grid.
    pub fn new(config: SimConfig, seed: Vec<Position>) -> Result<Self> {
        let mut current = Grid::new(&config.grid)?;
        let staging = current.clone();

        for pos in seed {
            current.set(pos, CellState::Alive)?;
        }

        debug!(
            width = config.grid.width,
            height = config.grid.height,
            live_cells = current.live_count(),
            "Simulation seeded"
        );

        Ok(Self {
            current,
            staging,
            config,
            generation: 0,
        })
    }

    /// The current (authoritative) grid
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation: apply the rule to every cell of the current
    /// grid, writing results into the staging grid, then commit.
    pub fn step(&mut self) {
        for index in 0..self.current.cell_count() {
            let pos = self.current.index_to_pos(index);
            let state = self.current.state_at(index);
            let next = rule::next_state(state, self.current.live_neighbors(pos));
            self.staging.put(index, next);
        }

        self.commit_staging();
        self.generation += 1;
    }

    /// Promote the fully-written staging grid to current. The old current
    /// grid becomes the staging buffer for the next generation; every one
    /// of its cells is overwritten before the next commit.
    fn commit_staging(&mut self) {
        mem::swap(&mut self.current, &mut self.staging);
    }

    /// Run the simulation, streaming each generation (starting with
    /// generation 0) to `out`. With `max_generations: None` this loops
    /// until the process is killed or the writer fails.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<SimulationSummary> {
        match self.config.run.max_generations {
            Some(limit) => info!(limit, "Starting simulation"),
            None => info!("Starting simulation (unbounded run)"),
        }

        render::write_grid(&self.current, out)?;

        let log_interval = self.config.run.log_interval.max(1);
        let max_generations = self.config.run.max_generations;

        loop {
            if let Some(limit) = max_generations {
                if self.generation >= limit {
                    break;
                }
            }

            self.step();
            render::write_grid(&self.current, out)?;

            if self.generation % log_interval == 0 {
                info!(
                    generation = self.generation,
                    live_cells = self.current.live_count(),
                    "Generation milestone"
                );
            }
        }

        let summary = SimulationSummary {
            generations: self.generation,
            live_cells: self.current.live_count(),
        };
        info!(
            generations = summary.generations,
            live_cells = summary.live_cells,
            "Simulation finished"
        );
        Ok(summary)
    }
}

/// Final state of a bounded run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub generations: u64,
    pub live_cells: usize,
}
