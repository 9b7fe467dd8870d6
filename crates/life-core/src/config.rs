//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Grid dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width of the grid in cells
    pub width: i32,
    /// Height of the grid in cells
    pub height: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

/// Run-loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of generations to run after the initial render; `None` runs
    /// until the process is killed.
    pub max_generations: Option<u64>,
    /// Emit a progress log line every this many generations
    pub log_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_generations: None,
            log_interval: 1000,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    pub grid: GridConfig,
    pub run: RunConfig,
}
