//! Game of Life simulation engine.
//!
//! This module implements the fixed-size 2D grid, the neighbor rule, the
//! double-buffered generation stepper, and the text renderer.

pub mod grid;
pub mod rule;
pub mod patterns;
pub mod render;
pub mod simulation;

pub use grid::Grid;
pub use render::render_to_string;
pub use simulation::{Simulation, SimulationSummary};
