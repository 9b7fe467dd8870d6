//! Fixed-size 2D grid of cell states.

use life_core::{CellState, Direction, Error, GridConfig, Position, Result};
use serde::{Deserialize, Serialize};

/// A bounded (non-wrapping) 2D grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid of the given dimensions
    pub fn new(config: &GridConfig) -> Result<Self> {
        if config.width <= 0 || config.height <= 0 {
            return Err(Error::Validation(format!(
                "grid dimensions must be positive, got {}x{}",
                config.width, config.height
            )));
        }
        let size = (config.width * config.height) as usize;
        Ok(Self {
            width: config.width,
            height: config.height,
            cells: vec![CellState::Dead; size],
        })
    }

    /// Whether a position lies on the grid. The upper bound is exclusive:
    /// the valid indices are `0..width` and `0..height`.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Cell state at a position, or `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<CellState> {
        if self.in_bounds(pos) {
            Some(self.cells[self.pos_to_index(pos)])
        } else {
            None
        }
    }

    /// Set the cell state at a position
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<()> {
        if !self.in_bounds(pos) {
            return Err(Error::Validation(format!(
                "position ({}, {}) outside {}x{} grid",
                pos.x, pos.y, self.width, self.height
            )));
        }
        let index = self.pos_to_index(pos);
        self.cells[index] = state;
        Ok(())
    }

    /// Count the live cells among the 8 neighbors of a position. Neighbors
    /// outside the grid are skipped; the cell itself is never counted.
    pub fn live_neighbors(&self, pos: Position) -> usize {
        Direction::all()
            .iter()
            .map(|d| d.to_delta())
            .filter_map(|(dx, dy)| self.get(pos.offset(dx, dy)))
            .filter(|state| state.is_alive())
            .count()
    }

    /// Total number of live cells on the grid
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn state_at(&self, index: usize) -> CellState {
        self.cells[index]
    }

    pub(crate) fn put(&mut self, index: usize, state: CellState) {
        self.cells[index] = state;
    }

    /// Iterator over all positions, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, state)| (self.index_to_pos(i), *state))
    }
}
