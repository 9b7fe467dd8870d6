//! Text renderer for the grid.
//!
//! One line per row, cells as `1`/`0` separated by single spaces, rows in
//! top-to-bottom order, and a blank line after the full grid. Rendering
//! never mutates the grid.

use crate::grid::Grid;
use life_core::{CellState, Position, Result};
use std::fmt;
use std::io::Write;

/// Render the grid into an owned string
pub fn render_to_string(grid: &Grid) -> String {
    let mut out = String::with_capacity(((grid.width * 2 + 1) * (grid.height + 1)) as usize);
    for y in 0..grid.height {
        for x in 0..grid.width {
            if x > 0 {
                out.push(' ');
            }
            let state = grid.get(Position::new(x, y)).unwrap_or(CellState::Dead);
            out.push(state.glyph());
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Stream one rendered generation to a writer
pub fn write_grid<W: Write>(grid: &Grid, out: &mut W) -> Result<()> {
    out.write_all(render_to_string(grid).as_bytes())?;
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::GridConfig;

    #[test]
    fn test_render_empty_grid() {
        let config = GridConfig { width: 3, height: 2 };
        let grid = Grid::new(&config).unwrap();
        assert_eq!(render_to_string(&grid), "0 0 0\n0 0 0\n\n");
    }

    #[test]
    fn test_render_marks_live_cells() {
        let config = GridConfig { width: 3, height: 3 };
        let mut grid = Grid::new(&config).unwrap();
        grid.set(Position::new(1, 0), CellState::Alive).unwrap();
        grid.set(Position::new(2, 2), CellState::Alive).unwrap();

        assert_eq!(render_to_string(&grid), "0 1 0\n0 0 0\n0 0 1\n\n");
    }

    #[test]
    fn test_render_shape_and_alphabet() {
        let grid = Grid::new(&GridConfig::default()).unwrap();
        let text = render_to_string(&grid);

        // 10 row lines plus the trailing blank line
        assert_eq!(text.lines().count(), 11);
        assert!(text.ends_with("\n\n"));
        assert!(text.chars().all(|c| matches!(c, '0' | '1' | ' ' | '\n')));
    }

    #[test]
    fn test_display_matches_renderer() {
        let grid = Grid::new(&GridConfig::default()).unwrap();
        assert_eq!(grid.to_string(), render_to_string(&grid));
    }

    #[test]
    fn test_write_grid_streams_same_bytes() {
        let grid = Grid::new(&GridConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_grid(&grid, &mut buf).unwrap();
        assert_eq!(buf, render_to_string(&grid).into_bytes());
    }
}
