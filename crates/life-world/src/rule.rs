//! The Game of Life neighbor rule.

use life_core::CellState;

/// Next state of a cell given its current state and live-neighbor count.
///
/// Every (state, count) combination is matched explicitly; survival of a
/// live cell with 2 or 3 neighbors is a stated outcome, not a fallthrough.
pub fn next_state(state: CellState, live_neighbors: usize) -> CellState {
    match (state, live_neighbors) {
        // Underpopulation
        (CellState::Alive, 0 | 1) => CellState::Dead,
        // Survival
        (CellState::Alive, 2 | 3) => CellState::Alive,
        // Overpopulation
        (CellState::Alive, _) => CellState::Dead,
        // Reproduction
        (CellState::Dead, 3) => CellState::Alive,
        // A dead cell with any other neighbor count stays dead
        (CellState::Dead, _) => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_is_total() {
        // All 18 (state, count) combinations, checked against the rules
        for count in 0..=8 {
            let expected_alive = match count {
                2 | 3 => CellState::Alive,
                _ => CellState::Dead,
            };
            assert_eq!(next_state(CellState::Alive, count), expected_alive);

            let expected_dead = if count == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(next_state(CellState::Dead, count), expected_dead);
        }
    }

    #[test]
    fn test_lonely_cell_dies() {
        assert_eq!(next_state(CellState::Alive, 0), CellState::Dead);
        assert_eq!(next_state(CellState::Alive, 1), CellState::Dead);
    }

    #[test]
    fn test_survival_is_explicit() {
        assert_eq!(next_state(CellState::Alive, 2), CellState::Alive);
        assert_eq!(next_state(CellState::Alive, 3), CellState::Alive);
    }

    #[test]
    fn test_crowded_cell_dies() {
        for count in 4..=8 {
            assert_eq!(next_state(CellState::Alive, count), CellState::Dead);
        }
    }

    #[test]
    fn test_reproduction_needs_exactly_three() {
        assert_eq!(next_state(CellState::Dead, 3), CellState::Alive);
        for count in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(next_state(CellState::Dead, count), CellState::Dead);
        }
    }
}
