//! Seed patterns for the initial grid.

use life_core::{GridConfig, Position};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// The hardcoded startup seed: four live cells near the center of the
/// default 10x10 grid.
pub fn classic_seed() -> Vec<Position> {
    vec![
        Position::new(2, 4),
        Position::new(3, 4),
        Position::new(5, 4),
        Position::new(3, 5),
    ]
}

/// Horizontal blinker (period-2 oscillator) with its leftmost cell at
/// `origin`
pub fn blinker(origin: Position) -> Vec<Position> {
    vec![origin, origin.offset(1, 0), origin.offset(2, 0)]
}

/// 2x2 block (still life) with its top-left cell at `origin`
pub fn block(origin: Position) -> Vec<Position> {
    vec![
        origin,
        origin.offset(1, 0),
        origin.offset(0, 1),
        origin.offset(1, 1),
    ]
}

/// Random soup: each cell is alive with probability `density`. The caller
/// supplies a seeded RNG, so the same seed reproduces the same soup.
pub fn random_soup(config: &GridConfig, density: f32, rng: &mut ChaCha8Rng) -> Vec<Position> {
    let mut cells = Vec::new();
    for y in 0..config.height {
        for x in 0..config.width {
            if rng.gen::<f32>() < density {
                cells.push(Position::new(x, y));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_classic_seed_fits_default_grid() {
        let config = GridConfig::default();
        let seed = classic_seed();
        assert_eq!(seed.len(), 4);
        for pos in seed {
            assert!(pos.x >= 0 && pos.x < config.width);
            assert!(pos.y >= 0 && pos.y < config.height);
        }
    }

    #[test]
    fn test_blinker_is_horizontal_triple() {
        let cells = blinker(Position::new(1, 4));
        assert_eq!(
            cells,
            vec![
                Position::new(1, 4),
                Position::new(2, 4),
                Position::new(3, 4)
            ]
        );
    }

    #[test]
    fn test_block_is_square() {
        let cells = block(Position::new(4, 4));
        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&Position::new(5, 5)));
    }

    #[test]
    fn test_random_soup_density_extremes() {
        let config = GridConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        assert!(random_soup(&config, 0.0, &mut rng).is_empty());
        assert_eq!(random_soup(&config, 1.0, &mut rng).len(), 100);
    }

    #[test]
    fn test_random_soup_is_deterministic_per_seed() {
        let config = GridConfig::default();
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);

        let soup_a = random_soup(&config, 0.3, &mut rng_a);
        let soup_b = random_soup(&config, 0.3, &mut rng_b);
        assert_eq!(soup_a, soup_b);
        assert!(!soup_a.is_empty());
    }
}
