//! Benchmark profiles for the Life simulation core.
//!
//! Provides pre-built worlds and [`CoreConfig`] profiles for benchmarking:
//!
//! - [`soup`]: seeded random square of live cells
//! - [`glider_fleet`]: a row of independent gliders
//! - [`reference_profile`]: 128x128 soup (~5.7K live cells) in a 1080p viewport
//! - [`stress_profile`]: 512x512 soup (~92K live cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use life_core::{Cell, Grid};
use life_engine::patterns::GLIDER;
use life_engine::CoreConfig;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fraction of cells alive in the profile soups, in percent.
pub const SOUP_DENSITY: u32 = 35;

/// A `side` x `side` square with its top-left corner at the origin, each
/// cell alive with probability `density` percent.
///
/// The same seed always yields the same grid.
pub fn soup(side: i32, density: u32, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new();
    for row in 0..side {
        for col in 0..side {
            if rng.next_u32() % 100 < density {
                grid.insert(Cell::new(row, col));
            }
        }
    }
    grid
}

/// `count` gliders side by side along row 0, far enough apart that they
/// never interact.
pub fn glider_fleet(count: i32) -> Grid {
    (0..count)
        .flat_map(|i| {
            GLIDER
                .iter()
                .map(move |&(dr, dc)| Cell::new(dr, i * 8 + dc))
        })
        .collect()
}

/// Build a reference benchmark profile: a 128x128 soup at [`SOUP_DENSITY`].
pub fn reference_profile(seed: u64) -> CoreConfig {
    profile(128, seed)
}

/// Build a stress benchmark profile: a 512x512 soup at [`SOUP_DENSITY`].
pub fn stress_profile(seed: u64) -> CoreConfig {
    profile(512, seed)
}

fn profile(side: i32, seed: u64) -> CoreConfig {
    CoreConfig {
        viewport: [1920.0, 1080.0],
        initial_cells: soup(side, SOUP_DENSITY, seed).sorted_cells(),
        ..CoreConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soup_is_deterministic() {
        assert_eq!(soup(32, SOUP_DENSITY, 7), soup(32, SOUP_DENSITY, 7));
        assert_ne!(soup(32, SOUP_DENSITY, 7), soup(32, SOUP_DENSITY, 8));
    }

    #[test]
    fn soup_stays_inside_its_square() {
        let grid = soup(16, 100, 1);
        assert_eq!(grid.len(), 256);
        assert!(grid
            .iter_alive()
            .all(|c| (0..16).contains(&c.row) && (0..16).contains(&c.col)));
        assert!(soup(16, 0, 1).is_empty());
    }

    #[test]
    fn fleet_size() {
        assert_eq!(glider_fleet(10).len(), 50);
    }

    #[test]
    fn profiles_validate() {
        assert!(reference_profile(42).validate().is_ok());
        assert!(stress_profile(42).validate().is_ok());
    }
}
