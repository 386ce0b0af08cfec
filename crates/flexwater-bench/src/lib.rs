//! Benchmark profiles for the flexwater sprinkler allocator.
//!
//! Provides pre-built farms for benchmarking:
//!
//! - [`reference_farm`]: 100x100 farm with ~400 sprinklers of mixed tiers
//! - [`stress_farm`]: 316x316 farm (~100K tiles) with ~4000 sprinklers
//! - [`scatter_obstacles`]: deterministic obstacle placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use flexwater_core::{BalanceMode, SoilType, TilePos};
use flexwater_engine::{FarmError, FlexConfig, SprinklerFarm};
use flexwater_grid::FarmGrid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Spacing between sprinklers in the benchmark profiles.
pub const SPRINKLER_SPACING: u32 = 5;

/// Build a 100x100 reference farm.
///
/// Obstacles cover 10% of the soil; sprinklers sit every
/// [`SPRINKLER_SPACING`] tiles with tiers drawn from the seed.
pub fn reference_farm(seed: u64, mode: BalanceMode) -> Result<SprinklerFarm, FarmError> {
    build_farm(100, seed, mode)
}

/// Build a 316x316 stress farm. Same layout as [`reference_farm`] at 10x
/// the tile count.
pub fn stress_farm(seed: u64, mode: BalanceMode) -> Result<SprinklerFarm, FarmError> {
    build_farm(316, seed, mode)
}

fn build_farm(size: u32, seed: u64, mode: BalanceMode) -> Result<SprinklerFarm, FarmError> {
    let mut grid = FarmGrid::filled(size, size, SoilType::Dry);
    scatter_obstacles(&mut grid, size, 0.10, seed);

    let config = FlexConfig {
        balance_mode: mode,
        ..FlexConfig::default()
    };
    let tiers = config.tier_count();
    let mut farm = SprinklerFarm::new(grid, config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let offset = SPRINKLER_SPACING / 2;
    for y in (offset..size).step_by(SPRINKLER_SPACING as usize) {
        for x in (offset..size).step_by(SPRINKLER_SPACING as usize) {
            let tile = TilePos::new(x as i32, y as i32);
            if farm.grid().get(tile).is_waterable() {
                farm.place_sprinkler(tile, rng.random_range(1..=tiers))?;
            }
        }
    }
    Ok(farm)
}

/// Mark roughly `density` of the `size` x `size` square as non-waterable.
///
/// Same seed, same obstacles.
pub fn scatter_obstacles(grid: &mut FarmGrid, size: u32, density: f64, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            if rng.random_bool(density) {
                grid.set(TilePos::new(x, y), SoilType::NonWaterable);
            }
        }
    }
}
