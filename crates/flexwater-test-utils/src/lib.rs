//! Test utilities and mock strategies for flexwater development.
//!
//! Provides farm fixtures ([`farm`], [`open_field`], [`corridor`]), a
//! seeded random farm generator for property tests ([`random_farm`]) and
//! mock upstream strategies in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use flexwater_core::{SoilMap, SoilType, TilePos};
use flexwater_grid::FarmGrid;
use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Parse an ASCII farm, panicking on malformed input.
pub fn farm(ascii: &str) -> FarmGrid {
    match FarmGrid::from_ascii(ascii) {
        Ok(grid) => grid,
        Err(err) => panic!("bad fixture farm: {err}"),
    }
}

/// A `size` x `size` dry square with a sprinkler in the middle.
///
/// `size` should be odd so the middle is a single tile.
pub fn open_field(size: u32) -> (FarmGrid, TilePos) {
    let mut grid = FarmGrid::filled(size, size, SoilType::Dry);
    let half = (size / 2) as i32;
    let centre = TilePos::new(half, half);
    grid.set(centre, SoilType::Sprinkler);
    (grid, centre)
}

/// A one-tile-wide dry corridor of `length` tiles with a sprinkler at its
/// west end, `(0, 0)`.
pub fn corridor(length: u32) -> (FarmGrid, TilePos) {
    let mut grid = FarmGrid::filled(length + 1, 1, SoilType::Dry);
    grid.set(TilePos::ZERO, SoilType::Sprinkler);
    (grid, TilePos::ZERO)
}

/// Soil mix for [`random_farm`].
#[derive(Clone, Copy, Debug)]
pub struct SoilMix {
    /// Probability a tile is already wet.
    pub wet: f64,
    /// Probability a tile is blocked.
    pub blocked: f64,
    /// Probability a tile holds another sprinkler.
    pub sprinkler: f64,
    /// Probability a tile is not soil at all.
    pub hole: f64,
}

impl Default for SoilMix {
    fn default() -> Self {
        Self {
            wet: 0.15,
            blocked: 0.15,
            sprinkler: 0.04,
            hole: 0.06,
        }
    }
}

/// A deterministic random `width` x `height` farm with a sprinkler in the
/// middle.
///
/// Identical seeds produce identical farms.
pub fn random_farm(seed: u64, width: u32, height: u32, mix: SoilMix) -> (FarmGrid, TilePos) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = FarmGrid::new();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let roll: f64 = rng.random();
            let bands = [
                (mix.wet, SoilType::Wet),
                (mix.blocked, SoilType::NonWaterable),
                (mix.sprinkler, SoilType::Sprinkler),
                (mix.hole, SoilType::NonSoil),
            ];
            let mut soil = SoilType::Dry;
            let mut threshold = 0.0;
            for (probability, band) in bands {
                threshold += probability;
                if roll < threshold {
                    soil = band;
                    break;
                }
            }
            grid.set(TilePos::new(x, y), soil);
        }
    }
    let centre = TilePos::new((width / 2) as i32, (height / 2) as i32);
    grid.set(centre, SoilType::Sprinkler);
    (grid, centre)
}

/// `true` if every tile in `tiles` can be reached from `position` through
/// a chain of 4-adjacent tiles drawn from `tiles` itself.
pub fn is_connected_to(position: TilePos, tiles: &IndexSet<TilePos>) -> bool {
    let mut reached = IndexSet::new();
    let mut frontier = vec![position];
    while let Some(tile) = frontier.pop() {
        for neighbor in tile.neighbors() {
            if tiles.contains(&neighbor) && reached.insert(neighbor) {
                frontier.push(neighbor);
            }
        }
    }
    reached.len() == tiles.len()
}

/// `true` if no tile in `tiles` is classified as unwaterable on `map`.
pub fn all_waterable(map: &dyn SoilMap, tiles: &IndexSet<TilePos>) -> bool {
    tiles.iter().all(|&tile| map.soil(tile).is_waterable())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_farm_is_seeded() {
        let (a, _) = random_farm(7, 12, 9, SoilMix::default());
        let (b, _) = random_farm(7, 12, 9, SoilMix::default());
        let a: Vec<_> = a.iter().collect();
        let b: Vec<_> = b.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn open_field_centres_the_sprinkler() {
        let (grid, centre) = open_field(5);
        assert_eq!(centre, TilePos::new(2, 2));
        assert_eq!(grid.soil(centre), SoilType::Sprinkler);
        assert_eq!(grid.count(SoilType::Dry), 24);
    }

    #[test]
    fn connectivity_check() {
        let line = IndexSet::from([TilePos::new(1, 0), TilePos::new(2, 0)]);
        assert!(is_connected_to(TilePos::ZERO, &line));
        let gap = IndexSet::from([TilePos::new(1, 0), TilePos::new(3, 0)]);
        assert!(!is_connected_to(TilePos::ZERO, &gap));
    }
}
