//! Candidate ordering biased away from neighbouring sprinklers.

use flexwater_core::{SoilMap, SoilType, TilePos};
use indexmap::IndexSet;

use crate::flood::FloodFill;

/// Distance to the nearest other sprinkler found on each axis, 0 if none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct NeighborDistances {
    pub(crate) horizontal: u32,
    pub(crate) vertical: u32,
}

/// Scan both half-axes of each axis outward from `position`, up to
/// `floor(sqrt(range - 1))` steps, for a sprinkler the flood fill ran into.
///
/// Within each step the negative side is checked first; the first hit on
/// an axis wins.
pub(crate) fn detect_neighbors(
    map: &dyn SoilMap,
    position: TilePos,
    other_sprinklers: &IndexSet<TilePos>,
    range: u32,
) -> NeighborDistances {
    let reach = range.saturating_sub(1).isqrt() as i32;
    let closest = |axis: TilePos| -> u32 {
        for step in 1..=reach {
            for direction in [-1, 1] {
                let tile = position + axis * (direction * step);
                if other_sprinklers.contains(&tile) && map.soil(tile) == SoilType::Sprinkler {
                    return tile.manhattan_distance(position);
                }
            }
        }
        0
    };
    NeighborDistances {
        horizontal: closest(TilePos::RIGHT),
        vertical: closest(TilePos::DOWN),
    }
}

/// A candidate with its ordering key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RankedTile {
    pub(crate) tile: TilePos,
    /// Flood-fill step count.
    pub(crate) cost: u32,
    /// Squared weighted distance. Compared exactly; equal values form a
    /// tie group.
    pub(crate) weighted_sq: u64,
}

impl RankedTile {
    /// The weighted Euclidean distance.
    pub(crate) fn distance(&self) -> f64 {
        (self.weighted_sq as f64).sqrt()
    }
}

/// Order the flood fill's candidates by `(cost, weighted distance)`.
///
/// Each axis offset is scaled by `neighbour_distance * range + 1`, so a
/// detected neighbour on an axis pushes coverage onto the other one. The
/// sort is stable: equal keys keep discovery order.
pub(crate) fn rank_candidates(
    flood: &FloodFill,
    position: TilePos,
    neighbors: NeighborDistances,
    range: u32,
) -> Vec<RankedTile> {
    let h_scale = u64::from(neighbors.horizontal) * u64::from(range) + 1;
    let v_scale = u64::from(neighbors.vertical) * u64::from(range) + 1;

    let mut ranked: Vec<RankedTile> = flood
        .candidates
        .iter()
        .map(|&tile| {
            let dx = u64::from(tile.x.abs_diff(position.x)).saturating_mul(h_scale);
            let dy = u64::from(tile.y.abs_diff(position.y)).saturating_mul(v_scale);
            RankedTile {
                tile,
                cost: flood.cost(tile),
                weighted_sq: dx
                    .saturating_mul(dx)
                    .saturating_add(dy.saturating_mul(dy)),
            }
        })
        .collect();
    ranked.sort_by_key(|entry| (entry.cost, entry.weighted_sq));
    ranked
}
