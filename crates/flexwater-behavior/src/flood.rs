//! Bounded multi-source BFS that discovers candidate tiles.

use std::collections::VecDeque;

use flexwater_core::{SoilMap, SoilType, TilePos};
use flexwater_grid::CostGrid;
use indexmap::IndexSet;

/// Result of one flood fill around a sprinkler.
#[derive(Debug)]
pub(crate) struct FloodFill {
    /// Minimum step count for every tile the search discovered.
    pub(crate) costs: CostGrid,
    /// Waterable tiles not yet watered, in discovery order.
    pub(crate) candidates: IndexSet<TilePos>,
    /// Other sprinklers the search ran into.
    pub(crate) other_sprinklers: IndexSet<TilePos>,
}

impl FloodFill {
    /// Search outward from `position` and every tile in `watered`.
    ///
    /// The search depth is `range`, capped at `remaining`: a tile more
    /// than `remaining` steps from every seed can never join a connected
    /// coverage. The window spans the farthest watered tile or `range` on
    /// each axis, no further than one depth past the farthest watered
    /// tile, and at least 1 so the sprinkler's own neighbours always fit.
    /// Tiles at full depth are classified but not expanded; non-waterable
    /// tiles and other sprinklers are never expanded. Once `remaining`
    /// candidates are known, tiles costlier than anything assigned so far
    /// are skipped.
    pub(crate) fn run(
        map: &dyn SoilMap,
        position: TilePos,
        watered: &IndexSet<TilePos>,
        remaining: usize,
        range: u32,
    ) -> Self {
        let depth = range.min(u32::try_from(remaining).unwrap_or(u32::MAX));
        let half_extent = |extent: u32| extent.max(range).min(extent.saturating_add(depth)).max(1);
        let half_width = half_extent(
            watered
                .iter()
                .map(|tile| tile.x.abs_diff(position.x))
                .max()
                .unwrap_or(0),
        );
        let half_height = half_extent(
            watered
                .iter()
                .map(|tile| tile.y.abs_diff(position.y))
                .max()
                .unwrap_or(0),
        );

        let mut costs = CostGrid::new(position, half_width, half_height);
        let mut queue = VecDeque::new();
        let mut candidates = IndexSet::new();
        let mut other_sprinklers = IndexSet::new();

        // A cell leaves UNVISITED exactly when its tile is queued, so the
        // cost grid doubles as the discovered set.
        costs.relax(position, 0);
        for &tile in watered {
            if tile != position && costs.relax(tile, 0).is_some() {
                queue.push_back(tile);
            }
        }
        for neighbor in position.neighbors() {
            if costs.contains(neighbor) && costs.get(neighbor) == Some(CostGrid::UNVISITED) {
                costs.relax(neighbor, 1);
                queue.push_back(neighbor);
            }
        }
        let mut max_cost = 1;

        while let Some(tile) = queue.pop_front() {
            let Some(cost) = costs.get(tile) else {
                continue;
            };
            if candidates.len() >= remaining && cost > max_cost {
                continue;
            }

            match map.soil(tile) {
                SoilType::Dry | SoilType::Wet => {
                    if !watered.contains(&tile) {
                        candidates.insert(tile);
                    }
                }
                SoilType::Sprinkler => {
                    other_sprinklers.insert(tile);
                    continue;
                }
                SoilType::NonWaterable | SoilType::NonSoil => continue,
            }

            if cost >= depth {
                continue;
            }
            let next = cost + 1;
            for neighbor in tile.neighbors() {
                if costs.contains(neighbor) && costs.get(neighbor) == Some(CostGrid::UNVISITED) {
                    costs.relax(neighbor, next);
                    queue.push_back(neighbor);
                    max_cost = max_cost.max(next);
                }
            }
        }

        Self {
            costs,
            candidates,
            other_sprinklers,
        }
    }

    /// Step count recorded for `tile`.
    pub(crate) fn cost(&self, tile: TilePos) -> u32 {
        if !self.costs.contains(tile) {
            return CostGrid::UNVISITED;
        }
        self.costs.get(tile).unwrap_or(CostGrid::UNVISITED)
    }
}
