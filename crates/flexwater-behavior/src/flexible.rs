//! The budgeted coverage allocator.
//!
//! [`FlexibleBehavior`] decides which tiles a sprinkler with a fixed
//! budget waters on the actual soil around it:
//!
//! 1. Tiles suggested by the upstream strategy are kept if waterable;
//!    each one spends a unit of budget.
//! 2. A bounded BFS from the sprinkler and the kept tiles discovers
//!    candidates and their step counts.
//! 3. Candidates are ranked by step count, then by a distance that is
//!    stretched along any axis where another sprinkler sits close by.
//! 4. Candidates are watered in waves. Each wave takes the best-ranked
//!    group of equally-distant tiles adjacent to the sprinkler or to
//!    something already watered; when a group is larger than the budget
//!    left, the [`BalanceMode`] decides.
//!
//! Constructed via the builder pattern: [`FlexibleBehavior::builder`].

use std::fmt;

use flexwater_core::{BalanceMode, SoilMap, SprinklerInfo, TilePos};
use indexmap::IndexSet;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::behavior::{NoCoverage, SprinklerBehavior};
use crate::coverage::Coverage;
use crate::flood::FloodFill;
use crate::range::{DiamondSpreadRange, SpreadRange};
use crate::rank::{detect_neighbors, rank_candidates};
use crate::spiral::SpiralScan;

/// Equally-ranked tiles consumed in one wave. Rings of eight are the
/// common case.
type TieGroup = SmallVec<[TilePos; 8]>;

/// Flood-fill coverage allocator.
///
/// Stateless between calls: the same map snapshot, position and info
/// always produce the same [`Coverage`].
pub struct FlexibleBehavior {
    balance_mode: BalanceMode,
    upstream: Box<dyn SprinklerBehavior>,
    spread_range: Box<dyn SpreadRange>,
}

/// Builder for [`FlexibleBehavior`].
///
/// Every setting has a default: relaxed balancing, no upstream, and a
/// [`DiamondSpreadRange`] without margin.
pub struct FlexibleBehaviorBuilder {
    balance_mode: BalanceMode,
    upstream: Option<Box<dyn SprinklerBehavior>>,
    spread_range: Option<Box<dyn SpreadRange>>,
}

impl FlexibleBehavior {
    /// Create a new builder.
    pub fn builder() -> FlexibleBehaviorBuilder {
        FlexibleBehaviorBuilder {
            balance_mode: BalanceMode::default(),
            upstream: None,
            spread_range: None,
        }
    }

    /// How tie groups larger than the remaining budget are resolved.
    pub fn balance_mode(&self) -> BalanceMode {
        self.balance_mode
    }

    /// The strategy queried before the flood fill.
    pub fn upstream(&self) -> &dyn SprinklerBehavior {
        self.upstream.as_ref()
    }

    /// Allocate the budget of the sprinkler at `position`.
    ///
    /// Never fails: a negative power counts as zero, unwaterable upstream
    /// tiles are dropped, and a budget that cannot be placed is reported
    /// through [`Coverage::is_under_delivered`] and a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexwater_behavior::FlexibleBehavior;
    /// use flexwater_core::{Layout, SoilType, SprinklerInfo, TilePos};
    ///
    /// let open = |_: TilePos| SoilType::Dry;
    /// let behavior = FlexibleBehavior::builder().build();
    /// let info = SprinklerInfo::new(Layout::basic(), 4);
    /// let coverage = behavior.allocate(&open, TilePos::ZERO, &info);
    /// assert_eq!(coverage.len(), 4);
    /// assert!(TilePos::ZERO.neighbors().iter().all(|&n| coverage.contains(n)));
    /// ```
    pub fn allocate(&self, map: &dyn SoilMap, position: TilePos, info: &SprinklerInfo) -> Coverage {
        let budget = info.budget();
        let mut remaining = i64::from(budget);

        let mut watered = IndexSet::new();
        for tile in self.upstream.sprinkler_tiles(map, position, info) {
            if map.soil(tile).is_waterable() && watered.insert(tile) {
                remaining -= 1;
            }
        }
        let seeded = watered.len();
        if remaining <= 0 {
            return Coverage::new(watered, seeded, budget, remaining, false, 0);
        }

        let range = self
            .spread_range
            .spread_range(u32::try_from(remaining).unwrap_or(u32::MAX));
        let flood = FloodFill::run(
            map,
            position,
            &watered,
            usize::try_from(remaining).unwrap_or(usize::MAX),
            range,
        );
        let neighbors = detect_neighbors(map, position, &flood.other_sprinklers, range);
        let mut ranked = rank_candidates(&flood, position, neighbors, range);
        trace!(
            %position,
            range,
            candidates = ranked.len(),
            horizontal_neighbor = neighbors.horizontal,
            vertical_neighbor = neighbors.vertical,
            "flood fill complete"
        );

        let mut largest_group = 0;
        while remaining > 0 && !ranked.is_empty() {
            let mut reachable = ranked
                .iter()
                .filter(|entry| is_reachable(entry.tile, position, &watered));
            let Some(first) = reachable.next() else {
                break;
            };
            let key = first.weighted_sq;
            let mut group: TieGroup = std::iter::once(first)
                .chain(reachable.take_while(|entry| entry.weighted_sq == key))
                .map(|entry| entry.tile)
                .collect();
            trace!(
                %position,
                cost = first.cost,
                distance = first.distance(),
                size = group.len(),
                remaining,
                "tie group"
            );
            ranked.retain(|entry| !group.contains(&entry.tile));
            largest_group = largest_group.max(group.len());

            let size = group.len() as i64;
            if remaining >= size {
                watered.extend(group.iter().copied());
                remaining -= size;
                continue;
            }
            match self.balance_mode {
                BalanceMode::Relaxed => {
                    watered.extend(group.iter().copied());
                    remaining -= size;
                }
                BalanceMode::Restrictive => remaining = 0,
                BalanceMode::Exact => {
                    let ring = |tile: &TilePos| tile.chebyshev_distance(position);
                    let min_ring = group.iter().map(ring).min().unwrap_or(0);
                    let max_ring = group.iter().map(ring).max().unwrap_or(0);
                    for offset in SpiralScan::new(min_ring, max_ring) {
                        let tile = position + offset;
                        if let Some(index) = group.iter().position(|&member| member == tile) {
                            group.remove(index);
                            watered.insert(tile);
                            remaining -= 1;
                            if remaining <= 0 {
                                break;
                            }
                        }
                    }
                }
            }
        }

        let under_delivered = remaining > 0;
        if under_delivered {
            warn!(
                %position,
                budget,
                shortfall = remaining,
                "could not find enough tiles to water"
            );
        }
        Coverage::new(
            watered,
            seeded,
            budget,
            remaining,
            under_delivered,
            largest_group,
        )
    }
}

/// A tile may be watered once it touches the sprinkler or a watered tile.
fn is_reachable(tile: TilePos, position: TilePos, watered: &IndexSet<TilePos>) -> bool {
    tile.neighbors()
        .iter()
        .any(|neighbor| *neighbor == position || watered.contains(neighbor))
}

impl SprinklerBehavior for FlexibleBehavior {
    fn name(&self) -> &str {
        "flexible"
    }

    fn sprinkler_tiles(
        &self,
        map: &dyn SoilMap,
        position: TilePos,
        info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        self.allocate(map, position, info).into_tiles()
    }
}

impl fmt::Debug for FlexibleBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexibleBehavior")
            .field("balance_mode", &self.balance_mode)
            .field("upstream", &self.upstream.name())
            .finish_non_exhaustive()
    }
}

impl FlexibleBehaviorBuilder {
    /// Set the balance mode (default: relaxed).
    pub fn balance_mode(mut self, mode: BalanceMode) -> Self {
        self.balance_mode = mode;
        self
    }

    /// Set the strategy whose tiles seed the allocation (default: none).
    pub fn upstream(mut self, upstream: impl SprinklerBehavior + 'static) -> Self {
        self.upstream = Some(Box::new(upstream));
        self
    }

    /// Set the budget-to-depth mapping (default: [`DiamondSpreadRange`]).
    pub fn spread_range(mut self, range: impl SpreadRange + 'static) -> Self {
        self.spread_range = Some(Box::new(range));
        self
    }

    /// Build the allocator.
    pub fn build(self) -> FlexibleBehavior {
        FlexibleBehavior {
            balance_mode: self.balance_mode,
            upstream: self.upstream.unwrap_or_else(|| Box::new(NoCoverage)),
            spread_range: self
                .spread_range
                .unwrap_or_else(|| Box::new(DiamondSpreadRange::default())),
        }
    }
}
