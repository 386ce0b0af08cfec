//! The result of one allocation.

use flexwater_core::TilePos;
use indexmap::IndexSet;

/// Tiles a sprinkler waters plus the accounting behind them.
///
/// `tiles` holds the upstream tiles that survived filtering first, in
/// upstream order, followed by flood-filled tiles in the order they were
/// watered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    tiles: IndexSet<TilePos>,
    seeded: usize,
    budget: u32,
    remaining: i64,
    under_delivered: bool,
    largest_tie_group: usize,
}

impl Coverage {
    pub(crate) fn new(
        tiles: IndexSet<TilePos>,
        seeded: usize,
        budget: u32,
        remaining: i64,
        under_delivered: bool,
        largest_tie_group: usize,
    ) -> Self {
        Self {
            tiles,
            seeded,
            budget,
            remaining,
            under_delivered,
            largest_tie_group,
        }
    }

    /// Watered tiles, absolute.
    pub fn tiles(&self) -> &IndexSet<TilePos> {
        &self.tiles
    }

    /// Consume the coverage, keeping only the tiles.
    pub fn into_tiles(self) -> IndexSet<TilePos> {
        self.tiles
    }

    /// Number of watered tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` if nothing is watered.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// `true` if `tile` is watered.
    pub fn contains(&self, tile: TilePos) -> bool {
        self.tiles.contains(&tile)
    }

    /// Tiles kept from the upstream strategy.
    pub fn seeded(&self) -> usize {
        self.seeded
    }

    /// Tiles added by the flood fill.
    pub fn added(&self) -> usize {
        self.tiles.len() - self.seeded
    }

    /// The budget the allocation started with, after clamping.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Budget left when the allocation finished.
    ///
    /// Negative after a relaxed overshoot: the sprinkler is fully
    /// satisfied and watered `-remaining` extra tiles. Zero after a
    /// restrictive cut, even though fewer than `budget` tiles were
    /// watered.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Tiles watered beyond the budget.
    pub fn overshoot(&self) -> u32 {
        u32::try_from(-self.remaining.min(0)).unwrap_or(u32::MAX)
    }

    /// Budget the search could not place.
    pub fn shortfall(&self) -> u32 {
        u32::try_from(self.remaining.max(0)).unwrap_or(u32::MAX)
    }

    /// `true` if the allocator ran out of reachable tiles before the
    /// budget was spent. The allocator logs a warning in that case.
    pub fn is_under_delivered(&self) -> bool {
        self.under_delivered
    }

    /// Size of the largest group of equally-ranked tiles the flood fill
    /// consumed, 0 if it never ran. A relaxed overshoot is always smaller
    /// than this.
    pub fn largest_tie_group(&self) -> usize {
        self.largest_tie_group
    }

    /// Watered tiles as offsets from `origin`, in the same order.
    pub fn relative_to(&self, origin: TilePos) -> IndexSet<TilePos> {
        self.tiles.iter().map(|&tile| tile - origin).collect()
    }
}

impl IntoIterator for Coverage {
    type Item = TilePos;
    type IntoIter = indexmap::set::IntoIter<TilePos>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
