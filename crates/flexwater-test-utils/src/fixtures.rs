//! Mock coverage strategies.
//!
//! - [`FixedTiles`]: always returns the same absolute tiles.
//! - [`OffsetTiles`]: returns fixed offsets translated to the sprinkler.
//! - [`CountingBehavior`]: wraps another strategy and counts calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use flexwater_behavior::SprinklerBehavior;
use flexwater_core::{SoilMap, SprinklerInfo, TilePos};
use indexmap::IndexSet;

/// Returns the same absolute tiles for every sprinkler, whatever the soil.
pub struct FixedTiles {
    pub tiles: IndexSet<TilePos>,
}

impl FixedTiles {
    pub fn new(tiles: impl IntoIterator<Item = TilePos>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }
}

impl SprinklerBehavior for FixedTiles {
    fn name(&self) -> &str {
        "fixed_tiles"
    }

    fn sprinkler_tiles(
        &self,
        _map: &dyn SoilMap,
        _position: TilePos,
        _info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        self.tiles.clone()
    }
}

/// Returns fixed offsets relative to the sprinkler, ignoring its layout.
pub struct OffsetTiles {
    pub offsets: Vec<TilePos>,
}

impl OffsetTiles {
    pub fn new(offsets: impl IntoIterator<Item = TilePos>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }
}

impl SprinklerBehavior for OffsetTiles {
    fn name(&self) -> &str {
        "offset_tiles"
    }

    fn sprinkler_tiles(
        &self,
        _map: &dyn SoilMap,
        position: TilePos,
        _info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        self.offsets.iter().map(|&offset| position + offset).collect()
    }
}

/// Delegates to an inner strategy and counts how often it was asked.
pub struct CountingBehavior<B> {
    pub inner: B,
    calls: AtomicUsize,
}

impl<B> CountingBehavior<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `sprinkler_tiles` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<B: SprinklerBehavior> SprinklerBehavior for CountingBehavior<B> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn sprinkler_tiles(
        &self,
        map: &dyn SoilMap,
        position: TilePos,
        info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.sprinkler_tiles(map, position, info)
    }
}
