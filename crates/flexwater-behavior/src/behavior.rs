//! The [`SprinklerBehavior`] trait and the simple strategies.

use std::sync::Arc;

use flexwater_core::{SoilMap, SprinklerInfo, TilePos};
use indexmap::IndexSet;

/// A strategy that decides which tiles a sprinkler waters.
///
/// # Contract
///
/// - `sprinkler_tiles()` MUST be deterministic: the same map snapshot,
///   position and info produce the same set, in the same order.
/// - `&self`: strategies hold configuration only, never per-call state.
/// - Returned tiles are absolute. Callers decide what to do with tiles
///   that are not waterable; strategies may return them.
///
/// # Object safety
///
/// This trait is object-safe; decorating strategies store their upstream
/// as `Box<dyn SprinklerBehavior>`.
///
/// # Examples
///
/// ```
/// use flexwater_behavior::SprinklerBehavior;
/// use flexwater_core::{Layout, SoilMap, SprinklerInfo, TilePos};
/// use indexmap::IndexSet;
///
/// /// Waters the tile straight below the sprinkler, whatever the budget.
/// struct Drip;
///
/// impl SprinklerBehavior for Drip {
///     fn name(&self) -> &str { "drip" }
///
///     fn sprinkler_tiles(
///         &self,
///         _map: &dyn SoilMap,
///         position: TilePos,
///         _info: &SprinklerInfo,
///     ) -> IndexSet<TilePos> {
///         IndexSet::from([position + TilePos::DOWN])
///     }
/// }
///
/// let map = |_: TilePos| flexwater_core::SoilType::Dry;
/// let info = SprinklerInfo::from_layout(Layout::basic());
/// let tiles = Drip.sprinkler_tiles(&map, TilePos::new(3, 3), &info);
/// assert!(tiles.contains(&TilePos::new(3, 4)));
/// ```
pub trait SprinklerBehavior: Send + Sync {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Tiles the sprinkler at `position` waters on `map`.
    fn sprinkler_tiles(
        &self,
        map: &dyn SoilMap,
        position: TilePos,
        info: &SprinklerInfo,
    ) -> IndexSet<TilePos>;
}

impl<B: SprinklerBehavior + ?Sized> SprinklerBehavior for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sprinkler_tiles(
        &self,
        map: &dyn SoilMap,
        position: TilePos,
        info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        (**self).sprinkler_tiles(map, position, info)
    }
}

impl<B: SprinklerBehavior + ?Sized> SprinklerBehavior for Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn sprinkler_tiles(
        &self,
        map: &dyn SoilMap,
        position: TilePos,
        info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        (**self).sprinkler_tiles(map, position, info)
    }
}

/// The empty strategy: waters nothing.
///
/// Stands in for "no upstream" so the allocator never branches on an
/// optional strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCoverage;

impl SprinklerBehavior for NoCoverage {
    fn name(&self) -> &str {
        "no_coverage"
    }

    fn sprinkler_tiles(
        &self,
        _map: &dyn SoilMap,
        _position: TilePos,
        _info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        IndexSet::new()
    }
}

/// The unmodified strategy: the sprinkler's layout translated to its
/// position, regardless of soil.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedLayout;

impl SprinklerBehavior for FixedLayout {
    fn name(&self) -> &str {
        "fixed_layout"
    }

    fn sprinkler_tiles(
        &self,
        _map: &dyn SoilMap,
        position: TilePos,
        info: &SprinklerInfo,
    ) -> IndexSet<TilePos> {
        info.layout.translated(position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexwater_core::{Layout, SoilType};

    fn dry(_: TilePos) -> SoilType {
        SoilType::Dry
    }

    #[test]
    fn no_coverage_is_empty() {
        let info = SprinklerInfo::from_layout(Layout::iridium());
        assert!(NoCoverage
            .sprinkler_tiles(&dry, TilePos::ZERO, &info)
            .is_empty());
    }

    #[test]
    fn fixed_layout_translates() {
        let info = SprinklerInfo::from_layout(Layout::basic());
        let tiles = FixedLayout.sprinkler_tiles(&dry, TilePos::new(5, 5), &info);
        assert_eq!(tiles.len(), 4);
        assert!(tiles.contains(&TilePos::new(5, 4)));
        assert!(tiles.contains(&TilePos::new(6, 5)));
    }

    #[test]
    fn fixed_layout_ignores_soil() {
        let blocked = |_: TilePos| SoilType::NonWaterable;
        let info = SprinklerInfo::from_layout(Layout::quality());
        assert_eq!(
            FixedLayout
                .sprinkler_tiles(&blocked, TilePos::ZERO, &info)
                .len(),
            8
        );
    }

    #[test]
    fn boxed_and_shared_delegate() {
        let boxed: Box<dyn SprinklerBehavior> = Box::new(FixedLayout);
        let shared: Arc<dyn SprinklerBehavior> = Arc::new(NoCoverage);
        let info = SprinklerInfo::from_layout(Layout::basic());
        assert_eq!(boxed.name(), "fixed_layout");
        assert_eq!(shared.name(), "no_coverage");
        assert_eq!(boxed.sprinkler_tiles(&dry, TilePos::ZERO, &info).len(), 4);
        assert!(shared.sprinkler_tiles(&dry, TilePos::ZERO, &info).is_empty());
    }
}
