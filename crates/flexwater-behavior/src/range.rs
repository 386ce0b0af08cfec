//! How far a flood fill may search for a given budget.

use flexwater_core::Layout;

/// Maps a budget to the maximum BFS depth of the allocator's flood fill.
///
/// Injected into [`FlexibleBehavior`](crate::FlexibleBehavior) rather than
/// read from global configuration. Implemented for any
/// `Fn(u32) -> u32 + Send + Sync`.
pub trait SpreadRange: Send + Sync {
    /// Maximum BFS depth for `power` tiles.
    fn spread_range(&self, power: u32) -> u32;
}

impl<F> SpreadRange for F
where
    F: Fn(u32) -> u32 + Send + Sync,
{
    fn spread_range(&self, power: u32) -> u32 {
        self(power)
    }
}

/// The default range: the smallest radius whose full 4-neighbour diamond
/// holds `power` tiles, plus a configurable margin.
///
/// A diamond of radius `r` around a sprinkler holds `2r(r + 1)` tiles
/// (excluding the sprinkler itself), so 4 tiles need radius 1, 12 need
/// radius 2 and 24 need radius 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiamondSpreadRange {
    /// Extra depth added on top of the diamond radius.
    pub margin: u32,
}

impl DiamondSpreadRange {
    /// Create a range with the given margin.
    pub const fn new(margin: u32) -> Self {
        Self { margin }
    }

    /// Tiles in a full diamond of `radius`, excluding its centre.
    pub fn diamond_capacity(radius: u32) -> u64 {
        let r = u64::from(radius);
        2 * r * (r + 1)
    }
}

impl SpreadRange for DiamondSpreadRange {
    fn spread_range(&self, power: u32) -> u32 {
        let mut radius = 0u32;
        while Self::diamond_capacity(radius) < u64::from(power) {
            radius += 1;
        }
        radius.saturating_add(self.margin)
    }
}

/// The larger of the spread range for `power` and the focused range of
/// `layout`: how far a sprinkler may reach at all.
pub fn max_range(range: &dyn SpreadRange, power: u32, layout: &Layout) -> u32 {
    range.spread_range(power).max(layout.focused_range())
}
