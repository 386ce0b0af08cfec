//! Per-tile soil classification.

/// How a tile takes part in watering, as reported by a [`SoilMap`](crate::SoilMap).
///
/// Classification is a pure function of grid state at query time; the
/// allocator never changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoilType {
    /// Waterable soil that has not been watered yet.
    Dry,
    /// Waterable soil that is already watered.
    Wet,
    /// Soil that cannot be watered, e.g. covered by a non-soil object.
    NonWaterable,
    /// A tile holding a sprinkler. Never watered, but other sprinklers
    /// bias their coverage away from it.
    Sprinkler,
    /// Outside the soil system entirely.
    NonSoil,
}

impl SoilType {
    /// `true` for [`Dry`](Self::Dry) and [`Wet`](Self::Wet).
    pub fn is_waterable(self) -> bool {
        matches!(self, Self::Dry | Self::Wet)
    }
}
