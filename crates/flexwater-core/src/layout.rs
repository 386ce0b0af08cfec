//! Fixed relative coverage shapes.
//!
//! A [`Layout`] is the set of offsets a sprinkler waters when nothing
//! constrains it. Low-tier sprinklers use the presets here directly; the
//! allocator also uses them as the unmodified coverage consumed by an
//! upstream strategy.

use indexmap::IndexSet;

use crate::tile::TilePos;

/// An ordered, duplicate-free set of offsets relative to a sprinkler.
///
/// Iteration order is insertion order, so layouts built by the same code
/// always enumerate identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    offsets: IndexSet<TilePos>,
}

impl Layout {
    /// Every offset `(x, y)` with `-radius <= x, y <= radius` except the
    /// centre, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexwater_core::{Layout, TilePos};
    ///
    /// let ring = Layout::square(1);
    /// assert_eq!(ring.len(), 8);
    /// assert!(!ring.contains(TilePos::ZERO));
    /// assert!(Layout::square(0).is_empty());
    /// ```
    pub fn square(radius: u32) -> Self {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        let mut offsets = IndexSet::new();
        for y in -r..=r {
            for x in -r..=r {
                if x != 0 || y != 0 {
                    offsets.insert(TilePos::new(x, y));
                }
            }
        }
        Self { offsets }
    }

    /// The four unit-distance neighbours.
    pub fn basic() -> Self {
        Self::from_offsets(TilePos::NEIGHBOR_OFFSETS)
    }

    /// The radius-1 square.
    pub fn quality() -> Self {
        Self::square(1)
    }

    /// The radius-2 square.
    pub fn iridium() -> Self {
        Self::square(2)
    }

    /// The fixed coverage of a tiered sprinkler: tier 1 (and below) is
    /// [`basic`](Self::basic), tier `n` is the square of radius `n - 1`.
    pub fn vanilla(tier: u32) -> Self {
        if tier <= 1 {
            Self::basic()
        } else {
            Self::square(tier - 1)
        }
    }

    /// Build a layout from arbitrary offsets. Duplicates and the zero
    /// offset (the sprinkler itself) are dropped.
    pub fn from_offsets(offsets: impl IntoIterator<Item = TilePos>) -> Self {
        Self {
            offsets: offsets
                .into_iter()
                .filter(|&offset| offset != TilePos::ZERO)
                .collect(),
        }
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// `true` if the layout covers nothing.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// `true` if `offset` is part of the layout.
    pub fn contains(&self, offset: TilePos) -> bool {
        self.offsets.contains(&offset)
    }

    /// Offsets in layout order.
    pub fn iter(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.offsets.iter().copied()
    }

    /// Absolute tiles covered when the sprinkler sits at `origin`.
    pub fn translated(&self, origin: TilePos) -> impl Iterator<Item = TilePos> + '_ {
        self.iter().map(move |offset| origin + offset)
    }

    /// How far the layout reaches in a single direction: the largest
    /// Manhattan distance of any offset, or 0 for an empty layout.
    pub fn focused_range(&self) -> u32 {
        self.iter()
            .map(|offset| offset.manhattan_distance(TilePos::ZERO))
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<TilePos> for Layout {
    fn from_iter<I: IntoIterator<Item = TilePos>>(iter: I) -> Self {
        Self::from_offsets(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn presets_have_expected_sizes() {
        assert_eq!(Layout::basic().len(), 4);
        assert_eq!(Layout::quality().len(), 8);
        assert_eq!(Layout::iridium().len(), 24);
    }

    #[test]
    fn basic_excludes_corners() {
        let basic = Layout::basic();
        assert!(basic.contains(TilePos::UP));
        assert!(basic.contains(TilePos::LEFT));
        assert!(!basic.contains(TilePos::new(1, 1)));
    }

    #[test]
    fn vanilla_tiers() {
        assert_eq!(Layout::vanilla(0), Layout::basic());
        assert_eq!(Layout::vanilla(1), Layout::basic());
        assert_eq!(Layout::vanilla(2), Layout::quality());
        assert_eq!(Layout::vanilla(3), Layout::iridium());
        assert_eq!(Layout::vanilla(4).len(), 48);
    }

    #[test]
    fn square_is_row_major() {
        let first: Vec<_> = Layout::square(1).iter().take(4).collect();
        assert_eq!(
            first,
            vec![
                TilePos::new(-1, -1),
                TilePos::new(0, -1),
                TilePos::new(1, -1),
                TilePos::new(-1, 0),
            ]
        );
    }

    #[test]
    fn from_offsets_drops_centre_and_duplicates() {
        let layout =
            Layout::from_offsets([TilePos::ZERO, TilePos::UP, TilePos::UP, TilePos::DOWN * 3]);
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.focused_range(), 3);
    }

    #[test]
    fn translated_offsets_by_origin() {
        let tiles: Vec<_> = Layout::basic().translated(TilePos::new(10, 10)).collect();
        assert!(tiles.contains(&TilePos::new(9, 10)));
        assert!(tiles.contains(&TilePos::new(10, 11)));
    }

    #[test]
    fn focused_range_of_presets() {
        assert_eq!(Layout::default().focused_range(), 0);
        assert_eq!(Layout::basic().focused_range(), 1);
        assert_eq!(Layout::quality().focused_range(), 2);
        assert_eq!(Layout::iridium().focused_range(), 4);
    }

    proptest! {
        #[test]
        fn square_size_matches_formula(radius in 0u32..12) {
            let side = (2 * radius + 1) as usize;
            prop_assert_eq!(Layout::square(radius).len(), side * side - 1);
        }

        #[test]
        fn square_is_deterministic(radius in 0u32..8) {
            let a: Vec<_> = Layout::square(radius).iter().collect();
            let b: Vec<_> = Layout::square(radius).iter().collect();
            prop_assert_eq!(a, b);
        }
    }
}
