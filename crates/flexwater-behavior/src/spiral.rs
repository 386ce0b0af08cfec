//! Deterministic ring-by-ring scan used to break exact-mode ties.

use flexwater_core::TilePos;

/// Lazy sequence of offsets sweeping square rings outward.
///
/// For every ring `i` from `min_ring` to `max_ring` and every `j` from 0
/// to `i`, the scan yields, in order:
///
/// ```text
/// (-j, -i)  ( j, -i)    top edge, centre outwards
/// ( i, -j)  ( i,  j)    right edge
/// ( j,  i)  (-j,  i)    bottom edge
/// (-i,  j)  (-i, -j)    left edge
/// ```
///
/// with the second offset of each pair skipped when `j == 0`. At `j == i`
/// each corner is emitted twice (once per edge it belongs to); consumers
/// that remove matched tiles treat the repeat as a no-op, and the order is
/// kept as is because it decides which of several equally-ranked tiles
/// wins.
///
/// # Examples
///
/// ```
/// use flexwater_behavior::SpiralScan;
/// use flexwater_core::TilePos;
///
/// let first: Vec<_> = SpiralScan::new(1, 1).take(4).collect();
/// assert_eq!(
///     first,
///     vec![
///         TilePos::new(0, -1),
///         TilePos::new(1, 0),
///         TilePos::new(0, 1),
///         TilePos::new(-1, 0),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SpiralScan {
    ring: i32,
    max_ring: i32,
    j: i32,
    step: u8,
}

impl SpiralScan {
    /// Scan rings `min_ring..=max_ring`. Empty if `min_ring > max_ring`.
    pub fn new(min_ring: u32, max_ring: u32) -> Self {
        Self {
            ring: i32::try_from(min_ring).unwrap_or(i32::MAX),
            max_ring: i32::try_from(max_ring).unwrap_or(i32::MAX),
            j: 0,
            step: 0,
        }
    }
}

impl Iterator for SpiralScan {
    type Item = TilePos;

    fn next(&mut self) -> Option<TilePos> {
        loop {
            if self.ring > self.max_ring {
                return None;
            }
            if self.step == 8 {
                self.step = 0;
                self.j += 1;
                if self.j > self.ring {
                    self.j = 0;
                    if self.ring == self.max_ring {
                        self.ring = i32::MAX;
                        self.max_ring = i32::MAX - 1;
                        return None;
                    }
                    self.ring += 1;
                }
                continue;
            }

            let (i, j) = (self.ring, self.j);
            let step = self.step;
            self.step += 1;
            // Odd steps mirror the even step before them; at j == 0 the
            // mirror is the same tile.
            if step % 2 == 1 && j == 0 {
                continue;
            }
            let offset = match step {
                0 => TilePos::new(-j, -i),
                1 => TilePos::new(j, -i),
                2 => TilePos::new(i, -j),
                3 => TilePos::new(i, j),
                4 => TilePos::new(j, i),
                5 => TilePos::new(-j, i),
                6 => TilePos::new(-i, j),
                _ => TilePos::new(-i, -j),
            };
            return Some(offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use proptest::prelude::*;

    fn t(x: i32, y: i32) -> TilePos {
        TilePos::new(x, y)
    }

    #[test]
    fn ring_zero_is_the_centre() {
        let all: Vec<_> = SpiralScan::new(0, 0).collect();
        assert_eq!(all, vec![TilePos::ZERO; 4]);
    }

    #[test]
    fn ring_one_full_order() {
        let all: Vec<_> = SpiralScan::new(1, 1).collect();
        assert_eq!(
            all,
            vec![
                t(0, -1),
                t(1, 0),
                t(0, 1),
                t(-1, 0),
                t(-1, -1),
                t(1, -1),
                t(1, -1),
                t(1, 1),
                t(1, 1),
                t(-1, 1),
                t(-1, 1),
                t(-1, -1),
            ]
        );
    }

    #[test]
    fn ring_two_starts_with_edge_midpoints() {
        let first: Vec<_> = SpiralScan::new(2, 2).take(8).collect();
        assert_eq!(
            first,
            vec![
                t(0, -2),
                t(2, 0),
                t(0, 2),
                t(-2, 0),
                t(-1, -2),
                t(1, -2),
                t(2, -1),
                t(2, 1),
            ]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        assert_eq!(SpiralScan::new(3, 2).count(), 0);
    }

    #[test]
    fn exhausted_scan_stays_exhausted() {
        let mut scan = SpiralScan::new(1, 1);
        for _ in scan.by_ref() {}
        assert_eq!(scan.next(), None);
        assert_eq!(scan.next(), None);
    }

    #[test]
    fn rings_are_scanned_in_order() {
        let rings: Vec<u32> = SpiralScan::new(1, 3)
            .map(|o| o.chebyshev_distance(TilePos::ZERO))
            .collect();
        assert!(rings.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(rings.first(), Some(&1));
        assert_eq!(rings.last(), Some(&3));
    }

    proptest! {
        #[test]
        fn covers_every_ring_tile_exactly_as_a_set(min in 0u32..5, extra in 0u32..4) {
            let max = min + extra;
            let seen: IndexSet<TilePos> = SpiralScan::new(min, max).collect();
            let mut expected = 0usize;
            for ring in min..=max {
                expected += if ring == 0 { 1 } else { 8 * ring as usize };
            }
            prop_assert_eq!(seen.len(), expected);
            for offset in &seen {
                let d = offset.chebyshev_distance(TilePos::ZERO);
                prop_assert!(d >= min && d <= max);
            }
        }
    }
}
