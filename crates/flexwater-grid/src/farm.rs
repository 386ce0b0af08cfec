//! Sparse, mutable farm soil map.

use crate::error::GridError;
use flexwater_core::{SoilMap, SoilType, TilePos};
use indexmap::IndexMap;

/// A farm's soil state, keyed by tile.
///
/// Only tiles that take part in the soil system are stored; every other
/// coordinate reads as [`SoilType::NonSoil`], so the grid satisfies the
/// [`SoilMap`] contract for arbitrary queries. Storage keeps insertion
/// order, which makes iteration deterministic.
///
/// # ASCII form
///
/// [`from_ascii`](Self::from_ascii) reads one row per line, `x` growing
/// to the right and `y` downwards from `(0, 0)`:
///
/// | Glyph | Soil |
/// |-------|------|
/// | `.` | [`Dry`](SoilType::Dry) |
/// | `~` | [`Wet`](SoilType::Wet) |
/// | `#` | [`NonWaterable`](SoilType::NonWaterable) |
/// | `S` | [`Sprinkler`](SoilType::Sprinkler) |
/// | `x` | [`NonSoil`](SoilType::NonSoil) |
///
/// # Examples
///
/// ```
/// use flexwater_core::{SoilMap, SoilType, TilePos};
/// use flexwater_grid::FarmGrid;
///
/// let grid = FarmGrid::from_ascii("
///     .S.
///     #~x
/// ").unwrap();
/// assert_eq!(grid.soil(TilePos::new(1, 0)), SoilType::Sprinkler);
/// assert_eq!(grid.soil(TilePos::new(1, 1)), SoilType::Wet);
/// assert_eq!(grid.soil(TilePos::new(50, 50)), SoilType::NonSoil);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FarmGrid {
    tiles: IndexMap<TilePos, SoilType>,
}

impl FarmGrid {
    /// An empty grid: every tile is non-soil.
    pub fn new() -> Self {
        Self::default()
    }

    /// A `width` x `height` rectangle of `soil` with its top-left corner
    /// at `(0, 0)`.
    pub fn filled(width: u32, height: u32, soil: SoilType) -> Self {
        let mut grid = Self::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                grid.set(TilePos::new(x, y), soil);
            }
        }
        grid
    }

    /// Parse the ASCII form described on the type. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        Self::from_rows(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Parse rows of glyphs without trimming; row `i` becomes `y = i`.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Self::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, glyph) in row.as_ref().chars().enumerate() {
                let tile = TilePos::new(x as i32, y as i32);
                let soil = match glyph {
                    '.' => SoilType::Dry,
                    '~' => SoilType::Wet,
                    '#' => SoilType::NonWaterable,
                    'S' => SoilType::Sprinkler,
                    'x' => SoilType::NonSoil,
                    _ => return Err(GridError::UnknownGlyph { glyph, tile }),
                };
                grid.set(tile, soil);
            }
        }
        Ok(grid)
    }

    /// Classification of `tile`.
    pub fn get(&self, tile: TilePos) -> SoilType {
        self.tiles.get(&tile).copied().unwrap_or(SoilType::NonSoil)
    }

    /// Set the classification of `tile`, returning the previous one.
    /// Setting [`SoilType::NonSoil`] removes the tile from storage.
    pub fn set(&mut self, tile: TilePos, soil: SoilType) -> SoilType {
        let previous = if soil == SoilType::NonSoil {
            self.tiles.shift_remove(&tile)
        } else {
            self.tiles.insert(tile, soil)
        };
        previous.unwrap_or(SoilType::NonSoil)
    }

    /// Mark a dry tile wet. Returns `true` if the tile changed.
    pub fn water(&mut self, tile: TilePos) -> bool {
        match self.tiles.get_mut(&tile) {
            Some(soil) if *soil == SoilType::Dry => {
                *soil = SoilType::Wet;
                true
            }
            _ => false,
        }
    }

    /// Water every tile yielded by `tiles`; returns how many changed.
    pub fn water_all(&mut self, tiles: impl IntoIterator<Item = TilePos>) -> usize {
        tiles.into_iter().filter(|&tile| self.water(tile)).count()
    }

    /// Dry out every wet tile (a new day); returns how many changed.
    pub fn dry_all(&mut self) -> usize {
        let mut changed = 0;
        for soil in self.tiles.values_mut() {
            if *soil == SoilType::Wet {
                *soil = SoilType::Dry;
                changed += 1;
            }
        }
        changed
    }

    /// Number of stored (non-`NonSoil`) tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` if no tile is part of the soil system.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Stored tiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TilePos, SoilType)> + '_ {
        self.tiles.iter().map(|(&tile, &soil)| (tile, soil))
    }

    /// Number of stored tiles with the given classification.
    pub fn count(&self, soil: SoilType) -> usize {
        self.tiles.values().filter(|&&s| s == soil).count()
    }

    /// Tiles classified as sprinklers, in insertion order.
    pub fn sprinklers(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.iter()
            .filter(|&(_, soil)| soil == SoilType::Sprinkler)
            .map(|(tile, _)| tile)
    }
}

impl SoilMap for FarmGrid {
    fn soil(&self, tile: TilePos) -> SoilType {
        self.get(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn t(x: i32, y: i32) -> TilePos {
        TilePos::new(x, y)
    }

    #[test]
    fn parses_all_glyphs() {
        let grid = FarmGrid::from_rows([".~#Sx"]).unwrap();
        assert_eq!(grid.get(t(0, 0)), SoilType::Dry);
        assert_eq!(grid.get(t(1, 0)), SoilType::Wet);
        assert_eq!(grid.get(t(2, 0)), SoilType::NonWaterable);
        assert_eq!(grid.get(t(3, 0)), SoilType::Sprinkler);
        assert_eq!(grid.get(t(4, 0)), SoilType::NonSoil);
        // NonSoil is never stored.
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn rejects_unknown_glyph() {
        let err = FarmGrid::from_ascii("..\n.?").unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownGlyph {
                glyph: '?',
                tile: t(1, 1)
            }
        );
    }

    #[test]
    fn ascii_ignores_indentation_and_blank_lines() {
        let grid = FarmGrid::from_ascii(
            "

            ..
            .S
            ",
        )
        .unwrap();
        assert_eq!(grid.get(t(1, 1)), SoilType::Sprinkler);
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn water_only_changes_dry_tiles() {
        let mut grid = FarmGrid::from_rows([".~#S"]).unwrap();
        assert!(grid.water(t(0, 0)));
        assert!(!grid.water(t(0, 0)));
        assert!(!grid.water(t(1, 0)));
        assert!(!grid.water(t(2, 0)));
        assert!(!grid.water(t(3, 0)));
        assert!(!grid.water(t(9, 9)));
        assert_eq!(grid.count(SoilType::Wet), 2);
    }

    #[test]
    fn water_all_then_dry_all() {
        let mut grid = FarmGrid::filled(3, 3, SoilType::Dry);
        assert_eq!(grid.water_all([t(0, 0), t(1, 1), t(1, 1), t(8, 8)]), 2);
        assert_eq!(grid.dry_all(), 2);
        assert_eq!(grid.count(SoilType::Dry), 9);
    }

    #[test]
    fn set_non_soil_removes_tile() {
        let mut grid = FarmGrid::filled(2, 1, SoilType::Dry);
        assert_eq!(grid.set(t(0, 0), SoilType::NonSoil), SoilType::Dry);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.set(t(5, 5), SoilType::Wet), SoilType::NonSoil);
    }

    #[test]
    fn sprinklers_in_insertion_order() {
        let grid = FarmGrid::from_ascii("S.S\n..S").unwrap();
        let found: Vec<_> = grid.sprinklers().collect();
        assert_eq!(found, vec![t(0, 0), t(2, 0), t(2, 1)]);
    }

    #[test]
    fn compliance_farm_grid() {
        let grid = FarmGrid::from_ascii(".~#S\n....").unwrap();
        compliance::run_full_compliance(&grid);
    }

    #[test]
    fn compliance_empty_grid() {
        compliance::run_full_compliance(&FarmGrid::new());
    }
}
