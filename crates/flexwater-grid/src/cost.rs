//! Per-call flood-fill cost storage.
//!
//! [`CostGrid`] covers a rectangular window centred on a sprinkler. It is
//! created at the start of one allocation and dropped at the end; nothing
//! about it outlives the call.

use flexwater_core::TilePos;
use indexmap::IndexMap;

/// Windows with more cells than this are stored sparsely.
pub const DENSE_CELL_LIMIT: u64 = 1 << 20;

#[derive(Clone, Debug)]
enum Cells {
    /// Row-major array over the whole window, `stride = 2 * half_width + 1`.
    Dense { stride: usize, costs: Vec<u32> },
    /// Only tiles that were ever relaxed.
    Sparse(IndexMap<TilePos, u32>),
}

/// BFS cost storage addressed by absolute tile within a window.
///
/// The window spans `centre ± half_width` horizontally and
/// `centre ± half_height` vertically. Every cell starts at
/// [`CostGrid::UNVISITED`]. Windows up to [`DENSE_CELL_LIMIT`] cells are
/// a dense array; larger ones (including windows whose cell count does
/// not fit in `u64`) fall back to a map holding visited tiles only, so
/// memory follows what the search touches rather than the window area.
///
/// Accessors are bounds-checked: touching a tile outside the window is a
/// logic error in the caller, asserted in debug builds and reported as
/// `None` in release builds.
#[derive(Clone, Debug)]
pub struct CostGrid {
    centre: TilePos,
    half_width: u32,
    half_height: u32,
    cells: Cells,
}

impl CostGrid {
    /// Cost of a tile no search has reached.
    pub const UNVISITED: u32 = u32::MAX;

    /// Allocate a window around `centre`, all cells unvisited.
    pub fn new(centre: TilePos, half_width: u32, half_height: u32) -> Self {
        let cells = match Self::area(half_width, half_height) {
            Some(area) if area <= DENSE_CELL_LIMIT => {
                let stride = 2 * half_width as usize + 1;
                Cells::Dense {
                    stride,
                    costs: vec![Self::UNVISITED; area as usize],
                }
            }
            _ => Cells::Sparse(IndexMap::new()),
        };
        Self {
            centre,
            half_width,
            half_height,
            cells,
        }
    }

    /// Cell count of a window, `None` on `u64` overflow.
    fn area(half_width: u32, half_height: u32) -> Option<u64> {
        let width = u64::from(half_width).checked_mul(2)?.checked_add(1)?;
        let height = u64::from(half_height).checked_mul(2)?.checked_add(1)?;
        width.checked_mul(height)
    }

    /// The tile the window is centred on.
    pub fn centre(&self) -> TilePos {
        self.centre
    }

    /// Horizontal reach of the window from its centre.
    pub fn half_width(&self) -> u32 {
        self.half_width
    }

    /// Vertical reach of the window from its centre.
    pub fn half_height(&self) -> u32 {
        self.half_height
    }

    /// `true` if `tile` lies inside the window.
    pub fn contains(&self, tile: TilePos) -> bool {
        tile.x.abs_diff(self.centre.x) <= self.half_width
            && tile.y.abs_diff(self.centre.y) <= self.half_height
    }

    /// `true` if the window is backed by a dense array.
    pub fn is_dense(&self) -> bool {
        matches!(self.cells, Cells::Dense { .. })
    }

    /// Number of cells in the window, saturating at `u64::MAX`.
    pub fn window_cells(&self) -> u64 {
        Self::area(self.half_width, self.half_height).unwrap_or(u64::MAX)
    }

    /// `(column, row)` of a tile inside the window.
    fn local(&self, tile: TilePos) -> (usize, usize) {
        let col = i64::from(tile.x) - i64::from(self.centre.x) + i64::from(self.half_width);
        let row = i64::from(tile.y) - i64::from(self.centre.y) + i64::from(self.half_height);
        (col as usize, row as usize)
    }

    /// Cost recorded for `tile`, [`UNVISITED`](Self::UNVISITED) if none.
    ///
    /// Returns `None` if `tile` is outside the window.
    pub fn get(&self, tile: TilePos) -> Option<u32> {
        let inside = self.contains(tile);
        debug_assert!(inside, "cost lookup at {tile} outside window");
        if !inside {
            return None;
        }
        let (col, row) = self.local(tile);
        Some(match &self.cells {
            Cells::Dense { stride, costs } => costs[row * stride + col],
            Cells::Sparse(costs) => costs.get(&tile).copied().unwrap_or(Self::UNVISITED),
        })
    }

    /// Record `cost` for `tile` if it is lower than what is stored.
    ///
    /// Returns the cost stored afterwards, or `None` if `tile` is outside
    /// the window.
    pub fn relax(&mut self, tile: TilePos, cost: u32) -> Option<u32> {
        let inside = self.contains(tile);
        debug_assert!(inside, "cost update at {tile} outside window");
        if !inside {
            return None;
        }
        let (col, row) = self.local(tile);
        let slot = match &mut self.cells {
            Cells::Dense { stride, costs } => &mut costs[row * *stride + col],
            Cells::Sparse(costs) => costs.entry(tile).or_insert(Self::UNVISITED),
        };
        *slot = (*slot).min(cost);
        Some(*slot)
    }

    /// Memory held by the cost storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        match &self.cells {
            Cells::Dense { costs, .. } => costs.len() * std::mem::size_of::<u32>(),
            Cells::Sparse(costs) => costs.capacity() * std::mem::size_of::<(TilePos, u32)>(),
        }
    }
}
