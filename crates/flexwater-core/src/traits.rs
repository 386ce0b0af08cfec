//! The read-only grid contract.

use crate::soil::SoilType;
use crate::tile::TilePos;

/// Read-only lookup from a tile to its [`SoilType`].
///
/// Implementations must answer for any coordinate, including ones outside
/// whatever bounds the grid has; out-of-range tiles report
/// [`SoilType::NonSoil`]. Allocators treat every call as a fresh snapshot.
pub trait SoilMap {
    /// Classify a single tile.
    fn soil(&self, tile: TilePos) -> SoilType;
}

impl<F> SoilMap for F
where
    F: Fn(TilePos) -> SoilType,
{
    fn soil(&self, tile: TilePos) -> SoilType {
        self(tile)
    }
}
