//! Errors raised by farm orchestration.

use std::error::Error;
use std::fmt;

use flexwater_core::{SoilType, TilePos};
use flexwater_grid::GridError;

use crate::config::ConfigError;

/// Errors from [`SprinklerFarm`](crate::SprinklerFarm) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FarmError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The farm description could not be parsed.
    Grid(GridError),
    /// A sprinkler cannot be placed on this tile.
    Occupied {
        /// Where placement was attempted.
        tile: TilePos,
        /// What the tile holds.
        soil: SoilType,
    },
    /// No registered sprinkler at this tile.
    NoSprinkler {
        /// The tile that was queried.
        tile: TilePos,
    },
    /// The tier is not configured.
    UnknownTier {
        /// The requested tier.
        tier: u32,
        /// Number of configured tiers.
        tiers: u32,
    },
}

impl fmt::Display for FarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Occupied { tile, soil } => {
                write!(f, "cannot place a sprinkler at {tile}: tile is {soil:?}")
            }
            Self::NoSprinkler { tile } => write!(f, "no sprinkler at {tile}"),
            Self::UnknownTier { tier, tiers } => {
                write!(f, "sprinkler tier {tier} is not in 1..={tiers}")
            }
        }
    }
}

impl Error for FarmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for FarmError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for FarmError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
