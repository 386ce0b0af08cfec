//! Core types and traits for the flexwater sprinkler allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: tile
//! coordinates, soil classification, sprinkler layouts, balance modes,
//! error types, and the [`SoilMap`] grid contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod info;
pub mod layout;
pub mod soil;
pub mod tile;
pub mod traits;

pub use error::ParseBalanceModeError;
pub use info::{BalanceMode, SprinklerInfo};
pub use layout::Layout;
pub use soil::SoilType;
pub use tile::TilePos;
pub use traits::SoilMap;
