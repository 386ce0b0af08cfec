//! Flexwater: budgeted flood-fill sprinkler coverage for tile-based farms.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! flexwater sub-crates. For most users, adding `flexwater` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use flexwater::prelude::*;
//!
//! // A 5×5 field with one tier-1 sprinkler (power 4) in the middle.
//! let ascii = "
//!     .....
//!     .....
//!     ..S..
//!     .....
//!     .....
//! ";
//! let mut farm = SprinklerFarm::from_ascii(ascii, FlexConfig::default(), 1).unwrap();
//! let activation = farm.activate_all();
//!
//! let (position, coverage) = &activation.coverages[0];
//! assert_eq!(*position, TilePos::new(2, 2));
//! assert_eq!(coverage.len(), 4);
//! assert!(position.neighbors().iter().all(|&tile| coverage.contains(tile)));
//! assert_eq!(farm.grid().get(TilePos::new(2, 1)), SoilType::Wet);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `flexwater-core` | Tiles, soil, layouts, sprinkler info, the `SoilMap` trait |
//! | [`grid`] | `flexwater-grid` | `FarmGrid` soil storage and the `CostGrid` scratch array |
//! | [`behavior`] | `flexwater-behavior` | Coverage strategies and the flexible allocator |
//! | [`engine`] | `flexwater-engine` | Farm orchestration, config and providers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`flexwater-core`).
///
/// Contains [`types::TilePos`], [`types::SoilType`], [`types::Layout`],
/// [`types::SprinklerInfo`] and the [`types::SoilMap`] trait every
/// allocator reads soil through.
pub use flexwater_core as types;

/// Soil storage (`flexwater-grid`).
///
/// [`grid::FarmGrid`] is the mutable soil map; [`grid::CostGrid`] is the
/// per-allocation scratch array.
pub use flexwater_grid as grid;

/// Coverage strategies (`flexwater-behavior`).
///
/// The [`behavior::SprinklerBehavior`] trait is the extension point.
/// [`behavior::FlexibleBehavior`] is the budgeted flood-fill allocator.
pub use flexwater_behavior as behavior;

/// Farm orchestration (`flexwater-engine`).
///
/// [`engine::SprinklerFarm`] places sprinklers, runs activation passes and
/// answers range queries.
pub use flexwater_engine as engine;

/// Common imports for typical flexwater usage.
///
/// ```rust
/// use flexwater::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use flexwater_core::{BalanceMode, Layout, SoilMap, SoilType, SprinklerInfo, TilePos};

    // Grid
    pub use flexwater_grid::FarmGrid;

    // Behaviors
    pub use flexwater_behavior::{
        Coverage, DiamondSpreadRange, FixedLayout, FlexibleBehavior, NoCoverage,
        SprinklerBehavior, SpreadRange,
    };

    // Engine
    pub use flexwater_engine::{
        Activation, ActivationMetrics, FarmError, FlexConfig, SprinklerFarm,
    };
}
