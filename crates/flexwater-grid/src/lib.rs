//! Grid storage for flexwater.
//!
//! This crate provides the concrete [`SoilMap`](flexwater_core::SoilMap)
//! used by the engine and tests, plus the bounded scratch array the
//! allocator's flood fill runs on.
//!
//! # Types
//!
//! - [`FarmGrid`]: sparse, mutable soil map with ASCII construction and
//!   watering commits
//! - [`CostGrid`]: per-call cost window addressed relative to a centre
//!   tile, dense up to [`DENSE_CELL_LIMIT`] cells and sparse beyond

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cost;
pub mod error;
pub mod farm;

#[cfg(test)]
pub(crate) mod compliance;

pub use cost::{CostGrid, DENSE_CELL_LIMIT};
pub use error::GridError;
pub use farm::FarmGrid;
