//! Farm orchestration for flexwater.
//!
//! Provides [`SprinklerFarm`], which owns a soil grid and the sprinklers
//! placed on it, computes each sprinkler's coverage with the flexible
//! allocator, and commits the water one sprinkler at a time. Power and
//! coverage can be overridden per sprinkler through the
//! [`ProviderRegistry`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod farm;
pub mod metrics;
pub mod registry;

pub use config::{ConfigError, FlexConfig};
pub use error::FarmError;
pub use farm::{Activation, SprinklerFarm};
pub use metrics::ActivationMetrics;
pub use registry::{CoverageProvider, PowerProvider, ProviderRegistry};
