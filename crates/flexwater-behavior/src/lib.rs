//! Sprinkler coverage strategies for flexwater.
//!
//! A [`SprinklerBehavior`] turns a sprinkler position and its
//! [`SprinklerInfo`](flexwater_core::SprinklerInfo) into the set of tiles
//! it waters. Strategies compose: the allocator takes another strategy as
//! its upstream and builds on whatever that one returns.
//!
//! # Strategies
//!
//! - [`NoCoverage`]: waters nothing; the default upstream
//! - [`FixedLayout`]: the unmodified layout translated to the sprinkler
//! - [`FlexibleBehavior`]: budgeted flood fill over the actual soil,
//!   ranked away from neighbouring sprinklers, with a [`BalanceMode`]
//!   policy for ties
//!
//! [`BalanceMode`]: flexwater_core::BalanceMode

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod coverage;
pub mod flexible;
mod flood;
pub mod range;
mod rank;
pub mod spiral;

pub use behavior::{FixedLayout, NoCoverage, SprinklerBehavior};
pub use coverage::Coverage;
pub use flexible::{FlexibleBehavior, FlexibleBehaviorBuilder};
pub use range::{max_range, DiamondSpreadRange, SpreadRange};
pub use spiral::SpiralScan;
