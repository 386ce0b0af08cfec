//! Sprinkler placement, activation, and coverage queries.
//!
//! [`SprinklerFarm`] owns a [`FarmGrid`] and the sprinklers placed on it.
//! Each sprinkler's coverage is computed independently by the configured
//! [`FlexibleBehavior`]; activation commits the result into the grid
//! before the next sprinkler runs, so later sprinklers see earlier ones'
//! water.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`. Queries that simulate an
//! activation pass ([`all_tiles_in_range_of_sprinklers`]) run on a clone
//! of the grid and leave the farm untouched.
//!
//! [`all_tiles_in_range_of_sprinklers`]: SprinklerFarm::all_tiles_in_range_of_sprinklers

use std::time::Instant;

use flexwater_behavior::{
    max_range, Coverage, DiamondSpreadRange, FixedLayout, FlexibleBehavior, SpreadRange,
};
use flexwater_core::{Layout, SoilType, SprinklerInfo, TilePos};
use flexwater_grid::FarmGrid;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::config::FlexConfig;
use crate::error::FarmError;
use crate::metrics::ActivationMetrics;
use crate::registry::ProviderRegistry;

// ── Activation ──────────────────────────────────────────────────

/// Result of [`SprinklerFarm::activate_all()`].
#[derive(Clone, Debug, Default)]
pub struct Activation {
    /// Each sprinkler's coverage, in activation order.
    pub coverages: Vec<(TilePos, Coverage)>,
    /// Counters for the pass.
    pub metrics: ActivationMetrics,
}

// ── SprinklerFarm ───────────────────────────────────────────────

/// A farm with sprinklers on it.
#[derive(Debug)]
pub struct SprinklerFarm {
    grid: FarmGrid,
    /// Tier of every placed sprinkler, in placement order.
    sprinklers: IndexMap<TilePos, u32>,
    config: FlexConfig,
    providers: ProviderRegistry,
    behavior: FlexibleBehavior,
    spread: DiamondSpreadRange,
}

impl SprinklerFarm {
    /// Create a farm over `grid`.
    ///
    /// Sprinkler tiles already in the grid are obstacles owned by someone
    /// else until [`adopt_sprinklers`](Self::adopt_sprinklers) registers
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError::Config`] if `config` fails validation.
    pub fn new(grid: FarmGrid, config: FlexConfig) -> Result<Self, FarmError> {
        config.validate()?;
        let spread = DiamondSpreadRange::new(config.range_margin);
        let builder = FlexibleBehavior::builder()
            .balance_mode(config.balance_mode)
            .spread_range(spread);
        let behavior = if config.seed_with_unmodified_coverage {
            builder.upstream(FixedLayout).build()
        } else {
            builder.build()
        };
        debug!(
            tiles = grid.len(),
            balance_mode = %config.balance_mode,
            "farm created"
        );
        Ok(Self {
            grid,
            sprinklers: IndexMap::new(),
            config,
            providers: ProviderRegistry::new(),
            behavior,
            spread,
        })
    }

    /// Parse an ASCII farm (see [`FarmGrid::from_ascii`]) and adopt every
    /// sprinkler in it at `tier`.
    ///
    /// # Errors
    ///
    /// [`FarmError::Grid`] for malformed text, [`FarmError::Config`] for
    /// an invalid config, [`FarmError::UnknownTier`] for a bad tier.
    pub fn from_ascii(ascii: &str, config: FlexConfig, tier: u32) -> Result<Self, FarmError> {
        let mut farm = Self::new(FarmGrid::from_ascii(ascii)?, config)?;
        farm.adopt_sprinklers(tier)?;
        Ok(farm)
    }

    /// The soil.
    pub fn grid(&self) -> &FarmGrid {
        &self.grid
    }

    /// The validated configuration.
    pub fn config(&self) -> &FlexConfig {
        &self.config
    }

    /// The allocator every sprinkler uses.
    pub fn behavior(&self) -> &FlexibleBehavior {
        &self.behavior
    }

    /// The provider registry.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Add a power provider. See [`ProviderRegistry`].
    pub fn register_power_provider(
        &mut self,
        provider: impl Fn(TilePos, u32) -> Option<i32> + Send + Sync + 'static,
    ) {
        self.providers.register_power_provider(provider);
    }

    /// Add a coverage provider. See [`ProviderRegistry`].
    pub fn register_coverage_provider(
        &mut self,
        provider: impl Fn(TilePos, u32) -> Option<Layout> + Send + Sync + 'static,
    ) {
        self.providers.register_coverage_provider(provider);
    }

    // ── Placement ───────────────────────────────────────────────

    fn check_tier(&self, tier: u32) -> Result<(), FarmError> {
        if self.config.power_for_tier(tier).is_none() {
            return Err(FarmError::UnknownTier {
                tier,
                tiers: self.config.tier_count(),
            });
        }
        Ok(())
    }

    /// Place a sprinkler of `tier` on a soil tile.
    ///
    /// # Errors
    ///
    /// [`FarmError::UnknownTier`] if the tier is not configured,
    /// [`FarmError::Occupied`] if the tile is not dry or wet soil.
    pub fn place_sprinkler(&mut self, tile: TilePos, tier: u32) -> Result<(), FarmError> {
        self.check_tier(tier)?;
        let soil = self.grid.get(tile);
        if !soil.is_waterable() {
            return Err(FarmError::Occupied { tile, soil });
        }
        self.grid.set(tile, SoilType::Sprinkler);
        self.sprinklers.insert(tile, tier);
        debug!(%tile, tier, "sprinkler placed");
        Ok(())
    }

    /// Register every unregistered sprinkler tile in the grid at `tier`.
    /// Returns how many were adopted.
    ///
    /// # Errors
    ///
    /// [`FarmError::UnknownTier`] if the tier is not configured.
    pub fn adopt_sprinklers(&mut self, tier: u32) -> Result<usize, FarmError> {
        self.check_tier(tier)?;
        let found: Vec<TilePos> = self
            .grid
            .sprinklers()
            .filter(|tile| !self.sprinklers.contains_key(tile))
            .collect();
        for &tile in &found {
            self.sprinklers.insert(tile, tier);
        }
        Ok(found.len())
    }

    /// Remove the sprinkler at `tile`, leaving dry soil. Returns its tier.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn remove_sprinkler(&mut self, tile: TilePos) -> Result<u32, FarmError> {
        let tier = self
            .sprinklers
            .shift_remove(&tile)
            .ok_or(FarmError::NoSprinkler { tile })?;
        self.grid.set(tile, SoilType::Dry);
        debug!(%tile, tier, "sprinkler removed");
        Ok(tier)
    }

    /// Registered sprinklers and their tiers, in placement order.
    pub fn sprinklers(&self) -> impl Iterator<Item = (TilePos, u32)> + '_ {
        self.sprinklers.iter().map(|(&tile, &tier)| (tile, tier))
    }

    /// Number of registered sprinklers.
    pub fn sprinkler_count(&self) -> usize {
        self.sprinklers.len()
    }

    /// Start a new day: every wet tile dries out. Returns how many did.
    pub fn new_day(&mut self) -> usize {
        self.grid.dry_all()
    }

    // ── Per-sprinkler properties ────────────────────────────────

    fn tier(&self, tile: TilePos) -> Result<u32, FarmError> {
        self.sprinklers
            .get(&tile)
            .copied()
            .ok_or(FarmError::NoSprinkler { tile })
    }

    fn info_for(&self, tile: TilePos, tier: u32) -> SprinklerInfo {
        let power = self
            .providers
            .power(tile, tier)
            .or_else(|| self.config.power_for_tier(tier))
            .unwrap_or_default();
        let layout = self
            .providers
            .coverage(tile, tier)
            .unwrap_or_else(|| Layout::vanilla(tier));
        SprinklerInfo::new(layout, power)
    }

    /// Power of the sprinkler at `tile` after provider overrides.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn sprinkler_power(&self, tile: TilePos) -> Result<i32, FarmError> {
        Ok(self.sprinkler_info(tile)?.power)
    }

    /// Relative coverage the sprinkler at `tile` would have without the
    /// allocator.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn unmodified_coverage(&self, tile: TilePos) -> Result<Layout, FarmError> {
        Ok(self.sprinkler_info(tile)?.layout)
    }

    /// Everything the allocator is told about the sprinkler at `tile`.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn sprinkler_info(&self, tile: TilePos) -> Result<SprinklerInfo, FarmError> {
        let tier = self.tier(tile)?;
        Ok(self.info_for(tile, tier))
    }

    /// Flood-fill depth for `power` evenly spread. Negative powers count
    /// as zero.
    pub fn spread_range(&self, power: i32) -> u32 {
        self.spread.spread_range(power.max(0).unsigned_abs())
    }

    /// How far `layout` reaches in a single direction.
    pub fn focused_range(&self, layout: &Layout) -> u32 {
        layout.focused_range()
    }

    /// The larger of the spread and focused ranges of the sprinkler at
    /// `tile`.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn max_range(&self, tile: TilePos) -> Result<u32, FarmError> {
        let info = self.sprinkler_info(tile)?;
        Ok(max_range(&self.spread, info.budget(), &info.layout))
    }

    // ── Coverage ────────────────────────────────────────────────

    /// Absolute coverage the sprinkler at `tile` would get right now,
    /// without committing it.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn coverage(&self, tile: TilePos) -> Result<Coverage, FarmError> {
        let info = self.sprinkler_info(tile)?;
        Ok(self.behavior.allocate(&self.grid, tile, &info))
    }

    /// Coverage of the sprinkler at `tile` as offsets from it, without
    /// committing.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn modified_coverage(&self, tile: TilePos) -> Result<IndexSet<TilePos>, FarmError> {
        Ok(self.coverage(tile)?.relative_to(tile))
    }

    /// Water the tiles of the sprinkler at `tile`.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn activate_sprinkler(&mut self, tile: TilePos) -> Result<Coverage, FarmError> {
        let coverage = self.coverage(tile)?;
        let watered = self.grid.water_all(coverage.tiles().iter().copied());
        debug!(%tile, covered = coverage.len(), watered, "sprinkler activated");
        Ok(coverage)
    }

    /// Activate every sprinkler in placement order, committing each
    /// sprinkler's water before the next one runs.
    pub fn activate_all(&mut self) -> Activation {
        let started = Instant::now();
        let mut grid = std::mem::take(&mut self.grid);
        let activation = self.run_pass(&mut grid, started);
        self.grid = grid;
        debug!(
            sprinklers = activation.metrics.sprinklers,
            watered = activation.metrics.tiles_watered,
            under_delivered = activation.metrics.under_delivered,
            elapsed_us = activation.metrics.elapsed_us,
            "activation pass complete"
        );
        activation
    }

    fn run_pass(&self, grid: &mut FarmGrid, started: Instant) -> Activation {
        let mut activation = Activation::default();
        for (&tile, &tier) in &self.sprinklers {
            let info = self.info_for(tile, tier);
            let coverage = self.behavior.allocate(&*grid, tile, &info);
            let metrics = &mut activation.metrics;
            metrics.sprinklers += 1;
            metrics.tiles_covered += coverage.len();
            metrics.tiles_watered += grid.water_all(coverage.tiles().iter().copied());
            metrics.overshoot += u64::from(coverage.overshoot());
            if coverage.is_under_delivered() {
                metrics.under_delivered += 1;
            }
            activation.coverages.push((tile, coverage));
        }
        activation.metrics.elapsed_us = started.elapsed().as_micros() as u64;
        activation
    }

    /// `true` if the sprinkler at `sprinkler` would water `tile` right now.
    ///
    /// # Errors
    ///
    /// [`FarmError::NoSprinkler`] if none is registered there.
    pub fn is_tile_in_range(&self, sprinkler: TilePos, tile: TilePos) -> Result<bool, FarmError> {
        Ok(self.coverage(sprinkler)?.contains(tile))
    }

    /// Every tile an activation pass would cover, computed on a copy of
    /// the grid.
    pub fn all_tiles_in_range_of_sprinklers(&self) -> IndexSet<TilePos> {
        let mut scratch = self.grid.clone();
        self.run_pass(&mut scratch, Instant::now())
            .coverages
            .into_iter()
            .flat_map(|(_, coverage)| coverage.into_tiles())
            .collect()
    }

    /// `true` if an activation pass would cover `tile`.
    pub fn is_tile_in_range_of_any_sprinkler(&self, tile: TilePos) -> bool {
        self.all_tiles_in_range_of_sprinklers().contains(&tile)
    }
}
