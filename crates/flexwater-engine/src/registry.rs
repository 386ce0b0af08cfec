//! Host-supplied overrides for sprinkler power and coverage.

use std::fmt;

use flexwater_core::{Layout, TilePos};

/// Overrides the power of a sprinkler: `(position, tier) -> power`.
/// Returning `None` defers to earlier providers and then to the config.
pub type PowerProvider = Box<dyn Fn(TilePos, u32) -> Option<i32> + Send + Sync>;

/// Overrides the unmodified coverage of a sprinkler:
/// `(position, tier) -> relative layout`. Returning `None` defers to
/// earlier providers and then to the tier's vanilla layout.
pub type CoverageProvider = Box<dyn Fn(TilePos, u32) -> Option<Layout> + Send + Sync>;

/// Ordered provider lists. The most recently registered provider that
/// answers wins.
#[derive(Default)]
pub struct ProviderRegistry {
    power: Vec<PowerProvider>,
    coverage: Vec<CoverageProvider>,
}

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a power provider.
    pub fn register_power_provider(
        &mut self,
        provider: impl Fn(TilePos, u32) -> Option<i32> + Send + Sync + 'static,
    ) {
        self.power.push(Box::new(provider));
    }

    /// Add a coverage provider.
    pub fn register_coverage_provider(
        &mut self,
        provider: impl Fn(TilePos, u32) -> Option<Layout> + Send + Sync + 'static,
    ) {
        self.coverage.push(Box::new(provider));
    }

    /// Power override for the sprinkler, if any provider answers.
    pub fn power(&self, position: TilePos, tier: u32) -> Option<i32> {
        self.power
            .iter()
            .rev()
            .find_map(|provider| provider(position, tier))
    }

    /// Coverage override for the sprinkler, if any provider answers.
    pub fn coverage(&self, position: TilePos, tier: u32) -> Option<Layout> {
        self.coverage
            .iter()
            .rev()
            .find_map(|provider| provider(position, tier))
    }

    /// Number of registered power providers.
    pub fn power_provider_count(&self) -> usize {
        self.power.len()
    }

    /// Number of registered coverage providers.
    pub fn coverage_provider_count(&self) -> usize {
        self.coverage.len()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("power", &self.power.len())
            .field("coverage", &self.coverage.len())
            .finish()
    }
}
