//! Farm configuration, validation, and error types.
//!
//! [`FlexConfig`] is the input for constructing a
//! [`SprinklerFarm`](crate::SprinklerFarm).
//! [`validate()`](FlexConfig::validate) checks structural invariants; the
//! farm constructor calls it and refuses an invalid configuration.

use std::error::Error;
use std::fmt;

use flexwater_core::BalanceMode;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`FlexConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No sprinkler tiers configured.
    NoTiers,
    /// A tier was given a negative power.
    NegativeTierPower {
        /// The tier, 1-based.
        tier: u32,
        /// The configured power.
        power: i32,
    },
    /// A tier's power exceeds [`FlexConfig::MAX_TIER_POWER`].
    TierPowerTooLarge {
        /// The tier, 1-based.
        tier: u32,
        /// The configured power.
        power: i32,
    },
    /// `range_margin` exceeds [`FlexConfig::MAX_RANGE_MARGIN`].
    RangeMarginTooLarge {
        /// The configured margin.
        configured: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTiers => write!(f, "at least one sprinkler tier must be configured"),
            Self::NegativeTierPower { tier, power } => {
                write!(f, "tier {tier} power must be >= 0, got {power}")
            }
            Self::TierPowerTooLarge { tier, power } => write!(
                f,
                "tier {tier} power {power} exceeds maximum of {}",
                FlexConfig::MAX_TIER_POWER
            ),
            Self::RangeMarginTooLarge { configured } => write!(
                f,
                "range_margin {configured} exceeds maximum of {}",
                FlexConfig::MAX_RANGE_MARGIN
            ),
        }
    }
}

impl Error for ConfigError {}

// ── FlexConfig ─────────────────────────────────────────────────────

/// Configuration for a [`SprinklerFarm`](crate::SprinklerFarm).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlexConfig {
    /// How oversized tie groups are resolved. Default: relaxed.
    pub balance_mode: BalanceMode,
    /// Power of each sprinkler tier, tier 1 first. Default: `[4, 8, 24, 48]`.
    pub tier_powers: Vec<i32>,
    /// Extra flood-fill depth on top of the spread range. Default: 0.
    pub range_margin: u32,
    /// Seed every allocation with the sprinkler's unmodified layout.
    /// Default: false.
    pub seed_with_unmodified_coverage: bool,
}

impl Default for FlexConfig {
    fn default() -> Self {
        Self {
            balance_mode: BalanceMode::Relaxed,
            tier_powers: vec![4, 8, 24, 48],
            range_margin: 0,
            seed_with_unmodified_coverage: false,
        }
    }
}

impl FlexConfig {
    /// Largest accepted tier power.
    pub const MAX_TIER_POWER: i32 = 4096;

    /// Largest accepted `range_margin`.
    pub const MAX_RANGE_MARGIN: u32 = 64;

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoTiers`] if `tier_powers` is empty
    /// - [`ConfigError::NegativeTierPower`] for the first negative power
    /// - [`ConfigError::TierPowerTooLarge`] for the first power above
    ///   [`MAX_TIER_POWER`](Self::MAX_TIER_POWER)
    /// - [`ConfigError::RangeMarginTooLarge`] if `range_margin` is above
    ///   [`MAX_RANGE_MARGIN`](Self::MAX_RANGE_MARGIN)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tier_powers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        if let Some((index, &power)) = self
            .tier_powers
            .iter()
            .enumerate()
            .find(|(_, power)| **power < 0)
        {
            return Err(ConfigError::NegativeTierPower {
                tier: index as u32 + 1,
                power,
            });
        }
        if let Some((index, &power)) = self
            .tier_powers
            .iter()
            .enumerate()
            .find(|(_, power)| **power > Self::MAX_TIER_POWER)
        {
            return Err(ConfigError::TierPowerTooLarge {
                tier: index as u32 + 1,
                power,
            });
        }
        if self.range_margin > Self::MAX_RANGE_MARGIN {
            return Err(ConfigError::RangeMarginTooLarge {
                configured: self.range_margin,
            });
        }
        Ok(())
    }

    /// Number of configured tiers.
    pub fn tier_count(&self) -> u32 {
        self.tier_powers.len() as u32
    }

    /// Configured power of `tier` (1-based), if the tier exists.
    pub fn power_for_tier(&self, tier: u32) -> Option<i32> {
        let index = usize::try_from(tier.checked_sub(1)?).ok()?;
        self.tier_powers.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = FlexConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.balance_mode, BalanceMode::Relaxed);
        assert_eq!(config.tier_count(), 4);
    }

    #[test]
    fn rejects_empty_tiers() {
        let config = FlexConfig {
            tier_powers: Vec::new(),
            ..FlexConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoTiers));
    }

    #[test]
    fn rejects_negative_power() {
        let config = FlexConfig {
            tier_powers: vec![4, -1, -8],
            ..FlexConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeTierPower { tier: 2, power: -1 })
        );
    }

    #[test]
    fn rejects_oversized_power() {
        let config = FlexConfig {
            tier_powers: vec![4, FlexConfig::MAX_TIER_POWER, i32::MAX],
            ..FlexConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TierPowerTooLarge {
                tier: 3,
                power: i32::MAX
            })
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds maximum of 4096"));
    }

    #[test]
    fn rejects_huge_margin() {
        let config = FlexConfig {
            range_margin: FlexConfig::MAX_RANGE_MARGIN + 1,
            ..FlexConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("range_margin 65"));
    }

    #[test]
    fn tier_lookup_is_one_based() {
        let config = FlexConfig::default();
        assert_eq!(config.power_for_tier(0), None);
        assert_eq!(config.power_for_tier(1), Some(4));
        assert_eq!(config.power_for_tier(4), Some(48));
        assert_eq!(config.power_for_tier(5), None);
    }
}
