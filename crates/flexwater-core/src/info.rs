//! Per-sprinkler allocation inputs and the balance policy.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseBalanceModeError;
use crate::layout::Layout;

/// Policy for a tie group that is larger than the remaining budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BalanceMode {
    /// Water the whole group, overshooting the budget.
    #[default]
    Relaxed,
    /// Water exactly the remaining budget, picking tiles by spiral scan.
    Exact,
    /// Water none of the group and leave the budget unused.
    Restrictive,
}

impl fmt::Display for BalanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Relaxed => "relaxed",
            Self::Exact => "exact",
            Self::Restrictive => "restrictive",
        };
        f.write_str(name)
    }
}

impl FromStr for BalanceMode {
    type Err = ParseBalanceModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "exact" => Ok(Self::Exact),
            "restrictive" => Ok(Self::Restrictive),
            _ => Err(ParseBalanceModeError {
                input: s.to_string(),
            }),
        }
    }
}

/// What a strategy needs to know about the sprinkler it is covering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SprinklerInfo {
    /// Unmodified relative coverage of the sprinkler.
    pub layout: Layout,
    /// Budget: how many tiles the sprinkler may water. Negative values
    /// come from misconfiguration and are treated as zero.
    pub power: i32,
}

impl SprinklerInfo {
    /// Create an info record.
    pub fn new(layout: Layout, power: i32) -> Self {
        Self { layout, power }
    }

    /// Info whose power equals the size of its layout.
    pub fn from_layout(layout: Layout) -> Self {
        let power = i32::try_from(layout.len()).unwrap_or(i32::MAX);
        Self { layout, power }
    }

    /// The power clamped to zero.
    pub fn budget(&self) -> u32 {
        self.power.max(0).unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_mode_round_trips_through_text() {
        for mode in [BalanceMode::Relaxed, BalanceMode::Exact, BalanceMode::Restrictive] {
            assert_eq!(mode.to_string().parse::<BalanceMode>(), Ok(mode));
        }
        assert_eq!(" EXACT ".parse::<BalanceMode>(), Ok(BalanceMode::Exact));
    }

    #[test]
    fn unknown_balance_mode_is_rejected() {
        let err = "lenient".parse::<BalanceMode>().unwrap_err();
        assert_eq!(err.input, "lenient");
        assert!(err.to_string().contains("lenient"));
    }

    #[test]
    fn default_mode_is_relaxed() {
        assert_eq!(BalanceMode::default(), BalanceMode::Relaxed);
    }

    #[test]
    fn negative_power_clamps_budget() {
        let info = SprinklerInfo::new(Layout::basic(), -3);
        assert_eq!(info.budget(), 0);
        assert_eq!(SprinklerInfo::from_layout(Layout::iridium()).power, 24);
    }
}
