//! Activation metrics for a farm.
//!
//! [`ActivationMetrics`] summarises one [`activate_all`] pass.
//!
//! [`activate_all`]: crate::SprinklerFarm::activate_all

/// Counters and timing for one activation pass.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivationMetrics {
    /// Sprinklers activated.
    pub sprinklers: usize,
    /// Tiles covered, summed over sprinklers. Tiles covered by two
    /// sprinklers count twice.
    pub tiles_covered: usize,
    /// Tiles that changed from dry to wet.
    pub tiles_watered: usize,
    /// Sprinklers that could not place their whole budget.
    pub under_delivered: usize,
    /// Tiles watered beyond budget under relaxed balancing, summed.
    pub overshoot: u64,
    /// Wall-clock time for the pass, in microseconds.
    pub elapsed_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = ActivationMetrics::default();
        assert_eq!(m.sprinklers, 0);
        assert_eq!(m.tiles_covered, 0);
        assert_eq!(m.tiles_watered, 0);
        assert_eq!(m.under_delivered, 0);
        assert_eq!(m.overshoot, 0);
        assert_eq!(m.elapsed_us, 0);
    }
}
