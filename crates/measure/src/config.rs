use std::time::Duration;

/// Configuration for an [`Estimator`](crate::Estimator).
///
/// The default has no artificial latency and draws its seed from the
/// operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EstimatorConfig {
    latency: Duration,
    seed: Option<u64>,
}

impl EstimatorConfig {
    /// Delay that stands in for a remote body-scan inference call.
    pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

    /// Creates a config with the given latency and optional seed.
    #[must_use]
    pub fn new(latency: Duration, seed: Option<u64>) -> Self {
        Self { latency, seed }
    }

    /// Creates a config that waits [`Self::SIMULATED_LATENCY`] before each
    /// asynchronous estimate.
    #[must_use]
    pub fn simulated() -> Self {
        Self::new(Self::SIMULATED_LATENCY, None)
    }

    /// Returns a copy with the given latency.
    #[must_use]
    pub fn with_latency(self, latency: Duration) -> Self {
        Self { latency, ..self }
    }

    /// Returns a copy that seeds the jitter source deterministically.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Returns the delay applied before asynchronous estimates.
    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Returns the jitter seed, if fixed.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_immediate_and_unseeded() {
        let config = EstimatorConfig::default();
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn builders_keep_other_fields() {
        let config = EstimatorConfig::simulated().with_seed(3);
        assert_eq!(config.latency(), Duration::from_millis(1500));
        assert_eq!(config.seed(), Some(3));

        let config = config.with_latency(Duration::from_millis(5));
        assert_eq!(config.seed(), Some(3));
    }
}
