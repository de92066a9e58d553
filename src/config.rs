//! Simulation configuration.

use crate::core::DEFAULT_STEPS;
use crate::matrix::{is_valid_tolerance, ROW_SUM_TOLERANCE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from [`SimConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tolerance must lie in [0, 0.001), got {tolerance}")]
    InvalidTolerance { tolerance: f64 },
}

/// Run-level settings shared by a budget and the items built for it.
///
/// Missing fields take their defaults when deserializing.
///
/// # Example
///
/// ```
/// use budget_sim::SimConfig;
///
/// let config = SimConfig::new().with_steps(24).with_seed(7);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.steps(), 24);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    steps: usize,
    seed: Option<u64>,
    tolerance: f64,
}

impl SimConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `steps = 10`, no seed, `tolerance = 1e-9`.
    pub fn new() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            seed: None,
            tolerance: ROW_SUM_TOLERANCE,
        }
    }

    /// Sets the number of steps simulated by [`Budget::run`](crate::Budget::run).
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the seed for [`rng`](Self::rng).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the row-sum tolerance for transition matrices.
    ///
    /// [`validate`](Self::validate) rejects values outside
    /// `[0, MAX_ROW_SUM_TOLERANCE)`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    // --- Accessors ---

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// A generator seeded from `seed`, or from the OS when unset.
    ///
    /// Items should not share one seed; derive a generator per item from
    /// this one with `StdRng::from_rng`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_tolerance(self.tolerance) {
            return Err(ConfigError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = SimConfig::new();
        assert_eq!(config.steps(), 10);
        assert_eq!(config.seed(), None);
        assert_eq!(config.tolerance(), 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods_set_fields() {
        let config = SimConfig::new()
            .with_steps(3)
            .with_seed(11)
            .with_tolerance(0.0);

        assert_eq!(config.steps(), 3);
        assert_eq!(config.seed(), Some(11));
        assert_eq!(config.tolerance(), 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tolerance in [-1e-3, 1e-3, 0.5, 1.0, f64::NAN, f64::INFINITY] {
            let config = SimConfig::new().with_tolerance(tolerance);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidTolerance { .. })
            ));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = SimConfig::new().with_seed(99);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"steps": 12, "seed": 5}"#).unwrap();
        assert_eq!(config.steps(), 12);
        assert_eq!(config.seed(), Some(5));
        assert_eq!(config.tolerance(), ROW_SUM_TOLERANCE);

        let config: SimConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }
}
