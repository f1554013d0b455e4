//! Simulation settings for [`MonteCarloPricer`](super::MonteCarloPricer).

use super::error::ConfigError;

/// Validated trial count, step count and seed.
///
/// `n_steps` sizes the increment `dt = T / n_steps` over which each terminal
/// spot is drawn in one exact lognormal step.
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder().n_paths(1_000_000).seed(7).build().unwrap();
/// assert_eq!((config.n_paths(), config.n_steps(), config.seed()), (1_000_000, 1, Some(7)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Starts a builder with no trial count and one step.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Trials per pricing call.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Intervals the expiry is divided into.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Generator seed; `None` means entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks `n_paths >= 1` and `n_steps >= 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        match self.n_steps {
            0 => Err(ConfigError::InvalidStepCount(0)),
            _ => Ok(()),
        }
    }
}

/// Builder for [`MonteCarloConfig`]. `n_paths` has no default.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Trial count.
    #[inline]
    pub fn n_paths(self, n_paths: usize) -> Self {
        Self {
            n_paths: Some(n_paths),
            ..self
        }
    }

    /// Step count, 1 if never set.
    #[inline]
    pub fn n_steps(self, n_steps: usize) -> Self {
        Self {
            n_steps: Some(n_steps),
            ..self
        }
    }

    /// Fixed seed.
    #[inline]
    pub fn seed(self, seed: u64) -> Self {
        self.maybe_seed(Some(seed))
    }

    /// Fixed seed, or entropy for `None`.
    #[inline]
    pub fn maybe_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    /// Validates and freezes the settings.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidParameter` when no trial count was given, plus
    /// anything [`MonteCarloConfig::validate`] rejects.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let Some(n_paths) = self.n_paths else {
            return Err(ConfigError::InvalidParameter {
                name: "n_paths",
                value: "not set".to_string(),
            });
        };

        let config = MonteCarloConfig {
            n_paths,
            n_steps: self.n_steps.unwrap_or(1),
            seed: self.seed,
        };
        config.validate().map(|()| config)
    }
}
