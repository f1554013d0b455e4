//! Error types for the Monte Carlo pricer.
//!
//! Configuration errors are raised when a [`MonteCarloConfig`](super::MonteCarloConfig)
//! is built and convert into [`PricingError`] at the pricing boundary.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for Monte Carlo pricer.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count of zero.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Step count of zero.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidPathCount(count) => {
                PricingError::invalid("n_paths", count, "must be at least 1")
            }
            ConfigError::InvalidStepCount(count) => {
                PricingError::invalid("n_steps", count, "must be at least 1")
            }
            ConfigError::InvalidParameter { name, value } => {
                PricingError::InvalidParameter { name, value }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert_eq!(
            err.to_string(),
            "Invalid path count 0: must be at least 1"
        );

        let err = ConfigError::InvalidStepCount(0);
        assert!(err.to_string().contains("Invalid step count 0"));

        let err = ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter 'n_paths': must be specified");
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = ConfigError::InvalidPathCount(0).into();
        assert_eq!(err.parameter(), Some("n_paths"));

        let err: PricingError = ConfigError::InvalidStepCount(0).into();
        assert_eq!(err.parameter(), Some("n_steps"));
    }
}
