//! CLI configuration loading
//!
//! Loads defaults from a TOML file, then applies `PRICER_*` environment
//! overrides. Command-line flags are applied last by the commands.
//!
//! ```toml
//! [market]
//! spot = 41.0
//! rate = 0.08
//! volatility = 0.3
//! dividend = 0.0
//!
//! [pricing]
//! steps = 500
//! n_paths = 100000
//! n_steps = 1
//! seed = 42
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Default market parameters
    #[serde(default)]
    pub market: MarketConfig,

    /// Default engine settings
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Market defaults used when a flag is omitted
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MarketConfig {
    /// Spot price
    #[serde(default = "default_spot")]
    pub spot: f64,

    /// Continuously compounded risk-free rate
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Annualised volatility
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Continuous dividend yield
    #[serde(default)]
    pub dividend: f64,
}

/// Engine defaults
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Binomial lattice intervals
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Monte Carlo trials
    #[serde(default = "default_n_paths")]
    pub n_paths: usize,

    /// Monte Carlo time intervals
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,

    /// Monte Carlo seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_spot() -> f64 {
    100.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

fn default_steps() -> usize {
    500
}

fn default_n_paths() -> usize {
    100_000
}

fn default_n_steps() -> usize {
    1
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            rate: default_rate(),
            volatility: default_volatility(),
            dividend: 0.0,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            n_paths: default_n_paths(),
            n_steps: default_n_steps(),
            seed: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(path)?.with_env_overrides(std::env::vars())
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Apply `PRICER_*` overrides from an iterator of environment variables.
    ///
    /// Unrelated variables are ignored.
    pub fn with_env_overrides<I>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                "PRICER_SPOT" => self.market.spot = parse_env(&key, &value)?,
                "PRICER_RATE" => self.market.rate = parse_env(&key, &value)?,
                "PRICER_VOLATILITY" => self.market.volatility = parse_env(&key, &value)?,
                "PRICER_DIVIDEND" => self.market.dividend = parse_env(&key, &value)?,
                "PRICER_STEPS" => self.pricing.steps = parse_env(&key, &value)?,
                "PRICER_N_PATHS" => self.pricing.n_paths = parse_env(&key, &value)?,
                "PRICER_N_STEPS" => self.pricing.n_steps = parse_env(&key, &value)?,
                "PRICER_SEED" => self.pricing.seed = Some(parse_env(&key, &value)?),
                _ => continue,
            }
            tracing::debug!("override {}={}", key, value);
        }
        Ok(self)
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Parse(format!("{}: cannot parse '{}'", key, value)))
}
