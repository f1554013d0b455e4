//! Monte Carlo pricing engine.
//!
//! Each trial draws one standard normal `z`, maps it to a terminal spot with
//! the exact lognormal solution over the increment `dt = T / n_steps`, and
//! evaluates the payoff there. Discounting runs over the full expiry. The
//! discounted sample mean is the price and the discounted sample standard
//! deviation over `√n` is its standard error.
//!
//! The pricer keeps a [`PathWorkspace`] between calls so repeated pricing
//! does not reallocate.

use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;
use pricer_models::models::GbmParams;

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::workspace::PathWorkspace;
use crate::rng::PricerRng;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 6.96,
///     std_error: 0.01,
///     n_paths: 100_000,
/// };
/// assert!(result.std_error < result.price);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted sample mean of the payoff.
    pub price: f64,
    /// Standard error of the estimate. NaN for a single trial.
    pub std_error: f64,
    /// Number of trials averaged.
    pub n_paths: usize,
}

/// Monte Carlo pricer for European vanilla options under GBM.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::VanillaOption;
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
///
/// let market = GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap();
/// let call = VanillaOption::call(40.0, 1.0).unwrap();
/// let result = pricer.price_european(&market, &call).unwrap();
///
/// assert!((result.price - 6.961).abs() < 5.0 * result.std_error);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: PricerRng,
    workspace: PathWorkspace,
}

impl MonteCarloPricer {
    /// Creates a pricer, seeding the generator from the configuration.
    ///
    /// Without a seed the generator is seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        let rng = PricerRng::from_optional_seed(config.seed());
        Self::with_rng(config, rng)
    }

    /// Creates a pricer drawing from an existing generator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_rng(config: MonteCarloConfig, rng: PricerRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            workspace: PathWorkspace::default(),
        })
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a European vanilla option.
    ///
    /// Successive calls continue the same random stream.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` if the market parameters are invalid.
    pub fn price_european(
        &mut self,
        market: &GbmParams,
        option: &VanillaOption<f64>,
    ) -> Result<PricingResult, PricingError> {
        simulate(
            market,
            option,
            self.config.n_steps(),
            self.config.n_paths(),
            &mut self.rng,
            &mut self.workspace,
        )
    }
}

fn simulate(
    market: &GbmParams,
    option: &VanillaOption<f64>,
    n_steps: usize,
    n_paths: usize,
    rng: &mut PricerRng,
    workspace: &mut PathWorkspace,
) -> Result<PricingResult, PricingError> {
    market.validate()?;

    let expiry = option.expiry();
    let dt = expiry / n_steps as f64;

    workspace.ensure_capacity(n_paths);
    let (draws, payoffs) = workspace.split_mut();

    rng.fill_normal(draws);
    for z in draws.iter_mut() {
        *z = market.terminal_spot(dt, *z);
    }
    option.payoffs(draws, payoffs);

    let n = n_paths as f64;
    let mean = payoffs.iter().sum::<f64>() / n;
    let std_dev = if n_paths > 1 {
        let ss: f64 = payoffs.iter().map(|x| (x - mean) * (x - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    let discount = market.discount_factor(expiry);
    Ok(PricingResult {
        price: discount * mean,
        std_error: discount * std_dev / n.sqrt(),
        n_paths,
    })
}

/// Prices a European option by naive Monte Carlo, returning the price only.
///
/// # Arguments
/// * `option` - Strike, expiry and payoff
/// * `spot` - Current asset price
/// * `rate` - Continuously compounded risk-free rate
/// * `volatility` - Annualised volatility
/// * `dividend` - Continuous dividend yield
/// * `n_steps` - Intervals used to size `dt = T / n_steps` (>= 1)
/// * `n_paths` - Number of trials (>= 1)
/// * `rng` - Normal generator; advanced by `n_paths` draws
///
/// # Errors
/// `PricingError::InvalidParameter` for invalid market data, or for zero
/// `n_steps` or `n_paths`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::VanillaOption;
/// use pricer_pricing::mc::price_monte_carlo;
/// use pricer_pricing::rng::PricerRng;
///
/// let put = VanillaOption::put(40.0, 1.0).unwrap();
/// let mut rng = PricerRng::from_seed(7);
/// let price = price_monte_carlo(&put, 41.0, 0.08, 0.3, 0.0, 1, 100_000, &mut rng).unwrap();
/// assert!((price - 2.886).abs() < 0.1);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn price_monte_carlo(
    option: &VanillaOption<f64>,
    spot: f64,
    rate: f64,
    volatility: f64,
    dividend: f64,
    n_steps: usize,
    n_paths: usize,
    rng: &mut PricerRng,
) -> Result<f64, PricingError> {
    let market = GbmParams::new(spot, rate, volatility, dividend)?;
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .build()?;

    let mut workspace = PathWorkspace::default();
    let result = simulate(
        &market,
        option,
        config.n_steps(),
        config.n_paths(),
        rng,
        &mut workspace,
    )?;
    Ok(result.price)
}
