//! Black-Scholes-Merton pricing for European options.
//!
//! Closed-form reference used to validate the lattice and Monte Carlo
//! pricers.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{PayoffType, VanillaOption};
use crate::models::GbmParams;

/// Black-Scholes-Merton model with continuous dividend yield.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::models::GbmParams;
///
/// let bs = BlackScholes::new(GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap()).unwrap();
/// let call = bs.price_call(40.0, 1.0);
/// let put = bs.price_put(40.0, 1.0);
///
/// assert!((call - 6.9610).abs() < 1e-4);
/// assert!((put - 2.8857).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    market: GbmParams,
}

impl BlackScholes {
    /// Creates a new model from market parameters.
    ///
    /// Zero volatility is accepted; the price then collapses to the
    /// discounted intrinsic value at the forward.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0
    /// - `AnalyticalError::InvalidDividend` if dividend < 0
    pub fn new(market: GbmParams) -> Result<Self, AnalyticalError> {
        if market.spot.is_nan() || market.spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot: market.spot });
        }

        if market.volatility.is_nan() || market.volatility < 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: market.volatility,
            });
        }

        if market.dividend.is_nan() || market.dividend < 0.0 {
            return Err(AnalyticalError::InvalidDividend {
                dividend: market.dividend,
            });
        }

        Ok(Self { market })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn market(&self) -> &GbmParams {
        &self.market
    }

    /// Computes the d1 term.
    ///
    /// Infinite when σ√T is zero; the sign follows the forward moneyness.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let m = &self.market;
        let vol_sqrt_t = m.volatility * expiry.sqrt();
        let log_moneyness = (m.spot / strike).ln();
        let drift = (m.drift() + 0.5 * m.volatility * m.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term, d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.market.volatility * expiry.sqrt()
    }

    /// European call price.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        self.price_payoff(PayoffType::Call, strike, expiry)
    }

    /// European put price.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        self.price_payoff(PayoffType::Put, strike, expiry)
    }

    /// Prices a vanilla option.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::VanillaOption;
    /// use pricer_models::models::GbmParams;
    ///
    /// let bs = BlackScholes::new(GbmParams::default()).unwrap();
    /// let call = VanillaOption::call(100.0, 1.0).unwrap();
    /// assert!((bs.price(&call) - 10.4506).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price(&self, option: &VanillaOption<f64>) -> f64 {
        self.price_payoff(option.payoff_type(), option.strike(), option.expiry())
    }

    fn price_payoff(&self, payoff: PayoffType, strike: f64, expiry: f64) -> f64 {
        let m = &self.market;
        let discount = m.discount_factor(expiry);

        if expiry <= 0.0 {
            return payoff.evaluate(m.spot, strike);
        }

        if m.volatility * expiry.sqrt() == 0.0 {
            return discount * payoff.evaluate(m.forward(expiry), strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let carry = (-m.dividend * expiry).exp();

        match payoff {
            PayoffType::Call => m.spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2),
            PayoffType::Put => strike * discount * norm_cdf(-d2) - m.spot * carry * norm_cdf(-d1),
        }
    }
}
