//! Geometric Brownian Motion (GBM) market parameters.
//!
//! Under the risk-neutral measure with continuous dividend yield `q` the
//! asset follows:
//! ```text
//! dS = (r - q) * S * dt + sigma * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! The terminal value over a horizon `t` is sampled directly from the exact
//! solution:
//! ```text
//! S(t) = S(0) * exp((r - q - 0.5*sigma^2)*t + sigma*sqrt(t)*Z),  Z ~ N(0, 1)
//! ```

use pricer_core::types::PricingError;

/// Market parameters for a single lognormal asset.
///
/// Plain `Copy` value passed into every pricer. Fields are public so that
/// callers can assemble unchecked inputs; [`GbmParams::new`] and
/// [`GbmParams::validate`] enforce the domain.
///
/// # Examples
/// ```
/// use pricer_models::models::GbmParams;
///
/// let market = GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap();
/// assert_eq!(market.spot, 41.0);
/// assert!((market.discount_factor(1.0) - (-0.08_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Current spot price (S0)
    pub spot: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility (sigma)
    pub volatility: f64,
    /// Continuous dividend yield (q)
    pub dividend: f64,
}

impl GbmParams {
    /// Create new GBM parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free rate (must be finite)
    /// * `volatility` - Volatility (must be non-negative)
    /// * `dividend` - Dividend yield (must be non-negative)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending input.
    pub fn new(spot: f64, rate: f64, volatility: f64, dividend: f64) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            rate,
            volatility,
            dividend,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its domain.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.spot.is_nan() || self.spot <= 0.0 {
            return Err(PricingError::invalid("spot", self.spot, "must be positive"));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid("rate", self.rate, "must be finite"));
        }
        if self.volatility.is_nan() || self.volatility < 0.0 {
            return Err(PricingError::invalid(
                "volatility",
                self.volatility,
                "must be non-negative",
            ));
        }
        if self.dividend.is_nan() || self.dividend < 0.0 {
            return Err(PricingError::invalid(
                "dividend",
                self.dividend,
                "must be non-negative",
            ));
        }
        Ok(())
    }

    /// Risk-neutral drift of the asset, `r - q`.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.rate - self.dividend
    }

    /// Discount factor `exp(-r * t)`.
    #[inline]
    pub fn discount_factor(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }

    /// Forward price `S0 * exp((r - q) * t)`.
    #[inline]
    pub fn forward(&self, t: f64) -> f64 {
        self.spot * (self.drift() * t).exp()
    }

    /// Terminal spot after horizon `t` for a standard normal draw `z`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::models::GbmParams;
    ///
    /// let market = GbmParams::new(100.0, 0.05, 0.2, 0.0).unwrap();
    /// let median = market.terminal_spot(1.0, 0.0);
    /// assert!((median - 100.0 * (0.05_f64 - 0.02).exp()).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn terminal_spot(&self, t: f64, z: f64) -> f64 {
        let sigma = self.volatility;
        let drift = (self.drift() - 0.5 * sigma * sigma) * t;
        let diffusion = sigma * t.sqrt() * z;
        self.spot * (drift + diffusion).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            dividend: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid() {
        let p = GbmParams::new(41.0, 0.08, 0.3, 0.01).unwrap();
        assert_eq!(p.spot, 41.0);
        assert_eq!(p.rate, 0.08);
        assert_eq!(p.volatility, 0.3);
        assert_eq!(p.dividend, 0.01);
    }

    #[test]
    fn test_negative_rate_allowed() {
        assert!(GbmParams::new(100.0, -0.01, 0.2, 0.0).is_ok());
    }

    #[test]
    fn test_zero_volatility_allowed() {
        assert!(GbmParams::new(100.0, 0.05, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_inputs_name_the_parameter() {
        let cases = [
            (GbmParams::new(0.0, 0.05, 0.2, 0.0), "spot"),
            (GbmParams::new(-1.0, 0.05, 0.2, 0.0), "spot"),
            (GbmParams::new(100.0, f64::INFINITY, 0.2, 0.0), "rate"),
            (GbmParams::new(100.0, 0.05, -0.2, 0.0), "volatility"),
            (GbmParams::new(100.0, 0.05, f64::NAN, 0.0), "volatility"),
            (GbmParams::new(100.0, 0.05, 0.2, -0.01), "dividend"),
        ];
        for (result, name) in cases {
            assert_eq!(result.unwrap_err().parameter(), Some(name));
        }
    }

    #[test]
    fn test_default() {
        let p = GbmParams::default();
        assert_eq!(p.spot, 100.0);
        assert_eq!(p.rate, 0.05);
        assert_eq!(p.volatility, 0.2);
        assert_eq!(p.dividend, 0.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_forward_and_discount() {
        let p = GbmParams::new(100.0, 0.05, 0.2, 0.02).unwrap();
        assert_relative_eq!(p.drift(), 0.03, epsilon = 1e-15);
        assert_relative_eq!(p.forward(2.0), 100.0 * 0.06_f64.exp(), epsilon = 1e-12);
        assert_relative_eq!(p.discount_factor(2.0), (-0.1_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_terminal_spot_deterministic_without_volatility() {
        let p = GbmParams::new(100.0, 0.05, 0.0, 0.0).unwrap();
        for z in [-3.0, 0.0, 3.0] {
            assert_relative_eq!(p.terminal_spot(1.0, z), p.forward(1.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_terminal_spot_positive() {
        let p = GbmParams::default();
        for z in [-8.0, -1.0, 0.0, 1.0, 8.0] {
            assert!(p.terminal_spot(1.0, z) > 0.0);
        }
    }
}
