//! European binomial lattice.
//!
//! A European payoff depends only on the terminal node, and the terminal
//! node depends only on the number of up-moves. The price is therefore a
//! single sum over the `steps + 1` terminal nodes weighted by the binomial
//! probability mass function, with no backward induction through the tree.
//!
//! ## Lattice parameters
//!
//! With `h = T / n`:
//! ```text
//! u  = exp((r - q)h + σ√h)
//! d  = exp((r - q)h - σ√h)
//! p* = (exp((r - q)h) - d) / (u - d)
//! ```
//! and the price is
//! ```text
//! V = e^(-rT) Σ_{i=0..n} payoff(S0 u^(n-i) d^i) · C(n, n-i) p*^(n-i) (1-p*)^i
//! ```

use pricer_core::math::BinomialPmf;
use pricer_core::types::PricingError;
use pricer_models::instruments::{PayoffType, VanillaOption};
use pricer_models::models::GbmParams;

/// Per-step lattice factors.
///
/// # Examples
/// ```
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::lattice::LatticeFactors;
///
/// let market = GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap();
/// let factors = LatticeFactors::new(&market, 1.0, 1).unwrap();
/// assert!((factors.up - (0.08_f64 + 0.3).exp()).abs() < 1e-12);
/// assert!((factors.down - (0.08_f64 - 0.3).exp()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeFactors {
    /// Interval length h = T / n.
    pub h: f64,
    /// Multiplicative up factor u.
    pub up: f64,
    /// Multiplicative down factor d.
    pub down: f64,
    /// Risk-neutral up probability p*. NaN when u == d.
    pub probability: f64,
}

impl LatticeFactors {
    /// Computes the factors for `steps` intervals over `expiry`.
    ///
    /// # Errors
    /// - `InvalidParameter` if steps is zero or expiry is non-positive
    /// - `NumericalInstability` if u or d overflow
    pub fn new(market: &GbmParams, expiry: f64, steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::invalid("steps", steps, "must be at least 1"));
        }
        if expiry.is_nan() || expiry <= 0.0 {
            return Err(PricingError::invalid("expiry", expiry, "must be positive"));
        }

        let h = expiry / steps as f64;
        let carry = market.drift() * h;
        let jump = market.volatility * h.sqrt();

        let up = (carry + jump).exp();
        let down = (carry - jump).exp();

        if !up.is_finite() || !down.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "lattice factors overflowed (u = {}, d = {})",
                up, down
            )));
        }

        let probability = (carry.exp() - down) / (up - down);

        Ok(Self {
            h,
            up,
            down,
            probability,
        })
    }

    /// True when the up and down moves coincide (zero volatility).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.up == self.down
    }
}

/// European binomial pricer.
///
/// # Examples
/// ```
/// use pricer_models::instruments::VanillaOption;
/// use pricer_models::models::GbmParams;
/// use pricer_pricing::lattice::BinomialPricer;
///
/// let market = GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap();
/// let call = VanillaOption::call(40.0, 1.0).unwrap();
///
/// let price = BinomialPricer::new(2).unwrap().price(&market, &call).unwrap();
/// assert!((price - 7.1623).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinomialPricer {
    steps: usize,
}

impl BinomialPricer {
    /// Creates a pricer with `steps` lattice intervals.
    ///
    /// # Errors
    /// `InvalidParameter` if `steps` is zero.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::invalid("steps", steps, "must be at least 1"));
        }
        Ok(Self { steps })
    }

    /// Returns the number of lattice intervals.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices a European vanilla option.
    pub fn price(
        &self,
        market: &GbmParams,
        option: &VanillaOption<f64>,
    ) -> Result<f64, PricingError> {
        self.price_payoff(
            market,
            option.strike(),
            option.expiry(),
            option.payoff_type(),
        )
    }

    /// Prices an arbitrary payoff of terminal spot and strike.
    pub fn price_payoff(
        &self,
        market: &GbmParams,
        strike: f64,
        expiry: f64,
        payoff: PayoffType,
    ) -> Result<f64, PricingError> {
        market.validate()?;

        let n = self.steps;
        let factors = LatticeFactors::new(market, expiry, n)?;
        let discount = market.discount_factor(expiry);

        // Zero volatility: every path ends at the forward.
        if factors.is_degenerate() {
            return Ok(discount * payoff.evaluate(market.forward(expiry), strike));
        }

        let pmf = BinomialPmf::new(n as u64, factors.probability)?;

        // S0 u^(n-i) d^i evaluated in log-space
        let ln_spot = market.spot.ln();
        let ln_up = factors.up.ln();
        let ln_down = factors.down.ln();

        let expectation: f64 = (0..=n)
            .map(|i| {
                let ups = n - i;
                let terminal = (ln_spot + ups as f64 * ln_up + i as f64 * ln_down).exp();
                payoff.evaluate(terminal, strike) * pmf.pmf(ups as u64)
            })
            .sum();

        Ok(discount * expectation)
    }
}

/// Prices a European option on a binomial lattice.
///
/// # Arguments
/// * `spot` - Current asset price
/// * `strike` - Strike price
/// * `rate` - Continuously compounded risk-free rate
/// * `volatility` - Annualised volatility
/// * `dividend` - Continuous dividend yield
/// * `steps` - Number of lattice intervals (>= 1)
/// * `expiry` - Time to maturity in years
/// * `payoff` - Call or Put
///
/// # Errors
/// `PricingError::InvalidParameter` for non-positive spot, strike, expiry or
/// steps, and for negative volatility or dividend.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
/// use pricer_pricing::lattice::price_binomial;
///
/// let call = price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 2, 1.0, PayoffType::Call).unwrap();
/// assert!((call - 7.1623).abs() < 1e-4);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn price_binomial(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    dividend: f64,
    steps: usize,
    expiry: f64,
    payoff: PayoffType,
) -> Result<f64, PricingError> {
    let market = GbmParams::new(spot, rate, volatility, dividend)?;
    let option = VanillaOption::new(strike, expiry, payoff)?;
    BinomialPricer::new(steps)?.price(&market, &option)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::parity_value;

    fn reference_market() -> GbmParams {
        GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap()
    }

    #[test]
    fn test_two_step_reference_call() {
        let price =
            price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 2, 1.0, PayoffType::Call).unwrap();
        assert_relative_eq!(price, 7.162284204600742, epsilon = 1e-9);
    }

    #[test]
    fn test_two_step_reference_put() {
        let price = price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 2, 1.0, PayoffType::Put).unwrap();
        assert_relative_eq!(price, 3.0869380600661738, epsilon = 1e-9);
    }

    #[test]
    fn test_one_step_matches_two_node_expectation() {
        let market = reference_market();
        let (s, k, r, sigma) = (41.0_f64, 40.0_f64, 0.08_f64, 0.3_f64);

        let u = (r + sigma).exp();
        let d = (r - sigma).exp();
        let p = (r.exp() - d) / (u - d);
        let expected = (-r).exp() * (p * (s * u - k).max(0.0) + (1.0 - p) * (s * d - k).max(0.0));

        let price = BinomialPricer::new(1)
            .unwrap()
            .price_payoff(&market, k, 1.0, PayoffType::Call)
            .unwrap();

        assert_relative_eq!(price, expected, epsilon = 1e-12);
        assert_relative_eq!(price, 7.838580426945479, epsilon = 1e-9);
    }

    #[test]
    fn test_factors_one_step() {
        let factors = LatticeFactors::new(&reference_market(), 1.0, 1).unwrap();
        assert_eq!(factors.h, 1.0);
        assert_relative_eq!(factors.probability, 0.4255574831883412, epsilon = 1e-12);
        assert!(!factors.is_degenerate());
    }

    #[test]
    fn test_probability_in_unit_interval() {
        for (rate, vol, div) in [(0.08, 0.3, 0.0), (-0.02, 0.1, 0.0), (0.3, 0.05, 0.1)] {
            let market = GbmParams::new(100.0, rate, vol, div).unwrap();
            for steps in [1, 7, 250] {
                let f = LatticeFactors::new(&market, 1.5, steps).unwrap();
                assert!(f.probability > 0.0 && f.probability < 1.0);
            }
        }
    }

    #[test]
    fn test_parity_holds_exactly_on_lattice() {
        let market = GbmParams::new(100.0, 0.05, 0.25, 0.02).unwrap();
        let pricer = BinomialPricer::new(37).unwrap();
        for strike in [80.0, 100.0, 125.0] {
            let call = pricer
                .price_payoff(&market, strike, 2.0, PayoffType::Call)
                .unwrap();
            let put = pricer
                .price_payoff(&market, strike, 2.0, PayoffType::Put)
                .unwrap();
            assert_relative_eq!(call - put, parity_value(&market, strike, 2.0), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_volatility_prices_forward() {
        let market = GbmParams::new(100.0, 0.05, 0.0, 0.0).unwrap();
        let call = BinomialPricer::new(10)
            .unwrap()
            .price_payoff(&market, 100.0, 1.0, PayoffType::Call)
            .unwrap();
        assert_relative_eq!(call, 100.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_prices_non_negative() {
        let market = reference_market();
        for strike in [1.0, 20.0, 40.0, 80.0, 400.0] {
            for payoff in [PayoffType::Call, PayoffType::Put] {
                let price = BinomialPricer::new(50)
                    .unwrap()
                    .price_payoff(&market, strike, 1.0, payoff)
                    .unwrap();
                assert!(price >= 0.0);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 100, 1.0, PayoffType::Put).unwrap();
        let b = price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 100, 1.0, PayoffType::Put).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            (price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 0, 1.0, PayoffType::Call), "steps"),
            (price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 2, 0.0, PayoffType::Call), "expiry"),
            (price_binomial(41.0, 40.0, 0.08, 0.3, 0.0, 2, -1.0, PayoffType::Call), "expiry"),
            (price_binomial(41.0, 40.0, 0.08, -0.3, 0.0, 2, 1.0, PayoffType::Call), "volatility"),
            (price_binomial(41.0, -40.0, 0.08, 0.3, 0.0, 2, 1.0, PayoffType::Call), "strike"),
            (price_binomial(0.0, 40.0, 0.08, 0.3, 0.0, 2, 1.0, PayoffType::Call), "spot"),
        ];
        for (result, name) in cases {
            assert_eq!(result.unwrap_err().parameter(), Some(name));
        }
    }

    #[test]
    fn test_overflowing_factors_reported() {
        let market = GbmParams::new(100.0, 0.05, 1e6, 0.0).unwrap();
        let result = LatticeFactors::new(&market, 1.0, 1);
        assert!(matches!(result, Err(PricingError::NumericalInstability(_))));
    }
}
