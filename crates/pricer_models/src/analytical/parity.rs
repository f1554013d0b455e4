//! Put-call parity for European options.
//!
//! C - P = S·e^(-qT) - K·e^(-rT)

use crate::models::GbmParams;

/// Right-hand side of put-call parity, S·e^(-qT) - K·e^(-rT).
///
/// # Examples
/// ```
/// use pricer_models::analytical::parity_value;
/// use pricer_models::models::GbmParams;
///
/// let market = GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap();
/// let rhs = parity_value(&market, 40.0, 1.0);
/// assert!((rhs - (41.0 - 40.0 * (-0.08_f64).exp())).abs() < 1e-12);
/// ```
#[inline]
pub fn parity_value(market: &GbmParams, strike: f64, expiry: f64) -> f64 {
    market.spot * (-market.dividend * expiry).exp() - strike * market.discount_factor(expiry)
}

/// Deviation of a call/put price pair from put-call parity.
///
/// Zero for an arbitrage-free pair; positive when the call is rich
/// relative to the put.
#[inline]
pub fn parity_residual(call: f64, put: f64, market: &GbmParams, strike: f64, expiry: f64) -> f64 {
    (call - put) - parity_value(market, strike, expiry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parity_value_with_dividend() {
        let market = GbmParams::new(100.0, 0.05, 0.2, 0.03).unwrap();
        let expected = 100.0 * (-0.03_f64).exp() - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(parity_value(&market, 100.0, 1.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_residual_sign() {
        let market = GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap();
        let rhs = parity_value(&market, 40.0, 1.0);
        assert_relative_eq!(parity_residual(rhs + 1.0, 1.0, &market, 40.0, 1.0), 0.0, epsilon = 1e-12);
        assert!(parity_residual(rhs + 2.0, 1.0, &market, 40.0, 1.0) > 0.0);
        assert!(parity_residual(rhs, 1.0, &market, 40.0, 1.0) < 0.0);
    }
}
