//! Vanilla option definitions.
//!
//! This module provides the European vanilla option: a strike, a time to
//! expiry and a payoff kind.

use num_traits::Float;

use super::error::InstrumentError;
use super::payoff::PayoffType;

/// European vanilla option.
///
/// Immutable once constructed. Strike and expiry are validated to be
/// strictly positive.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{PayoffType, VanillaOption};
///
/// let call = VanillaOption::new(40.0_f64, 1.0, PayoffType::Call).unwrap();
/// assert_eq!(call.payoff(41.0), 1.0);
///
/// assert!(VanillaOption::new(40.0_f64, 0.0, PayoffType::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VanillaOption<T: Float> {
    strike: T,
    expiry: T,
    payoff_type: PayoffType,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a new European option.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to maturity in years (must be positive)
    /// * `payoff_type` - Call or Put
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if strike <= 0 or NaN
    /// - `InstrumentError::InvalidExpiry` if expiry <= 0 or NaN
    pub fn new(strike: T, expiry: T, payoff_type: PayoffType) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if strike.is_nan() || strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry.is_nan() || expiry <= zero {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            expiry,
            payoff_type,
        })
    }

    /// Creates a European call.
    #[inline]
    pub fn call(strike: T, expiry: T) -> Result<Self, InstrumentError> {
        Self::new(strike, expiry, PayoffType::Call)
    }

    /// Creates a European put.
    #[inline]
    pub fn put(strike: T, expiry: T) -> Result<Self, InstrumentError> {
        Self::new(strike, expiry, PayoffType::Put)
    }

    /// Intrinsic value at expiry for a terminal spot price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::VanillaOption;
    ///
    /// let put = VanillaOption::put(40.0_f64, 1.0).unwrap();
    /// assert_eq!(put.payoff(35.0), 5.0);
    /// ```
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.payoff_type.evaluate(spot, self.strike)
    }

    /// Element-wise payoff over a slice of terminal spots.
    #[inline]
    pub fn payoffs(&self, spots: &[T], out: &mut [T]) {
        self.payoff_type.evaluate_slice(spots, self.strike, out);
    }

    /// Returns the same contract with the opposite payoff kind.
    #[inline]
    pub fn opposite(&self) -> Self {
        Self {
            payoff_type: self.payoff_type.opposite(),
            ..*self
        }
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let option = VanillaOption::new(40.0_f64, 1.0, PayoffType::Call).unwrap();
        assert_eq!(option.strike(), 40.0);
        assert_eq!(option.expiry(), 1.0);
        assert_eq!(option.payoff_type(), PayoffType::Call);
    }

    #[test]
    fn test_invalid_strike() {
        for strike in [0.0_f64, -40.0, f64::NAN] {
            let result = VanillaOption::call(strike, 1.0);
            assert!(matches!(result, Err(InstrumentError::InvalidStrike { .. })));
        }
    }

    #[test]
    fn test_invalid_expiry() {
        for expiry in [0.0_f64, -1.0, f64::NAN] {
            let result = VanillaOption::put(40.0, expiry);
            assert!(matches!(result, Err(InstrumentError::InvalidExpiry { .. })));
        }
    }

    #[test]
    fn test_payoff_delegates_to_type() {
        let call = VanillaOption::call(40.0_f64, 1.0).unwrap();
        let put = VanillaOption::put(40.0_f64, 1.0).unwrap();

        assert_eq!(call.payoff(41.0), 1.0);
        assert_eq!(put.payoff(41.0), 0.0);
        assert_eq!(call.payoff(35.0), 0.0);
        assert_eq!(put.payoff(35.0), 5.0);
    }

    #[test]
    fn test_payoffs_slice() {
        let call = VanillaOption::call(40.0_f64, 1.0).unwrap();
        let mut out = [0.0; 2];
        call.payoffs(&[39.0, 45.0], &mut out);
        assert_eq!(out, [0.0, 5.0]);
    }

    #[test]
    fn test_opposite_keeps_terms() {
        let call = VanillaOption::call(40.0_f64, 2.0).unwrap();
        let put = call.opposite();
        assert_eq!(put.payoff_type(), PayoffType::Put);
        assert_eq!(put.strike(), 40.0);
        assert_eq!(put.expiry(), 2.0);
    }
}
