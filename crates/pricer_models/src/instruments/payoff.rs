//! Payoff type definitions.
//!
//! This module provides the two vanilla payoff kinds (Call, Put) as a
//! tagged enum. Payoffs are exact intrinsic values; there is no smoothing.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Type of option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::Call.evaluate(41.0_f64, 40.0), 1.0);
/// assert_eq!(PayoffType::Put.evaluate(35.0_f64, 40.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Evaluate the intrinsic value for given terminal spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Terminal spot price (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::PayoffType;
    ///
    /// assert_eq!(PayoffType::Put.evaluate(41.0_f64, 40.0), 0.0);
    /// assert_eq!(PayoffType::Call.evaluate(35.0_f64, 40.0), 0.0);
    /// ```
    #[inline]
    pub fn evaluate<T: Float>(&self, spot: T, strike: T) -> T {
        let intrinsic = match self {
            PayoffType::Call => spot - strike,
            PayoffType::Put => strike - spot,
        };
        // NaN inputs propagate
        if intrinsic.is_nan() || intrinsic > T::zero() {
            intrinsic
        } else {
            T::zero()
        }
    }

    /// Evaluate the payoff element-wise over a slice of terminal spots.
    ///
    /// Writes `evaluate(spots[i], strike)` into `out[i]`. Only the common
    /// prefix of the two slices is touched.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::PayoffType;
    ///
    /// let spots = [35.0_f64, 40.0, 41.0];
    /// let mut out = [0.0; 3];
    /// PayoffType::Put.evaluate_slice(&spots, 40.0, &mut out);
    /// assert_eq!(out, [5.0, 0.0, 0.0]);
    /// ```
    #[inline]
    pub fn evaluate_slice<T: Float>(&self, spots: &[T], strike: T, out: &mut [T]) {
        debug_assert_eq!(spots.len(), out.len());
        for (value, &spot) in out.iter_mut().zip(spots) {
            *value = self.evaluate(spot, strike);
        }
    }

    /// Returns whether this payoff is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns whether this payoff is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }

    /// Returns the opposite payoff kind (Call <-> Put).
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            PayoffType::Call => PayoffType::Put,
            PayoffType::Put => PayoffType::Call,
        }
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffType::Call => write!(f, "call"),
            PayoffType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for PayoffType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(PayoffType::Call),
            "put" | "p" => Ok(PayoffType::Put),
            other => Err(InstrumentError::UnknownPayoff {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(PayoffType::Call.evaluate(41.0_f64, 40.0), 1.0);
        assert_eq!(PayoffType::Put.evaluate(41.0_f64, 40.0), 0.0);
        assert_eq!(PayoffType::Call.evaluate(35.0_f64, 40.0), 0.0);
        assert_eq!(PayoffType::Put.evaluate(35.0_f64, 40.0), 5.0);
    }

    #[test]
    fn test_at_the_money_is_zero() {
        assert_eq!(PayoffType::Call.evaluate(100.0_f64, 100.0), 0.0);
        assert_eq!(PayoffType::Put.evaluate(100.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_nan_spot_propagates() {
        for payoff in [PayoffType::Call, PayoffType::Put] {
            assert!(payoff.evaluate(f64::NAN, 40.0).is_nan());
            assert!(payoff.evaluate(41.0, f64::NAN).is_nan());
        }

        let mut out = [0.0; 2];
        PayoffType::Call.evaluate_slice(&[f64::NAN, 41.0], 40.0, &mut out);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 1.0);
    }

    #[test]
    fn test_infinite_spot_propagates() {
        assert_eq!(PayoffType::Call.evaluate(f64::INFINITY, 40.0), f64::INFINITY);
        assert_eq!(PayoffType::Put.evaluate(f64::INFINITY, 40.0), 0.0);
    }

    #[test]
    fn test_evaluate_slice() {
        let spots = [30.0_f64, 40.0, 50.0];
        let mut out = [f64::NAN; 3];
        PayoffType::Call.evaluate_slice(&spots, 40.0, &mut out);
        assert_eq!(out, [0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_evaluate_slice_empty() {
        let spots: [f64; 0] = [];
        let mut out: [f64; 0] = [];
        PayoffType::Put.evaluate_slice(&spots, 40.0, &mut out);
    }

    #[test]
    fn test_f32_compatibility() {
        let payoff = PayoffType::Call.evaluate(110.0_f32, 100.0_f32);
        assert_relative_eq!(payoff, 10.0_f32);
    }

    #[test]
    fn test_is_call_is_put() {
        assert!(PayoffType::Call.is_call());
        assert!(!PayoffType::Call.is_put());
        assert!(PayoffType::Put.is_put());
        assert!(!PayoffType::Put.is_call());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(PayoffType::Call.opposite(), PayoffType::Put);
        assert_eq!(PayoffType::Put.opposite(), PayoffType::Call);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("call".parse::<PayoffType>().unwrap(), PayoffType::Call);
        assert_eq!("PUT".parse::<PayoffType>().unwrap(), PayoffType::Put);
        assert_eq!(" c ".parse::<PayoffType>().unwrap(), PayoffType::Call);
        assert!("straddle".parse::<PayoffType>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for payoff in [PayoffType::Call, PayoffType::Put] {
            assert_eq!(payoff.to_string().parse::<PayoffType>().unwrap(), payoff);
        }
    }

    proptest! {
        #[test]
        fn prop_payoffs_are_non_negative(spot in 0.0f64..1_000.0, strike in 0.01f64..1_000.0) {
            prop_assert!(PayoffType::Call.evaluate(spot, strike) >= 0.0);
            prop_assert!(PayoffType::Put.evaluate(spot, strike) >= 0.0);
        }

        #[test]
        fn prop_call_minus_put_is_forward_payoff(spot in 0.0f64..1_000.0, strike in 0.01f64..1_000.0) {
            let call = PayoffType::Call.evaluate(spot, strike);
            let put = PayoffType::Put.evaluate(spot, strike);
            prop_assert!((call - put - (spot - strike)).abs() < 1e-9);
        }
    }
}
