//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations

use std::fmt;

/// Categorised pricing errors.
///
/// Invalid inputs are reported immediately rather than being allowed to
/// propagate through the numerics as NaN. Overflow for extreme but valid
/// inputs is not an error and surfaces as a non-finite price instead.
///
/// # Variants
/// - `InvalidParameter`: A named input is outside its valid domain
/// - `NumericalInstability`: Computation produced a non-finite intermediate
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "expiry",
///     value: "-1 (must be positive)".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'expiry': -1 (must be positive)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PricingError {
    /// A named input parameter is outside its valid domain.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidParameter`].
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingError;
    ///
    /// let err = PricingError::invalid("steps", 0, "must be at least 1");
    /// assert_eq!(err.to_string(), "Invalid parameter 'steps': 0 (must be at least 1)");
    /// ```
    pub fn invalid(name: &'static str, value: impl fmt::Display, reason: &str) -> Self {
        PricingError::InvalidParameter {
            name,
            value: format!("{} ({})", value, reason),
        }
    }

    /// Returns the offending parameter name for `InvalidParameter` errors.
    #[inline]
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            PricingError::InvalidParameter { name, .. } => Some(name),
            PricingError::NumericalInstability(_) => None,
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}
