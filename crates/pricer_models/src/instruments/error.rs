//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Expiry time is non-positive
/// - `UnknownPayoff`: Payoff name could not be parsed
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Unrecognised payoff name.
    #[error("Unknown payoff type '{name}': expected 'call' or 'put'")]
    UnknownPayoff {
        /// The name that failed to parse
        name: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidStrike { strike } => {
                PricingError::invalid("strike", strike, "must be positive")
            }
            InstrumentError::InvalidExpiry { expiry } => {
                PricingError::invalid("expiry", expiry, "must be positive")
            }
            InstrumentError::UnknownPayoff { name } => {
                PricingError::invalid("payoff", name, "expected 'call' or 'put'")
            }
        }
    }
}
