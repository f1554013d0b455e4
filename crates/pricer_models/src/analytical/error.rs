//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to closed-form pricing

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidVolatility`: Negative or NaN volatility
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidDividend`: Negative or NaN dividend yield
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (negative).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid dividend yield (negative).
    #[error("Invalid dividend yield: q = {dividend}")]
    InvalidDividend {
        /// The invalid dividend yield
        dividend: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { volatility } => {
                PricingError::invalid("volatility", volatility, "must be non-negative")
            }
            AnalyticalError::InvalidSpot { spot } => {
                PricingError::invalid("spot", spot, "must be positive")
            }
            AnalyticalError::InvalidDividend { dividend } => {
                PricingError::invalid("dividend", dividend, "must be non-negative")
            }
        }
    }
}
