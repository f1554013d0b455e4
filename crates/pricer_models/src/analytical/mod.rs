//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form references for validating the
//! numerical pricers:
//! - Black-Scholes-Merton model with continuous dividend yield
//! - Standard normal CDF
//! - Put-call parity helpers

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod parity;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
pub use parity::{parity_residual, parity_value};
