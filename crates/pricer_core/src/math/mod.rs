//! Probability primitives used by the pricing kernels.
//!
//! This module provides:
//! - `binomial`: Binomial probability mass function over lattice up-move counts

pub mod binomial;

pub use binomial::{binomial_pmf, BinomialPmf};
