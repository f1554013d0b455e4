//! Stochastic models for the underlying asset.
//!
//! - [`GbmParams`]: Geometric Brownian motion with continuous dividend yield

pub mod gbm;

pub use gbm::GbmParams;
