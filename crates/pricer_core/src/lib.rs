//! # pricer_core: Foundation for the European Option Pricers
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Error types: `PricingError` (`types::error`)
//! - Binomial probability mass function used by the lattice pricer (`math::binomial`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Binomial distribution
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::binomial_pmf;
//! use pricer_core::types::PricingError;
//!
//! // Two heads out of two fair tosses
//! let p = binomial_pmf(2, 2, 0.5).unwrap();
//! assert!((p - 0.25).abs() < 1e-12);
//!
//! // Probabilities outside [0, 1] are rejected
//! let err = binomial_pmf(1, 2, 1.5).unwrap_err();
//! assert!(matches!(err, PricingError::InvalidParameter { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
