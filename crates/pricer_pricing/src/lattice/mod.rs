//! Lattice pricing for European options.
//!
//! # Architecture
//!
//! ```text
//! BinomialPricer
//! ├── LatticeFactors  (h, u, d, p*)
//! ├── BinomialPmf     (terminal node weights, pricer_core)
//! └── PayoffType      (terminal intrinsic value, pricer_models)
//! ```
//!
//! Cost is O(steps): only terminal nodes are visited.

pub mod binomial;

pub use binomial::{price_binomial, BinomialPricer, LatticeFactors};
