//! # Pricer Pricing (Layer 3: Engines)
//!
//! Numerical pricing engines for European vanilla options under GBM:
//! - [`lattice`]: exact-sum binomial lattice (deterministic)
//! - [`mc`]: naive Monte Carlo with a standard error estimate
//! - [`rng`]: seeded or entropy-initialised normal generator
//!
//! Both engines take market data from [`pricer_models::models::GbmParams`]
//! and contract terms from [`pricer_models::instruments::VanillaOption`].
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::VanillaOption;
//! use pricer_models::models::GbmParams;
//! use pricer_pricing::{BinomialPricer, MonteCarloConfig, MonteCarloPricer};
//!
//! let market = GbmParams::new(41.0, 0.08, 0.3, 0.0).unwrap();
//! let call = VanillaOption::call(40.0, 1.0).unwrap();
//!
//! let lattice = BinomialPricer::new(500).unwrap().price(&market, &call).unwrap();
//!
//! let config = MonteCarloConfig::builder().n_paths(100_000).seed(1).build().unwrap();
//! let mc = MonteCarloPricer::new(config).unwrap().price_european(&market, &call).unwrap();
//!
//! assert!((lattice - mc.price).abs() < 5.0 * mc.std_error + 0.01);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lattice;
pub mod mc;
pub mod rng;

pub use lattice::{price_binomial, BinomialPricer};
pub use mc::{price_monte_carlo, MonteCarloConfig, MonteCarloPricer, PricingResult};
pub use rng::PricerRng;
