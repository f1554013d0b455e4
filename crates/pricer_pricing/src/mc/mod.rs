//! Naive Monte Carlo pricing for European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (n_paths, n_steps, seed)
//! ├── PathWorkspace     (pre-allocated draw and payoff buffers)
//! ├── PricerRng         (standard normal draws)
//! └── simulate()
//!     ├── terminal spot per draw (exact lognormal step)
//!     ├── VanillaOption::payoffs()
//!     └── discounted mean and standard error
//! ```
//!
//! # Workspace Reuse
//!
//! Buffers are allocated once per pricer and reused across calls:
//!
//! ```rust
//! use pricer_models::instruments::VanillaOption;
//! use pricer_models::models::GbmParams;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//! let market = GbmParams::default();
//!
//! let call = pricer.price_european(&market, &VanillaOption::call(100.0, 1.0).unwrap()).unwrap();
//! let put = pricer.price_european(&market, &VanillaOption::put(100.0, 1.0).unwrap()).unwrap();
//! assert!(call.price > put.price);
//! ```

mod config;
mod error;
mod pricer;
mod workspace;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use error::ConfigError;
pub use pricer::{price_monte_carlo, MonteCarloPricer, PricingResult};
pub use workspace::PathWorkspace;
