//! Random number generation for the Monte Carlo engine.
//!
//! The engine needs one thing: standard normal draws, either replayable
//! from a seed or fresh from entropy. [`PricerRng`] provides both and fills
//! caller-owned slices so the hot loop never allocates.
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut seeded = PricerRng::from_seed(2024);
//! let mut draws = vec![0.0; 256];
//! seeded.fill_normal(&mut draws);
//!
//! let mut replay = PricerRng::from_seed(2024);
//! assert_eq!(replay.gen_normal(), draws[0]);
//! ```

mod prng;

pub use prng::PricerRng;
