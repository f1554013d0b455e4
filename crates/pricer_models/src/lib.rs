//! # Pricer Models (L2: Business Logic)
//!
//! Option payoffs, market parameters and closed-form reference prices.
//!
//! This crate provides:
//! - Instrument definitions (European vanilla options)
//! - Call/Put payoff functions
//! - Geometric Brownian motion market parameters
//! - Black-Scholes-Merton formulas for validation
//! - Put-call parity helpers
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs** for static dispatch
//! - **Validated constructors** returning structured errors
//! - **Generic over `T: Float`** where the arithmetic allows it

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
