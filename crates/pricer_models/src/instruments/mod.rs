//! Financial instrument definitions.
//!
//! # Instrument Types
//!
//! - [`VanillaOption`]: European option with a Call or Put payoff
//! - [`PayoffType`]: Tagged payoff kind shared by every pricer
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{PayoffType, VanillaOption};
//!
//! let call = VanillaOption::new(100.0_f64, 1.0, PayoffType::Call).unwrap();
//! assert_eq!(call.payoff(110.0), 10.0);
//! ```

mod error;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use payoff::PayoffType;
pub use vanilla::VanillaOption;
