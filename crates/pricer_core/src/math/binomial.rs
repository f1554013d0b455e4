//! Binomial probability mass function.
//!
//! A recombining lattice with `n` steps reaches its terminal node `k` with
//! probability `C(n, k) p^k (1 - p)^(n - k)`, where `k` counts up-moves.
//! Evaluation is delegated to `statrs`, which works in log-space and stays
//! accurate for several thousand trials.

use statrs::distribution::{Binomial, Discrete};

use crate::types::PricingError;

/// Binomial distribution with a fixed trial count and success probability.
///
/// Construct once per lattice and query every terminal node.
///
/// # Examples
/// ```
/// use pricer_core::math::BinomialPmf;
///
/// let pmf = BinomialPmf::new(4, 0.5).unwrap();
/// assert!((pmf.pmf(2) - 0.375).abs() < 1e-12);
/// assert_eq!(pmf.trials(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialPmf {
    inner: Binomial,
    trials: u64,
    probability: f64,
}

impl BinomialPmf {
    /// Creates the distribution for `trials` draws with success probability `p`.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `p` is NaN or outside `[0, 1]`.
    pub fn new(trials: u64, p: f64) -> Result<Self, PricingError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(PricingError::invalid(
                "probability",
                p,
                "must lie in [0, 1]",
            ));
        }

        let inner = Binomial::new(p, trials)
            .map_err(|e| PricingError::invalid("probability", p, &e.to_string()))?;

        Ok(Self {
            inner,
            trials,
            probability: p,
        })
    }

    /// Probability of exactly `successes` successes. Zero when `successes > trials`.
    #[inline]
    pub fn pmf(&self, successes: u64) -> f64 {
        self.inner.pmf(successes)
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Returns the success probability.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Evaluates the binomial probability mass function.
///
/// # Arguments
/// * `successes` - Number of successes `k`
/// * `trials` - Number of trials `n`
/// * `p` - Success probability
///
/// # Examples
/// ```
/// use pricer_core::math::binomial_pmf;
///
/// let p = binomial_pmf(1, 2, 0.5).unwrap();
/// assert!((p - 0.5).abs() < 1e-12);
/// ```
pub fn binomial_pmf(successes: u64, trials: u64, p: f64) -> Result<f64, PricingError> {
    Ok(BinomialPmf::new(trials, p)?.pmf(successes))
}
