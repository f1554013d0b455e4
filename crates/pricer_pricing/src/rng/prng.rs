//! Seedable standard normal generator.
//!
//! [`PricerRng`] is an explicit handle; nothing in the crate keeps a global
//! generator, so two pricers never share a stream unless a handle is cloned.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Standard normal source for the Monte Carlo engine.
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let z = rng.gen_normal();
///
/// let mut draws = [0.0; 64];
/// rng.fill_normal(&mut draws);
/// assert!(draws.iter().all(|x| x.is_finite()) && z.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl PricerRng {
    /// Deterministic stream for `seed`.
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let (mut a, mut b) = (PricerRng::from_seed(3), PricerRng::from_seed(3));
    /// assert_eq!(a.gen_normal(), b.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Fresh stream from operating system entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is `Some`, entropy-initialised otherwise.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// The construction seed, `None` for entropy-initialised generators.
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// assert_eq!(PricerRng::from_seed(42).seed(), Some(42));
    /// assert_eq!(PricerRng::from_entropy().seed(), None);
    /// ```
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// One N(0, 1) draw (ziggurat, via `rand_distr`).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    /// Overwrites every slot of `out` with an N(0, 1) draw, in order.
    #[inline]
    pub fn fill_normal(&mut self, out: &mut [f64]) {
        out.iter_mut()
            .zip(StandardNormal.sample_iter(&mut self.inner))
            .for_each(|(slot, z)| *slot = z);
    }
}
