//! Seeded pseudo-random number generator for sampling batches.
//!
//! This module provides [`SamplerRng`], a `StdRng` wrapper that remembers the
//! seed it was initialised with.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seeded random source for the samplers.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::samplers::random_depths_uniform;
/// use sampler_core::Bounds;
///
/// let bounds = Bounds::new(100.0, 500.0).unwrap();
///
/// let mut rng1 = SamplerRng::from_seed(7);
/// let mut rng2 = SamplerRng::from_seed(7);
///
/// assert_eq!(
///     random_depths_uniform(&mut rng1, 10, bounds).unwrap(),
///     random_depths_uniform(&mut rng2, 10, bounds).unwrap(),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SamplerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (kept so batches can be reproduced).
    seed: u64,
}

impl SamplerRng {
    /// Creates a new random source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new random source from a seed drawn from OS entropy.
    ///
    /// The drawn seed is still recorded and available through
    /// [`SamplerRng::seed`], so the batch can be reproduced later.
    pub fn from_entropy() -> Self {
        let seed = StdRng::from_entropy().next_u64();
        tracing::debug!(seed, "Seeded sampler RNG from entropy");
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::rng::SamplerRng;
    ///
    /// let rng = SamplerRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SamplerRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
