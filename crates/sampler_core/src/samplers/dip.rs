//! Dip sampler.

use rand::Rng;

use super::correction::{corrected_normal_batch, shift_correct};
use crate::bounds::Bounds;
use crate::error::SamplingError;

/// Shift applied to out-of-range dips, in degrees.
///
/// A quarter of the default 90 degree range. It does not scale with
/// caller-supplied bounds.
pub const DIP_OFFSET: f64 = 45.0;

/// Applies the dip correction to a single raw draw.
#[inline]
pub fn correct_dip(raw: f64, bounds: Bounds) -> f64 {
    shift_correct(raw, bounds, DIP_OFFSET, DIP_OFFSET)
}

/// Generates `n` dip angles from Normal(mean, std_dev).
///
/// Draws below `bounds.lower()` gain 45 degrees and draws above
/// `bounds.upper()` lose 45 degrees. Use
/// [`DIP_BOUNDS`](crate::bounds::DIP_BOUNDS) for the usual `[0, 90]` range.
///
/// # Errors
///
/// Returns `SamplingError` if `mean` is not finite or `std_dev` is negative or
/// not finite.
///
/// # Examples
///
/// ```rust
/// use sampler_core::bounds::DIP_BOUNDS;
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::samplers::random_dips;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let dips = random_dips(&mut rng, 5, 45.0, 0.0, DIP_BOUNDS).unwrap();
/// assert_eq!(dips, vec![45.0; 5]);
/// ```
pub fn random_dips<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
    bounds: Bounds,
) -> Result<Vec<f64>, SamplingError> {
    corrected_normal_batch(rng, n, mean, std_dev, |raw| correct_dip(raw, bounds))
}
