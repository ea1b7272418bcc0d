//! Depth samplers.
//!
//! Two normal variants are kept side by side because they produce different
//! corrected values for the same draw:
//!
//! - [`random_depths_normal`] shifts by `bound / outlier_handling` (default 4)
//! - [`random_depths_normal_halved`] always shifts by `bound / 2`
//!
//! [`random_depths_uniform`] draws directly inside the range and needs no
//! correction.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::correction::{corrected_normal_batch, shift_correct};
use crate::bounds::Bounds;
use crate::error::SamplingError;

/// Default outlier divisor for [`random_depths_normal`].
pub const DEFAULT_OUTLIER_HANDLING: f64 = 4.0;

/// Divisor hard-wired into [`random_depths_normal_halved`].
pub const HALVED_OUTLIER_HANDLING: f64 = 2.0;

/// Applies the depth correction to a single raw draw.
///
/// Below range: `raw + lower / outlier_handling`. Above range:
/// `raw - upper / outlier_handling`.
#[inline]
pub fn correct_depth(raw: f64, bounds: Bounds, outlier_handling: f64) -> f64 {
    shift_correct(
        raw,
        bounds,
        bounds.lower() / outlier_handling,
        bounds.upper() / outlier_handling,
    )
}

/// Generates `n` depths from Normal(mean, std_dev) with a configurable
/// outlier divisor.
///
/// # Errors
///
/// Returns `SamplingError` if:
/// - `mean` is not finite
/// - `std_dev` is negative or not finite
/// - `outlier_handling` is not finite and strictly positive
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::samplers::{random_depths_normal, DEFAULT_OUTLIER_HANDLING};
/// use sampler_core::Bounds;
///
/// let mut rng = SamplerRng::from_seed(1);
/// let bounds = Bounds::new(1000.0, 2000.0).unwrap();
///
/// // 2100 is above 2000, so it drops by 2000 / 4.
/// let depths =
///     random_depths_normal(&mut rng, 2, 2100.0, 0.0, bounds, DEFAULT_OUTLIER_HANDLING).unwrap();
/// assert_eq!(depths, vec![1600.0, 1600.0]);
/// ```
pub fn random_depths_normal<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
    bounds: Bounds,
    outlier_handling: f64,
) -> Result<Vec<f64>, SamplingError> {
    if !(outlier_handling.is_finite() && outlier_handling > 0.0) {
        return Err(SamplingError::InvalidOutlierHandling(outlier_handling));
    }
    corrected_normal_batch(rng, n, mean, std_dev, |raw| {
        correct_depth(raw, bounds, outlier_handling)
    })
}

/// Generates `n` depths from Normal(mean, std_dev), shifting out-of-range
/// draws by half the violated bound.
///
/// Not interchangeable with [`random_depths_normal`] at its default divisor.
///
/// # Errors
///
/// Returns `SamplingError` if `mean` is not finite or `std_dev` is negative or
/// not finite.
pub fn random_depths_normal_halved<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
    bounds: Bounds,
) -> Result<Vec<f64>, SamplingError> {
    random_depths_normal(rng, n, mean, std_dev, bounds, HALVED_OUTLIER_HANDLING)
}

/// Generates `n` depths uniformly over `[lower, upper]`.
///
/// A degenerate interval (`lower == upper`) returns `n` copies of that value.
///
/// # Errors
///
/// Returns `SamplingError::InvalidParameter` if the interval width, scaled
/// to the unit draw `[0, 1 - EPSILON]`, overflows `f64`.
pub fn random_depths_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    bounds: Bounds,
) -> Result<Vec<f64>, SamplingError> {
    // Uniform::new_inclusive panics unless width / (1 - EPSILON) is finite
    if !(bounds.width() / (1.0 - f64::EPSILON)).is_finite() {
        return Err(SamplingError::InvalidParameter {
            name: "bounds".to_string(),
            reason: format!(
                "range [{}, {}] is too wide to sample uniformly",
                bounds.lower(),
                bounds.upper()
            ),
        });
    }

    let uniform = Uniform::new_inclusive(bounds.lower(), bounds.upper());
    let batch: Vec<f64> = (0..n).map(|_| uniform.sample(rng)).collect();

    tracing::debug!(
        n,
        lower = bounds.lower(),
        upper = bounds.upper(),
        "Drew uniform depth batch"
    );
    Ok(batch)
}
