//! Aperture sampler (bounded rejection sampling).

use rand::Rng;
use rand_distr::{Distribution, LogNormal};

use crate::bounds::Bounds;
use crate::error::{ensure_finite, ensure_std_dev, SamplingError};

/// Draws allowed per requested value when no explicit limit is given.
pub const DEFAULT_ATTEMPTS_PER_VALUE: usize = 10_000;

/// Generates `num_values` fracture apertures from LogNormal(mean, std_dev),
/// keeping only draws inside `limits`.
///
/// `mean` and `std_dev` parameterise the underlying normal distribution.
/// Every returned value satisfies `limits.lower() <= v <= limits.upper()`.
///
/// At most `max_attempts` draws are made in total. `None` allows
/// `num_values * DEFAULT_ATTEMPTS_PER_VALUE` draws (saturating).
///
/// # Errors
///
/// Returns `SamplingError` if:
/// - `mean` is not finite, or `std_dev` is negative or not finite
/// - `max_attempts` is `Some(0)` while values are requested
/// - the acceptance region is provably empty: `limits.upper() <= 0`, or
///   `std_dev == 0` and `exp(mean)` lies outside `limits`
/// - the attempt limit is reached first (`AttemptsExhausted`, reporting how
///   many values had been accepted)
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::samplers::random_aperture_lognormal;
/// use sampler_core::Bounds;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let limits = Bounds::new(0.5, 2.0).unwrap();
///
/// let apertures = random_aperture_lognormal(&mut rng, 0.0, 0.0, limits, 3, None).unwrap();
/// assert_eq!(apertures, vec![1.0, 1.0, 1.0]);
/// ```
pub fn random_aperture_lognormal<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    limits: Bounds,
    num_values: usize,
    max_attempts: Option<usize>,
) -> Result<Vec<f64>, SamplingError> {
    let mean = ensure_finite("mean", mean)?;
    let std_dev = ensure_std_dev(std_dev)?;

    if num_values == 0 {
        return Ok(Vec::new());
    }

    let empty_region = SamplingError::EmptyAcceptanceRegion {
        min_limit: limits.lower(),
        max_limit: limits.upper(),
    };
    if limits.upper() <= 0.0 {
        return Err(empty_region);
    }
    if std_dev == 0.0 && !limits.contains(mean.exp()) {
        return Err(empty_region);
    }

    let max_attempts = match max_attempts {
        Some(0) => return Err(SamplingError::InvalidAttemptLimit),
        Some(limit) => limit,
        None => num_values.saturating_mul(DEFAULT_ATTEMPTS_PER_VALUE),
    };

    let lognormal =
        LogNormal::new(mean, std_dev).map_err(|_| SamplingError::InvalidStdDev(std_dev))?;

    let mut accepted = Vec::with_capacity(num_values);
    let mut attempts = 0usize;
    while accepted.len() < num_values {
        if attempts == max_attempts {
            tracing::warn!(
                accepted = accepted.len(),
                requested = num_values,
                attempts,
                "Aperture rejection sampling exhausted its attempt limit"
            );
            return Err(SamplingError::AttemptsExhausted {
                accepted: accepted.len(),
                requested: num_values,
                attempts,
            });
        }
        attempts += 1;

        let value = lognormal.sample(rng);
        if limits.contains(value) {
            accepted.push(value);
        }
    }

    tracing::debug!(
        num_values,
        attempts,
        acceptance_rate = num_values as f64 / attempts as f64,
        "Drew lognormal aperture batch"
    );
    Ok(accepted)
}
