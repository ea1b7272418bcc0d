//! Out-of-range shift correction shared by the normal samplers.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::bounds::Bounds;
use crate::error::{ensure_finite, ensure_std_dev, SamplingError};

/// Moves a raw draw back towards `bounds` by a single fixed shift.
///
/// - `raw < lower`: returns `raw + below_shift`
/// - `raw > upper`: returns `raw - above_shift`
/// - otherwise: returns `raw` unchanged
///
/// # Examples
///
/// ```rust
/// use sampler_core::samplers::shift_correct;
/// use sampler_core::Bounds;
///
/// let bounds = Bounds::new(0.0, 10.0).unwrap();
/// assert_eq!(shift_correct(-1.0, bounds, 3.0, 4.0), 2.0);
/// assert_eq!(shift_correct(12.0, bounds, 3.0, 4.0), 8.0);
/// assert_eq!(shift_correct(5.0, bounds, 3.0, 4.0), 5.0);
/// ```
#[inline]
pub fn shift_correct(raw: f64, bounds: Bounds, below_shift: f64, above_shift: f64) -> f64 {
    if raw < bounds.lower() {
        raw + below_shift
    } else if raw > bounds.upper() {
        raw - above_shift
    } else {
        raw
    }
}

/// Draws `n` values from Normal(mean, std_dev) and maps each through `correct`.
pub(crate) fn corrected_normal_batch<R, F>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
    correct: F,
) -> Result<Vec<f64>, SamplingError>
where
    R: Rng + ?Sized,
    F: Fn(f64) -> f64,
{
    let mean = ensure_finite("mean", mean)?;
    let std_dev = ensure_std_dev(std_dev)?;
    let normal = Normal::new(mean, std_dev).map_err(|_| SamplingError::InvalidStdDev(std_dev))?;

    let mut corrected = 0usize;
    let batch: Vec<f64> = (0..n)
        .map(|_| {
            let raw = normal.sample(rng);
            let value = correct(raw);
            if value != raw {
                corrected += 1;
            }
            value
        })
        .collect();

    tracing::debug!(n, mean, std_dev, corrected, "Drew corrected normal batch");
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SamplerRng;

    #[test]
    fn test_shift_correct_inside_is_identity() {
        let bounds = Bounds::new(0.0, 360.0).unwrap();
        for raw in [0.0, 0.1, 180.0, 359.9, 360.0] {
            assert_eq!(shift_correct(raw, bounds, 180.0, 180.0), raw);
        }
    }

    #[test]
    fn test_shift_correct_may_overshoot() {
        // A single shift is not a clamp.
        let bounds = Bounds::new(0.0, 90.0).unwrap();
        assert_eq!(shift_correct(-100.0, bounds, 45.0, 45.0), -55.0);
        assert_eq!(shift_correct(200.0, bounds, 45.0, 45.0), 155.0);
    }

    #[test]
    fn test_batch_zero_std_dev_is_constant() {
        let mut rng = SamplerRng::from_seed(1);
        let batch = corrected_normal_batch(&mut rng, 4, 2.5, 0.0, |v| v).unwrap();
        assert_eq!(batch, vec![2.5; 4]);
    }

    #[test]
    fn test_batch_rejects_bad_parameters() {
        let mut rng = SamplerRng::from_seed(1);
        assert_eq!(
            corrected_normal_batch(&mut rng, 4, 0.0, -1.0, |v| v),
            Err(SamplingError::InvalidStdDev(-1.0))
        );
        assert!(matches!(
            corrected_normal_batch(&mut rng, 4, f64::NAN, 1.0, |v| v),
            Err(SamplingError::NonFiniteParameter { name: "mean", .. })
        ));
    }
}
