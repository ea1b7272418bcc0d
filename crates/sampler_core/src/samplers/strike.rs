//! Strike sampler.

use rand::Rng;

use super::correction::{corrected_normal_batch, shift_correct};
use crate::bounds::Bounds;
use crate::error::SamplingError;

/// Shift applied to out-of-range strikes, in degrees.
pub const STRIKE_OFFSET: f64 = 180.0;

/// Applies the strike correction to a single raw draw.
#[inline]
pub fn correct_strike(raw: f64, bounds: Bounds) -> f64 {
    shift_correct(raw, bounds, STRIKE_OFFSET, STRIKE_OFFSET)
}

/// Generates `n` strike angles from Normal(mean, std_dev).
///
/// Draws below `bounds.lower()` are shifted up by 180 degrees and draws above
/// `bounds.upper()` are shifted down by 180 degrees. The shift is independent
/// of `bounds`; pass [`STRIKE_BOUNDS`](crate::bounds::STRIKE_BOUNDS) for the
/// usual `[0, 360]` range.
///
/// # Errors
///
/// Returns `SamplingError` if `mean` is not finite or `std_dev` is negative or
/// not finite.
///
/// # Examples
///
/// ```rust
/// use sampler_core::bounds::STRIKE_BOUNDS;
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::samplers::random_strikes;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let strikes = random_strikes(&mut rng, 1, 370.0, 0.0, STRIKE_BOUNDS).unwrap();
/// assert_eq!(strikes, vec![190.0]);
/// ```
pub fn random_strikes<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std_dev: f64,
    bounds: Bounds,
) -> Result<Vec<f64>, SamplingError> {
    corrected_normal_batch(rng, n, mean, std_dev, |raw| correct_strike(raw, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::STRIKE_BOUNDS;
    use crate::rng::SamplerRng;
    use rand_distr::{Distribution, Normal};

    #[test]
    fn test_strike_above_upper_shifts_down() {
        let mut rng = SamplerRng::from_seed(0);
        let strikes = random_strikes(&mut rng, 1, 370.0, 0.0, STRIKE_BOUNDS).unwrap();
        assert_eq!(strikes, vec![190.0]);
    }

    #[test]
    fn test_strike_below_lower_shifts_up() {
        let mut rng = SamplerRng::from_seed(0);
        let strikes = random_strikes(&mut rng, 2, -20.0, 0.0, STRIKE_BOUNDS).unwrap();
        assert_eq!(strikes, vec![160.0, 160.0]);
    }

    #[test]
    fn test_strike_matches_raw_draws() {
        let (mean, std_dev) = (350.0, 30.0);
        let mut rng = SamplerRng::from_seed(2024);
        let mut replay = SamplerRng::from_seed(2024);
        let normal = Normal::new(mean, std_dev).unwrap();

        let strikes = random_strikes(&mut rng, 500, mean, std_dev, STRIKE_BOUNDS).unwrap();

        for value in strikes {
            let raw: f64 = normal.sample(&mut replay);
            if raw > 360.0 {
                assert_eq!(value, raw - 180.0);
            } else if raw < 0.0 {
                assert_eq!(value, raw + 180.0);
            } else {
                assert_eq!(value, raw);
            }
        }
    }

    #[test]
    fn test_strike_custom_bounds_keep_fixed_offset() {
        let bounds = Bounds::new(10.0, 20.0).unwrap();
        assert_eq!(correct_strike(25.0, bounds), -155.0);
        assert_eq!(correct_strike(5.0, bounds), 185.0);
    }

    #[test]
    fn test_strike_zero_count() {
        let mut rng = SamplerRng::from_seed(0);
        assert!(random_strikes(&mut rng, 0, 90.0, 5.0, STRIKE_BOUNDS)
            .unwrap()
            .is_empty());
    }
}
