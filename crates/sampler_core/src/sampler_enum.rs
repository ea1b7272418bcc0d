//! Static dispatch over the available samplers.
//!
//! [`SamplerKind`] names one sampler together with its parameters. It is the
//! unit a sampling plan is made of and deserialises from a flat table such as:
//!
//! ```toml
//! sampler = "depth_normal"
//! n = 200
//! mean = 1500.0
//! std_dev = 300.0
//! lower_bound = 1000.0
//! upper_bound = 2500.0
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, DIP_BOUNDS, STRIKE_BOUNDS};
use crate::error::SamplingError;
use crate::samplers::{
    random_aperture_lognormal, random_depths_normal, random_depths_normal_halved,
    random_depths_uniform, random_dips, random_strikes, DEFAULT_OUTLIER_HANDLING,
};

fn default_strike_lower() -> f64 {
    STRIKE_BOUNDS.lower()
}

fn default_strike_upper() -> f64 {
    STRIKE_BOUNDS.upper()
}

fn default_dip_lower() -> f64 {
    DIP_BOUNDS.lower()
}

fn default_dip_upper() -> f64 {
    DIP_BOUNDS.upper()
}

fn default_outlier_handling() -> f64 {
    DEFAULT_OUTLIER_HANDLING
}

/// A sampler selection with its parameters.
///
/// Uses enum dispatch rather than trait objects so a plan is plain data.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::SamplerKind;
///
/// let kind = SamplerKind::Dip {
///     n: 5,
///     mean: 45.0,
///     std_dev: 0.0,
///     lower_bound: 0.0,
///     upper_bound: 90.0,
/// };
///
/// let mut rng = SamplerRng::from_seed(1);
/// assert_eq!(kind.sample(&mut rng).unwrap(), vec![45.0; 5]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sampler", rename_all = "snake_case", deny_unknown_fields)]
pub enum SamplerKind {
    /// Normal strikes with ±180 correction.
    Strike {
        /// Number of values.
        n: usize,
        /// Mean strike in degrees.
        mean: f64,
        /// Standard deviation in degrees.
        std_dev: f64,
        /// Lower bound (default 0).
        #[serde(default = "default_strike_lower")]
        lower_bound: f64,
        /// Upper bound (default 360).
        #[serde(default = "default_strike_upper")]
        upper_bound: f64,
    },

    /// Normal dips with ±45 correction.
    Dip {
        /// Number of values.
        n: usize,
        /// Mean dip in degrees.
        mean: f64,
        /// Standard deviation in degrees.
        std_dev: f64,
        /// Lower bound (default 0).
        #[serde(default = "default_dip_lower")]
        lower_bound: f64,
        /// Upper bound (default 90).
        #[serde(default = "default_dip_upper")]
        upper_bound: f64,
    },

    /// Normal depths shifted by `bound / outlier_handling`.
    DepthNormal {
        /// Number of values.
        n: usize,
        /// Mean depth.
        mean: f64,
        /// Standard deviation.
        std_dev: f64,
        /// Lower bound.
        lower_bound: f64,
        /// Upper bound.
        upper_bound: f64,
        /// Outlier divisor (default 4).
        #[serde(default = "default_outlier_handling")]
        outlier_handling: f64,
    },

    /// Normal depths shifted by `bound / 2`.
    DepthNormalHalved {
        /// Number of values.
        n: usize,
        /// Mean depth.
        mean: f64,
        /// Standard deviation.
        std_dev: f64,
        /// Lower bound.
        lower_bound: f64,
        /// Upper bound.
        upper_bound: f64,
    },

    /// Uniform depths over `[lower_bound, upper_bound]`.
    DepthUniform {
        /// Number of values.
        n: usize,
        /// Lower bound.
        lower_bound: f64,
        /// Upper bound.
        upper_bound: f64,
    },

    /// Lognormal apertures by bounded rejection sampling.
    ApertureLognormal {
        /// Number of values.
        num_values: usize,
        /// Mean of the underlying normal.
        mean: f64,
        /// Standard deviation of the underlying normal.
        std_dev: f64,
        /// Smallest accepted aperture.
        min_limit: f64,
        /// Largest accepted aperture.
        max_limit: f64,
        /// Total draw limit.
        #[serde(default)]
        max_attempts: Option<usize>,
    },
}

impl SamplerKind {
    /// Returns the snake_case sampler name used in plans.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strike { .. } => "strike",
            Self::Dip { .. } => "dip",
            Self::DepthNormal { .. } => "depth_normal",
            Self::DepthNormalHalved { .. } => "depth_normal_halved",
            Self::DepthUniform { .. } => "depth_uniform",
            Self::ApertureLognormal { .. } => "aperture_lognormal",
        }
    }

    /// Returns the number of values this sampler will produce.
    pub fn count(&self) -> usize {
        match *self {
            Self::Strike { n, .. }
            | Self::Dip { n, .. }
            | Self::DepthNormal { n, .. }
            | Self::DepthNormalHalved { n, .. }
            | Self::DepthUniform { n, .. } => n,
            Self::ApertureLognormal { num_values, .. } => num_values,
        }
    }

    /// Fills in an aperture draw limit of `num_values * attempts_per_value`
    /// when none was given. Other samplers are returned unchanged.
    pub fn with_attempt_budget(self, attempts_per_value: usize) -> Self {
        match self {
            Self::ApertureLognormal {
                num_values,
                mean,
                std_dev,
                min_limit,
                max_limit,
                max_attempts: None,
            } => Self::ApertureLognormal {
                num_values,
                mean,
                std_dev,
                min_limit,
                max_limit,
                max_attempts: Some(num_values.saturating_mul(attempts_per_value)),
            },
            other => other,
        }
    }

    /// Runs the sampler.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError` if the bounds are invalid or the underlying
    /// sampler rejects its parameters.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>, SamplingError> {
        match *self {
            Self::Strike {
                n,
                mean,
                std_dev,
                lower_bound,
                upper_bound,
            } => random_strikes(rng, n, mean, std_dev, Bounds::new(lower_bound, upper_bound)?),
            Self::Dip {
                n,
                mean,
                std_dev,
                lower_bound,
                upper_bound,
            } => random_dips(rng, n, mean, std_dev, Bounds::new(lower_bound, upper_bound)?),
            Self::DepthNormal {
                n,
                mean,
                std_dev,
                lower_bound,
                upper_bound,
                outlier_handling,
            } => random_depths_normal(
                rng,
                n,
                mean,
                std_dev,
                Bounds::new(lower_bound, upper_bound)?,
                outlier_handling,
            ),
            Self::DepthNormalHalved {
                n,
                mean,
                std_dev,
                lower_bound,
                upper_bound,
            } => random_depths_normal_halved(
                rng,
                n,
                mean,
                std_dev,
                Bounds::new(lower_bound, upper_bound)?,
            ),
            Self::DepthUniform {
                n,
                lower_bound,
                upper_bound,
            } => random_depths_uniform(rng, n, Bounds::new(lower_bound, upper_bound)?),
            Self::ApertureLognormal {
                num_values,
                mean,
                std_dev,
                min_limit,
                max_limit,
                max_attempts,
            } => random_aperture_lognormal(
                rng,
                mean,
                std_dev,
                Bounds::new(min_limit, max_limit)?,
                num_values,
                max_attempts,
            ),
        }
    }
}
