//! Error types for sampling operations.
//!
//! This module provides [`SamplingError`], raised when sampler parameters are
//! rejected up front or when the bounded rejection sampler gives up.

use thiserror::Error;

/// Categorised sampling errors.
///
/// Parameters are validated before any value is drawn, so a returned error
/// never leaves a partially advanced random source behind, except for
/// [`SamplingError::AttemptsExhausted`] which is only known after drawing.
///
/// # Examples
/// ```
/// use sampler_core::SamplingError;
///
/// let err = SamplingError::InvalidBounds { lower: 10.0, upper: 5.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid bounds: lower 10 exceeds upper 5"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Standard deviation is negative or not finite.
    #[error("Invalid standard deviation {0}: must be finite and non-negative")]
    InvalidStdDev(f64),

    /// A location parameter or bound is NaN or infinite.
    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Lower bound lies above the upper bound.
    #[error("Invalid bounds: lower {lower} exceeds upper {upper}")]
    InvalidBounds {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// Depth outlier divisor is zero, negative or not finite.
    #[error("Invalid outlier handling divisor {0}: must be finite and positive")]
    InvalidOutlierHandling(f64),

    /// The rejection sampler's acceptance region cannot contain any draw.
    #[error("Empty acceptance region [{min_limit}, {max_limit}] for lognormal draws")]
    EmptyAcceptanceRegion {
        /// Minimum accepted value.
        min_limit: f64,
        /// Maximum accepted value.
        max_limit: f64,
    },

    /// The rejection sampler hit its attempt limit before collecting enough values.
    #[error("Rejection sampling exhausted after {attempts} attempts: accepted {accepted} of {requested}")]
    AttemptsExhausted {
        /// Values accepted before giving up.
        accepted: usize,
        /// Values requested.
        requested: usize,
        /// Draws performed.
        attempts: usize,
    },

    /// An explicit attempt limit of zero was given for a non-empty request.
    #[error("Invalid attempt limit: must allow at least one draw")]
    InvalidAttemptLimit,

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Description of the problem.
        reason: String,
    },
}

/// Rejects NaN and infinite values.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, SamplingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SamplingError::NonFiniteParameter { name, value })
    }
}

/// Rejects negative and non-finite standard deviations. Zero is allowed and
/// yields a degenerate distribution.
pub(crate) fn ensure_std_dev(std_dev: f64) -> Result<f64, SamplingError> {
    if std_dev.is_finite() && std_dev >= 0.0 {
        Ok(std_dev)
    } else {
        Err(SamplingError::InvalidStdDev(std_dev))
    }
}
