//! Validated sampling ranges.
//!
//! A [`Bounds`] is a closed interval `[lower, upper]` with finite end points
//! and `lower <= upper`. The shift-correcting samplers use it to decide when
//! a raw draw is out of range; the uniform and rejection samplers use it as
//! the draw or acceptance interval.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, SamplingError};

/// Default strike range in degrees.
pub const STRIKE_BOUNDS: Bounds = Bounds {
    lower: 0.0,
    upper: 360.0,
};

/// Default dip range in degrees.
pub const DIP_BOUNDS: Bounds = Bounds {
    lower: 0.0,
    upper: 90.0,
};

/// Closed interval `[lower, upper]`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::Bounds;
///
/// let bounds = Bounds::new(100.0, 2500.0).unwrap();
/// assert_eq!(bounds.lower(), 100.0);
/// assert!(bounds.contains(2500.0));
///
/// assert!(Bounds::new(5.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError` if:
    /// - either end point is NaN or infinite
    /// - `lower > upper`
    pub fn new(lower: f64, upper: f64) -> Result<Self, SamplingError> {
        let lower = ensure_finite("lower_bound", lower)?;
        let upper = ensure_finite("upper_bound", upper)?;
        if lower > upper {
            return Err(SamplingError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower end point.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper end point.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `upper - lower`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `lower <= value <= upper`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Unchecked serde form of [`Bounds`].
#[derive(Serialize, Deserialize)]
struct RawBounds {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = SamplingError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Bounds::new(raw.lower, raw.upper)
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        Self {
            lower: bounds.lower,
            upper: bounds.upper,
        }
    }
}
