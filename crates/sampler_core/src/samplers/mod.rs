//! Sampling operations.
//!
//! Two families live here:
//!
//! - **Shift-corrected normal samplers** ([`random_strikes`], [`random_dips`],
//!   [`random_depths_normal`], [`random_depths_normal_halved`]): draw from a
//!   normal distribution, then move each out-of-range draw by a fixed amount.
//!   The move is a single shift, not a clamp or a wrap, so a corrected value
//!   can still land outside the bounds.
//! - **Range-exact samplers** ([`random_depths_uniform`],
//!   [`random_aperture_lognormal`]): every returned value lies inside the
//!   requested interval.
//!
//! All samplers validate their parameters before drawing and return a fresh
//! `Vec<f64>` of exactly the requested length. A count of zero yields an
//! empty batch without consuming randomness.

mod aperture;
mod correction;
mod depth;
mod dip;
mod strike;

pub use aperture::{random_aperture_lognormal, DEFAULT_ATTEMPTS_PER_VALUE};
pub use correction::shift_correct;
pub use depth::{
    correct_depth, random_depths_normal, random_depths_normal_halved, random_depths_uniform,
    DEFAULT_OUTLIER_HANDLING, HALVED_OUTLIER_HANDLING,
};
pub use dip::{correct_dip, random_dips, DIP_OFFSET};
pub use strike::{correct_strike, random_strikes, STRIKE_OFFSET};
