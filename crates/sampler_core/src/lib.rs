//! # sampler_core: Distribution Samplers for Geological Parameters
//!
//! Generates synthetic geological input for fracture and fault simulations:
//! strikes, dips, depths and fracture apertures. Every sampler draws from a
//! standard distribution and then either shifts out-of-range values by a
//! fixed offset or, for apertures, rejects them and draws again.
//!
//! ## Explicit Random Source
//!
//! There is no process-wide generator. Every sampler takes `&mut R` where
//! `R: rand::Rng + ?Sized`, so callers own the state and can seed it for
//! reproducible batches. [`rng::SamplerRng`] is the seeded wrapper used by
//! the command-line driver.
//!
//! ## Module Structure
//!
//! - [`bounds`]: Validated `[lower, upper]` ranges and the named defaults
//! - [`error`]: [`SamplingError`], the single failure type
//! - [`rng`]: Seeded random source with seed tracking
//! - [`samplers`]: The sampling operations themselves
//! - [`sampler_enum`]: Serialisable, statically dispatched sampler selection
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::bounds::{DIP_BOUNDS, STRIKE_BOUNDS};
//! use sampler_core::rng::SamplerRng;
//! use sampler_core::samplers::{random_dips, random_strikes};
//!
//! let mut rng = SamplerRng::from_seed(42);
//!
//! let strikes = random_strikes(&mut rng, 100, 120.0, 15.0, STRIKE_BOUNDS).unwrap();
//! let dips = random_dips(&mut rng, 100, 60.0, 10.0, DIP_BOUNDS).unwrap();
//!
//! assert_eq!(strikes.len(), 100);
//! assert_eq!(dips.len(), 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bounds;
pub mod error;
pub mod rng;
pub mod sampler_enum;
pub mod samplers;

pub use bounds::Bounds;
pub use error::SamplingError;
pub use rng::SamplerRng;
pub use sampler_enum::SamplerKind;
