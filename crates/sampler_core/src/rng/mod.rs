//! # Random Source
//!
//! Every sampler in this crate takes an explicit, caller-owned random source
//! instead of touching a process-wide generator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: [`SamplerRng`] is always built from a known seed,
//!   including when that seed comes from OS entropy, so any batch can be
//!   regenerated from the logged seed
//! - **Interoperability**: [`SamplerRng`] implements `rand::RngCore`, so the
//!   samplers accept it and any other `rand` generator interchangeably
//! - **Static dispatch**: samplers are generic over `R: Rng + ?Sized`
//!
//! ## Usage Example
//!
//! ```rust
//! use rand::Rng;
//! use sampler_core::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//! let u: f64 = rng.gen();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod prng;

pub use prng::SamplerRng;

#[cfg(test)]
mod tests;
