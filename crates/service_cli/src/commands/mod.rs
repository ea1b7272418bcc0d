//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod plan;
pub mod sample;

use sampler_core::SamplerRng;

/// Build the random source for a run, drawing a fresh seed when none is fixed
pub fn seeded_rng(seed: Option<u64>) -> SamplerRng {
    match seed {
        Some(seed) => SamplerRng::from_seed(seed),
        None => SamplerRng::from_entropy(),
    }
}
