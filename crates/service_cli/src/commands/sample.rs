//! Single-sampler commands
//!
//! Backs `strikes`, `dips`, `depths-normal`, `depths-halved`,
//! `depths-uniform` and `apertures`.

use sampler_core::SamplerKind;
use tracing::info;

use super::seeded_rng;
use crate::output::{render, BatchReport, OutputFormat, SamplingReport};
use crate::Result;

/// Draw one batch and wrap it in a report
pub fn sample(
    sampler: SamplerKind,
    seed: Option<u64>,
    attempts_per_value: usize,
) -> Result<SamplingReport> {
    let mut rng = seeded_rng(seed);
    let sampler = sampler.with_attempt_budget(attempts_per_value);

    info!("  Sampler: {}", sampler.name());
    info!("  Count: {}", sampler.count());
    info!("  Seed: {}", rng.seed());

    let values = sampler.sample(&mut rng)?;

    Ok(SamplingReport {
        seed: rng.seed(),
        jobs: vec![BatchReport {
            name: sampler.name().to_string(),
            sampler: sampler.name(),
            values,
        }],
    })
}

/// Run a single-sampler command
pub fn run(
    sampler: SamplerKind,
    seed: Option<u64>,
    format: OutputFormat,
    attempts_per_value: usize,
) -> Result<()> {
    info!("Starting sampling...");

    let report = sample(sampler, seed, attempts_per_value)?;
    println!("{}", render(&report, format)?);

    info!("Sampling complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use sampler_core::SamplingError;

    #[test]
    fn test_sample_strike_report() {
        let sampler = SamplerKind::Strike {
            n: 1,
            mean: 370.0,
            std_dev: 0.0,
            lower_bound: 0.0,
            upper_bound: 360.0,
        };

        let report = sample(sampler, Some(42), 100).unwrap();

        assert_eq!(report.seed, 42);
        assert_eq!(report.jobs.len(), 1);
        assert_eq!(report.jobs[0].name, "strike");
        assert_eq!(report.jobs[0].values, vec![190.0]);
    }

    #[test]
    fn test_sample_is_reproducible() {
        let sampler = SamplerKind::DepthUniform {
            n: 20,
            lower_bound: 100.0,
            upper_bound: 400.0,
        };

        let a = sample(sampler.clone(), Some(5), 100).unwrap();
        let b = sample(sampler, Some(5), 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_applies_attempt_budget() {
        let sampler = SamplerKind::ApertureLognormal {
            num_values: 2,
            mean: 0.0,
            std_dev: 1.0,
            min_limit: 3000.0,
            max_limit: 4000.0,
            max_attempts: None,
        };

        let result = sample(sampler, Some(1), 10);
        assert!(matches!(
            result,
            Err(CliError::Sampling(SamplingError::AttemptsExhausted {
                attempts: 20,
                ..
            }))
        ));
    }
}
