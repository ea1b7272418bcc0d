//! Plan command implementation
//!
//! Runs every job of a sampling plan from one seeded random source.

use tracing::info;

use super::seeded_rng;
use crate::output::{render, OutputFormat, SamplingReport};
use crate::plan::SamplingPlan;
use crate::Result;

/// Seed precedence: command line, then plan file, then configuration
fn resolve_seed(
    cli_seed: Option<u64>,
    plan: &SamplingPlan,
    config_seed: Option<u64>,
) -> Option<u64> {
    cli_seed.or(plan.seed).or(config_seed)
}

/// Execute a loaded plan and collect the report
pub fn execute(
    plan: &SamplingPlan,
    cli_seed: Option<u64>,
    config_seed: Option<u64>,
    attempts_per_value: usize,
) -> Result<SamplingReport> {
    let mut rng = seeded_rng(resolve_seed(cli_seed, plan, config_seed));
    info!("  Jobs: {}", plan.jobs.len());
    info!("  Seed: {}", rng.seed());

    let jobs = plan.execute(&mut rng, attempts_per_value)?;
    Ok(SamplingReport {
        seed: rng.seed(),
        jobs,
    })
}

/// Run the plan command
pub fn run(
    path: &str,
    cli_seed: Option<u64>,
    config_seed: Option<u64>,
    format: OutputFormat,
    attempts_per_value: usize,
) -> Result<()> {
    info!("Running sampling plan...");
    info!("  Plan: {}", path);

    let plan = SamplingPlan::from_file(path)?;
    let report = execute(&plan, cli_seed, config_seed, attempts_per_value)?;
    println!("{}", render(&report, format)?);

    info!("Plan complete");
    Ok(())
}
