//! Sampling plans
//!
//! A plan is a TOML file listing named sampler jobs that run in order from a
//! single random source:
//!
//! ```toml
//! seed = 7
//!
//! [[jobs]]
//! name = "fault_strikes"
//! sampler = "strike"
//! n = 100
//! mean = 120.0
//! std_dev = 15.0
//! ```

use sampler_core::{SamplerKind, SamplerRng};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::output::BatchReport;
use crate::{CliError, Result};

/// A named sampler invocation
#[derive(Debug, Deserialize, PartialEq)]
pub struct PlanJob {
    /// Unique job name, used as the batch label in output
    pub name: String,

    /// Sampler and its parameters
    #[serde(flatten)]
    pub sampler: SamplerKind,
}

/// An ordered list of sampler jobs
#[derive(Debug, Deserialize, PartialEq)]
pub struct SamplingPlan {
    /// Seed for the whole plan; overridden by `--seed`
    #[serde(default)]
    pub seed: Option<u64>,

    /// Jobs in execution order
    pub jobs: Vec<PlanJob>,
}

impl SamplingPlan {
    /// Load and validate a plan from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a plan from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let plan: SamplingPlan = toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("Failed to parse plan: {}", e)))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Check job names: at least one job, every name non-empty and unique
    pub fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(CliError::InvalidPlan("plan contains no jobs".to_string()));
        }

        let mut seen = HashSet::new();
        for job in &self.jobs {
            if job.name.trim().is_empty() {
                return Err(CliError::InvalidPlan("job name must not be empty".to_string()));
            }
            if !seen.insert(job.name.as_str()) {
                return Err(CliError::InvalidPlan(format!(
                    "duplicate job name '{}'",
                    job.name
                )));
            }
        }

        Ok(())
    }

    /// Run every job in order, stopping at the first failure
    pub fn execute(
        &self,
        rng: &mut SamplerRng,
        attempts_per_value: usize,
    ) -> Result<Vec<BatchReport>> {
        let mut batches = Vec::with_capacity(self.jobs.len());

        for job in &self.jobs {
            let sampler = job.sampler.clone().with_attempt_budget(attempts_per_value);
            info!(
                "  Job '{}': {} x {}",
                job.name,
                sampler.name(),
                sampler.count()
            );

            let values = sampler.sample(rng).map_err(|e| {
                CliError::InvalidPlan(format!("job '{}' failed: {}", job.name, e))
            })?;

            batches.push(BatchReport {
                name: job.name.clone(),
                sampler: sampler.name(),
                values,
            });
        }

        Ok(batches)
    }
}
