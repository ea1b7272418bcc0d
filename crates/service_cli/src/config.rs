//! CLI configuration loading
//!
//! Loads configuration from an optional TOML file. Command-line flags take
//! precedence over file values.

use sampler_core::samplers::DEFAULT_ATTEMPTS_PER_VALUE;
use serde::Deserialize;
use std::path::Path;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Sampling settings
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// General CLI settings
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format (table, json, csv)
    #[serde(default = "default_format")]
    pub format: String,
}

/// Sampling settings
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    /// Fixed seed; absent means a fresh seed from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Aperture draw budget per requested value
    #[serde(default = "default_max_attempts_per_value")]
    pub max_attempts_per_value: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_format(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts_per_value: default_max_attempts_per_value(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

fn default_max_attempts_per_value() -> usize {
    DEFAULT_ATTEMPTS_PER_VALUE
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))?;

        if config.sampling.max_attempts_per_value == 0 {
            return Err(CliError::InvalidArgument(
                "sampling.max_attempts_per_value must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}
