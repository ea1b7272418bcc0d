//! geosample CLI - Synthetic Geological Parameter Sampling
//!
//! Command-line driver for the `sampler_core` samplers.
//!
//! # Commands
//!
//! - `geosample strikes` / `dips` - Shift-corrected normal angles
//! - `geosample depths-normal` / `depths-halved` / `depths-uniform` - Depths
//! - `geosample apertures` - Lognormal apertures by bounded rejection sampling
//! - `geosample plan <file>` - Run a TOML sampling plan
//! - `geosample check` - Show resolved configuration
//!
//! Data goes to stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use sampler_core::samplers::DEFAULT_OUTLIER_HANDLING;
use sampler_core::SamplerKind;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;
mod plan;

pub use error::{CliError, Result};

use config::CliConfig;
use output::OutputFormat;

/// Synthetic geological parameter sampler
#[derive(Parser)]
#[command(name = "geosample")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "geosample.toml")]
    config: String,

    /// Seed for the random source (overrides plan and config)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format (json, csv, table)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample strike angles (normal, ±180 correction)
    Strikes {
        /// Number of values
        #[arg(short, long)]
        n: usize,

        /// Mean strike in degrees
        #[arg(long, allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation in degrees
        #[arg(long, allow_negative_numbers = true)]
        std_dev: f64,

        /// Lower bound
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lower: f64,

        /// Upper bound
        #[arg(long, default_value_t = 360.0, allow_negative_numbers = true)]
        upper: f64,
    },

    /// Sample dip angles (normal, ±45 correction)
    Dips {
        /// Number of values
        #[arg(short, long)]
        n: usize,

        /// Mean dip in degrees
        #[arg(long, allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation in degrees
        #[arg(long, allow_negative_numbers = true)]
        std_dev: f64,

        /// Lower bound
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lower: f64,

        /// Upper bound
        #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
        upper: f64,
    },

    /// Sample depths (normal, shift by bound / outlier divisor)
    DepthsNormal {
        /// Number of values
        #[arg(short, long)]
        n: usize,

        /// Mean depth
        #[arg(long, allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation
        #[arg(long, allow_negative_numbers = true)]
        std_dev: f64,

        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        lower: f64,

        /// Upper bound
        #[arg(long, allow_negative_numbers = true)]
        upper: f64,

        /// Outlier divisor
        #[arg(long, default_value_t = DEFAULT_OUTLIER_HANDLING, allow_negative_numbers = true)]
        outlier_handling: f64,
    },

    /// Sample depths (normal, shift by bound / 2)
    DepthsHalved {
        /// Number of values
        #[arg(short, long)]
        n: usize,

        /// Mean depth
        #[arg(long, allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation
        #[arg(long, allow_negative_numbers = true)]
        std_dev: f64,

        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        lower: f64,

        /// Upper bound
        #[arg(long, allow_negative_numbers = true)]
        upper: f64,
    },

    /// Sample depths uniformly over [lower, upper]
    DepthsUniform {
        /// Number of values
        #[arg(short, long)]
        n: usize,

        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        lower: f64,

        /// Upper bound
        #[arg(long, allow_negative_numbers = true)]
        upper: f64,
    },

    /// Sample fracture apertures (lognormal, rejection sampled)
    Apertures {
        /// Number of values
        #[arg(short, long)]
        n: usize,

        /// Mean of the underlying normal
        #[arg(long, allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation of the underlying normal
        #[arg(long, allow_negative_numbers = true)]
        std_dev: f64,

        /// Smallest accepted aperture
        #[arg(long, allow_negative_numbers = true)]
        min_limit: f64,

        /// Largest accepted aperture
        #[arg(long, allow_negative_numbers = true)]
        max_limit: f64,

        /// Total draw limit (default: n x configured attempts per value)
        #[arg(long)]
        max_attempts: Option<usize>,
    },

    /// Run a TOML sampling plan
    Plan {
        /// Path to plan file
        path: String,
    },

    /// Show resolved configuration and sampler defaults
    Check,
}

impl Commands {
    /// Sampler for the single-sampler commands
    fn sampler(&self) -> Option<SamplerKind> {
        let sampler = match *self {
            Commands::Strikes {
                n,
                mean,
                std_dev,
                lower,
                upper,
            } => SamplerKind::Strike {
                n,
                mean,
                std_dev,
                lower_bound: lower,
                upper_bound: upper,
            },
            Commands::Dips {
                n,
                mean,
                std_dev,
                lower,
                upper,
            } => SamplerKind::Dip {
                n,
                mean,
                std_dev,
                lower_bound: lower,
                upper_bound: upper,
            },
            Commands::DepthsNormal {
                n,
                mean,
                std_dev,
                lower,
                upper,
                outlier_handling,
            } => SamplerKind::DepthNormal {
                n,
                mean,
                std_dev,
                lower_bound: lower,
                upper_bound: upper,
                outlier_handling,
            },
            Commands::DepthsHalved {
                n,
                mean,
                std_dev,
                lower,
                upper,
            } => SamplerKind::DepthNormalHalved {
                n,
                mean,
                std_dev,
                lower_bound: lower,
                upper_bound: upper,
            },
            Commands::DepthsUniform { n, lower, upper } => SamplerKind::DepthUniform {
                n,
                lower_bound: lower,
                upper_bound: upper,
            },
            Commands::Apertures {
                n,
                mean,
                std_dev,
                min_limit,
                max_limit,
                max_attempts,
            } => SamplerKind::ApertureLognormal {
                num_values: n,
                mean,
                std_dev,
                min_limit,
                max_limit,
                max_attempts,
            },
            Commands::Plan { .. } | Commands::Check => return None,
        };
        Some(sampler)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_file(&cli.config)?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.general.format.as_str())
        .parse()?;
    let attempts_per_value = config.sampling.max_attempts_per_value;

    match &cli.command {
        Commands::Plan { path } => commands::plan::run(
            path,
            cli.seed,
            config.sampling.seed,
            format,
            attempts_per_value,
        ),
        Commands::Check => {
            commands::check::run(&config, &cli.config, cli.seed.or(config.sampling.seed))
        }
        Commands::Strikes { .. }
        | Commands::Dips { .. }
        | Commands::DepthsNormal { .. }
        | Commands::DepthsHalved { .. }
        | Commands::DepthsUniform { .. }
        | Commands::Apertures { .. } => {
            let Some(sampler) = cli.command.sampler() else {
                unreachable!("every sampling command maps to a sampler")
            };
            let seed = cli.seed.or(config.sampling.seed);
            commands::sample::run(sampler, seed, format, attempts_per_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_strikes_with_defaults() {
        let cli = Cli::parse_from([
            "geosample", "strikes", "-n", "3", "--mean", "-20", "--std-dev", "5",
        ]);

        assert_eq!(
            cli.command.sampler(),
            Some(SamplerKind::Strike {
                n: 3,
                mean: -20.0,
                std_dev: 5.0,
                lower_bound: 0.0,
                upper_bound: 360.0,
            })
        );
    }

    #[test]
    fn test_parse_depths_normal_default_divisor() {
        let cli = Cli::parse_from([
            "geosample",
            "--seed",
            "4",
            "depths-normal",
            "-n",
            "2",
            "--mean",
            "1500",
            "--std-dev",
            "100",
            "--lower",
            "1000",
            "--upper",
            "2000",
        ]);

        assert_eq!(cli.seed, Some(4));
        match cli.command.sampler() {
            Some(SamplerKind::DepthNormal {
                outlier_handling, ..
            }) => assert_eq!(outlier_handling, DEFAULT_OUTLIER_HANDLING),
            other => panic!("unexpected sampler {:?}", other),
        }
    }

    #[test]
    fn test_negative_std_dev_reaches_sampler_validation() {
        let cli = Cli::parse_from([
            "geosample", "dips", "-n", "2", "--mean", "30", "--std-dev", "-1",
        ]);

        let sampler = cli.command.sampler().unwrap();
        assert!(matches!(
            sampler,
            SamplerKind::Dip { std_dev, .. } if std_dev == -1.0
        ));

        let mut rng = sampler_core::SamplerRng::from_seed(1);
        assert_eq!(
            sampler.sample(&mut rng),
            Err(sampler_core::SamplingError::InvalidStdDev(-1.0))
        );
    }

    #[test]
    fn test_negative_aperture_limit_reaches_sampler_validation() {
        let cli = Cli::parse_from([
            "geosample",
            "apertures",
            "-n",
            "1",
            "--mean",
            "0",
            "--std-dev",
            "1",
            "--min-limit",
            "-2",
            "--max-limit",
            "-1",
        ]);

        let mut rng = sampler_core::SamplerRng::from_seed(1);
        assert!(matches!(
            cli.command.sampler().unwrap().sample(&mut rng),
            Err(sampler_core::SamplingError::EmptyAcceptanceRegion { .. })
        ));
    }

    #[test]
    fn test_every_sampling_command_maps_to_a_sampler() {
        let commands = [
            vec!["strikes", "-n", "1", "--mean", "0", "--std-dev", "1"],
            vec!["dips", "-n", "1", "--mean", "0", "--std-dev", "1"],
            vec![
                "depths-normal", "-n", "1", "--mean", "0", "--std-dev", "1", "--lower", "0",
                "--upper", "1",
            ],
            vec![
                "depths-halved", "-n", "1", "--mean", "0", "--std-dev", "1", "--lower", "0",
                "--upper", "1",
            ],
            vec!["depths-uniform", "-n", "1", "--lower", "0", "--upper", "1"],
            vec![
                "apertures", "-n", "1", "--mean", "0", "--std-dev", "1", "--min-limit", "0.5",
                "--max-limit", "2",
            ],
        ];

        for args in commands {
            let cli = Cli::parse_from(std::iter::once("geosample").chain(args.iter().copied()));
            assert!(cli.command.sampler().is_some(), "{:?}", args);
        }
    }

    #[test]
    fn test_parse_plan_has_no_sampler() {
        let cli = Cli::parse_from(["geosample", "plan", "jobs.toml", "--format", "json"]);

        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(cli.command.sampler().is_none());
        assert!(matches!(cli.command, Commands::Plan { ref path } if path == "jobs.toml"));
    }
}
