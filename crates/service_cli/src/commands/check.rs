//! Check command implementation
//!
//! Prints the resolved configuration and the seed a run would use.

use sampler_core::bounds::{DIP_BOUNDS, STRIKE_BOUNDS};
use sampler_core::samplers::{
    DEFAULT_OUTLIER_HANDLING, DIP_OFFSET, HALVED_OUTLIER_HANDLING, STRIKE_OFFSET,
};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, config_path: &str, seed: Option<u64>) -> Result<()> {
    info!("Checking configuration...");

    println!("geosample Check");
    println!("===============\n");

    println!("Build:");
    println!("  Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Configuration ({}):", config_path);
    println!("  Log level: {}", config.general.log_level);
    println!("  Format: {}", config.general.format);
    println!(
        "  Aperture attempts per value: {}",
        config.sampling.max_attempts_per_value
    );
    match seed {
        Some(seed) => println!("  Seed: {} (fixed)", seed),
        None => println!("  Seed: drawn from OS entropy per run"),
    }
    println!();

    println!("Sampler Defaults:");
    println!(
        "  strike: bounds [{}, {}], offset ±{}",
        STRIKE_BOUNDS.lower(),
        STRIKE_BOUNDS.upper(),
        STRIKE_OFFSET
    );
    println!(
        "  dip: bounds [{}, {}], offset ±{}",
        DIP_BOUNDS.lower(),
        DIP_BOUNDS.upper(),
        DIP_OFFSET
    );
    println!("  depth_normal: bound / {}", DEFAULT_OUTLIER_HANDLING);
    println!("  depth_normal_halved: bound / {}", HALVED_OUTLIER_HANDLING);

    info!("Check complete");
    Ok(())
}
