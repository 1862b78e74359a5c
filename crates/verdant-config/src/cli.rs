//! Command-line argument parsing for the Verdant generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Verdant generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "verdant", about = "Deterministic procedural landscape generator")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<i64>,

    /// Preset name (mountain, forest, plains).
    #[arg(long)]
    pub preset: Option<String>,

    /// Side length of the square world patch.
    #[arg(long)]
    pub world_size: Option<f64>,

    /// Height samples per axis.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Output directory for generated artifacts.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.seed = seed;
        }
        if let Some(ref preset) = args.preset {
            self.generation.preset = preset.clone();
        }
        if let Some(size) = args.world_size {
            self.generation.world_size = size;
        }
        if let Some(res) = args.resolution {
            self.generation.resolution = res;
        }
        if let Some(ref dir) = args.output {
            self.output.dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(777),
            preset: Some("plains".to_string()),
            world_size: None,
            resolution: None,
            output: None,
            log_level: None,
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.seed, 777);
        assert_eq!(config.generation.preset, "plains");
        // Non-overridden fields retain defaults
        assert_eq!(config.generation.world_size, 30.0);
        assert_eq!(config.generation.resolution, 128);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        let args = CliArgs {
            seed: None,
            preset: None,
            world_size: None,
            resolution: None,
            output: None,
            log_level: None,
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config, original);
    }
}
