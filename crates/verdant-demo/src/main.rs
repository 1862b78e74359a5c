//! Demo binary that generates a complete landscape and writes its artifacts.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p verdant-demo` for the default mountain
//! world, or `cargo run -p verdant-demo -- --preset forest --seed 42` to
//! pick a preset and seed.

mod export;

use clap::Parser;
use tracing::info;
use verdant_config::{CliArgs, Config};
use verdant_noise::NoiseField;
use verdant_scatter::place_vegetation;
use verdant_terrain::{HeightField, mark_placements, preset, preset_names, render_heightfield};

use crate::export::{write_placements, write_png};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("unknown preset {0:?}, available: {1}")]
    UnknownPreset(String, String),

    #[error(transparent)]
    Terrain(#[from] verdant_terrain::TerrainError),

    #[error(transparent)]
    Scatter(#[from] verdant_scatter::ScatterError),

    #[error(transparent)]
    Export(#[from] export::ExportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn run(config: &Config) -> Result<(), DemoError> {
    let settings = &config.generation;
    let world = preset(&settings.preset).ok_or_else(|| {
        DemoError::UnknownPreset(settings.preset.clone(), preset_names().join(", "))
    })?;
    info!(
        preset = %world.name,
        seed = settings.seed,
        world_size = settings.world_size,
        resolution = settings.resolution,
        "generating world"
    );

    let noise_field = NoiseField::new(settings.seed);
    let field = HeightField::generate(
        &noise_field,
        &world.noise,
        settings.world_size,
        settings.resolution,
    )?;
    info!(
        min_height = field.min_height(),
        max_height = field.max_height(),
        water_coverage = field.water_coverage(world.vegetation.water_threshold),
        "terrain sampled"
    );

    let trees = place_vegetation(
        &noise_field,
        &world.noise,
        &world.vegetation,
        settings.world_size,
        settings.seed,
    )?;

    std::fs::create_dir_all(&config.output.dir)?;

    if config.output.write_heightmap {
        let mut image = render_heightfield(&field, &world.colors)?;
        mark_placements(&mut image, &field, &trees);
        let path = config.output.dir.join("heightmap.png");
        write_png(&image, &path)?;
        info!(path = %path.display(), "wrote heightmap");
    }

    if config.output.write_placements {
        let path = config.output.dir.join("placements.json");
        write_placements(&trees, &path)?;
        info!(path = %path.display(), trees = trees.len(), "wrote placements");
    }

    Ok(())
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("verdant")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    verdant_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&config) {
        tracing::error!("generation failed: {e}");
        std::process::exit(1);
    }
}
