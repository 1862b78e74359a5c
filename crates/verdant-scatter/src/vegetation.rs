//! Vegetation placement: blue-noise tree scattering filtered by terrain
//! height so nothing spawns underwater.

use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use verdant_noise::{FbmParams, NoiseField};
use verdant_rng::{derive_layer_seed, layer_rng};

use crate::error::ScatterError;
use crate::poisson::{PoissonConfig, generate_poisson_disk};

/// Placement rules for a vegetation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VegetationParams {
    /// Whether the pass runs at all.
    pub enabled: bool,
    /// Minimum spacing between trees, in world units.
    pub min_distance: f64,
    /// Terrain height at or below which a candidate is considered
    /// submerged and discarded.
    pub water_threshold: f64,
    /// Per-tree scale jitter bounds `(min, max)`.
    pub scale_range: (f64, f64),
}

impl Default for VegetationParams {
    fn default() -> Self {
        Self {
            enabled: true,
            min_distance: 2.0,
            water_threshold: 0.0,
            scale_range: (0.8, 1.2),
        }
    }
}

impl VegetationParams {
    fn validate(&self) -> Result<(), ScatterError> {
        if !(self.min_distance > 0.0 && self.min_distance.is_finite()) {
            return Err(ScatterError::InvalidSpacing(self.min_distance));
        }
        let (lo, hi) = self.scale_range;
        if !(lo > 0.0 && lo <= hi && lo.is_finite() && hi.is_finite()) {
            return Err(ScatterError::InvalidScaleRange(lo, hi));
        }
        Ok(())
    }
}

/// A placed tree instance on the terrain surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedTree {
    /// World-space anchor: x/z from the sampler, y from the height function.
    pub position: DVec3,
    /// Rotation around the vertical axis, in radians.
    pub rotation: f64,
    /// Scale multiplier for natural size variation.
    pub scale: f64,
}

/// Scatter trees over a square world centered on the origin.
///
/// Candidates come from a Poisson-disk run over `[0, world_size)^2` with a
/// layer-derived seed, are recentered to `[-world_size/2, world_size/2)`,
/// and are filtered against the terrain height evaluated with the same
/// `noise` tuple the surface uses. That shared tuple is what keeps every
/// surviving tree's anchor exactly on the rendered ground.
pub fn place_vegetation(
    field: &NoiseField,
    noise: &FbmParams,
    params: &VegetationParams,
    world_size: f64,
    world_seed: i64,
) -> Result<Vec<PlacedTree>, ScatterError> {
    noise.validate()?;
    params.validate()?;
    if !(world_size > 0.0 && world_size.is_finite()) {
        return Err(ScatterError::InvalidDomain {
            width: world_size,
            height: world_size,
        });
    }
    if !params.enabled {
        return Ok(Vec::new());
    }

    let sampler_seed = derive_layer_seed(world_seed, "vegetation") as i64;
    let config = PoissonConfig::new(world_size, world_size, params.min_distance, sampler_seed);
    let candidates = generate_poisson_disk(&config)?;
    let candidate_count = candidates.len();

    let mut deco = layer_rng(world_seed, "vegetation-deco");
    let half = world_size / 2.0;
    let (scale_lo, scale_hi) = params.scale_range;

    let mut trees = Vec::new();
    for point in candidates {
        let x = point.x - half;
        let z = point.y - half;
        let height = field.sample_height(noise, x, z);
        if height <= params.water_threshold {
            continue;
        }

        trees.push(PlacedTree {
            position: DVec3::new(x, height, z),
            rotation: deco.random_range(0.0..TAU),
            scale: deco.random_range(scale_lo..=scale_hi),
        });
    }

    tracing::info!(
        candidates = candidate_count,
        placed = trees.len(),
        water_threshold = params.water_threshold,
        "vegetation pass complete"
    );
    Ok(trees)
}
