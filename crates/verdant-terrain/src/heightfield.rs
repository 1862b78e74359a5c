//! Regular-grid terrain patch sampled from the shared height function.

use glam::DVec3;
use verdant_noise::{FbmParams, NoiseField};

use crate::error::TerrainError;

/// A square terrain patch centered on the origin, sampled on a regular grid.
///
/// Samples are stored row-major with the z axis outermost, so sample
/// `(ix, iz)` lives at `samples[iz * resolution + ix]`. Grid corners sit at
/// `+-size / 2`; the step between adjacent samples is `size / (resolution - 1)`.
#[derive(Clone, Debug)]
pub struct HeightField {
    size: f64,
    resolution: u32,
    samples: Vec<f64>,
}

impl HeightField {
    /// Sample the height function over a `size x size` patch at the given
    /// grid resolution.
    pub fn generate(
        field: &NoiseField,
        noise: &FbmParams,
        size: f64,
        resolution: u32,
    ) -> Result<Self, TerrainError> {
        noise.validate()?;
        if !(size > 0.0 && size.is_finite()) {
            return Err(TerrainError::InvalidSize(size));
        }
        if resolution < 2 {
            return Err(TerrainError::InvalidResolution(resolution));
        }

        let n = resolution as usize;
        let half = size / 2.0;
        let step = size / (resolution - 1) as f64;

        let mut samples = Vec::with_capacity(n * n);
        for iz in 0..n {
            let z = iz as f64 * step - half;
            for ix in 0..n {
                let x = ix as f64 * step - half;
                samples.push(field.sample_height(noise, x, z));
            }
        }

        tracing::debug!(size, resolution, samples = samples.len(), "height field sampled");
        Ok(Self {
            size,
            resolution,
            samples,
        })
    }

    /// Side length of the patch in world units.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Number of samples per axis.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Height at grid coordinate `(ix, iz)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= resolution`.
    pub fn height(&self, ix: u32, iz: u32) -> f64 {
        assert!(ix < self.resolution && iz < self.resolution);
        self.samples[(iz * self.resolution + ix) as usize]
    }

    /// World-space position of grid coordinate `(ix, iz)`.
    pub fn position(&self, ix: u32, iz: u32) -> DVec3 {
        let half = self.size / 2.0;
        let step = self.size / (self.resolution - 1) as f64;
        DVec3::new(
            ix as f64 * step - half,
            self.height(ix, iz),
            iz as f64 * step - half,
        )
    }

    /// Lowest sampled height.
    pub fn min_height(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Highest sampled height.
    pub fn max_height(&self) -> f64 {
        self.samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Fraction of samples at or below the given waterline, in `[0, 1]`.
    pub fn water_coverage(&self, threshold: f64) -> f64 {
        let submerged = self.samples.iter().filter(|&&h| h <= threshold).count();
        submerged as f64 / self.samples.len() as f64
    }

    /// All samples in row-major order, z outermost.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}
