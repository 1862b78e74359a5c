//! Noise field: seeded simplex noise plus the fractal combinator.
//!
//! The field is built once per seed and is immutable afterwards, so terrain
//! sampling and vegetation filtering can share one instance across threads.

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::simplex::Simplex2;

/// The noise parameter tuple shared by terrain height evaluation and
/// vegetation height filtering.
///
/// Passing the same tuple to both passes is what keeps object placement
/// consistent with the generated surface; the type exists so callers move
/// one value around instead of five loose floats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FbmParams {
    /// Coordinate scale applied before sampling. Lower values stretch
    /// features over larger areas.
    pub frequency: f64,
    /// Height multiplier applied to the normalized combinator output.
    pub amplitude: f64,
    /// Number of octaves to composite. Must be at least 1.
    pub octaves: u32,
    /// Amplitude decay per octave, typically in `(0, 1]`.
    pub persistence: f64,
    /// Frequency growth per octave, typically above 1.
    pub lacunarity: f64,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            amplitude: 4.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl FbmParams {
    /// Reject degenerate configurations before they reach the evaluation
    /// hot path. Out-of-typical-range but finite values (persistence above
    /// 1, lacunarity below 1) pass: the combinator is defined for them,
    /// they only forgo the `[-1, 1]` normalization guarantee.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves < 1 {
            return Err(NoiseError::InvalidOctaves(self.octaves));
        }
        if !(self.frequency > 0.0) || !self.frequency.is_finite() {
            return Err(NoiseError::InvalidFrequency(self.frequency));
        }
        if !self.amplitude.is_finite() {
            return Err(NoiseError::InvalidAmplitude(self.amplitude));
        }
        if !(self.persistence > 0.0) || !self.persistence.is_finite() {
            return Err(NoiseError::InvalidPersistence(self.persistence));
        }
        if !(self.lacunarity > 0.0) || !self.lacunarity.is_finite() {
            return Err(NoiseError::InvalidLacunarity(self.lacunarity));
        }
        Ok(())
    }
}

/// Seeded noise field exposing the raw primitive and the fractal combinator.
#[derive(Clone)]
pub struct NoiseField {
    simplex: Simplex2,
}

impl NoiseField {
    /// Build a field for the given seed.
    pub fn new(seed: i64) -> Self {
        Self {
            simplex: Simplex2::new(seed),
        }
    }

    /// Raw simplex noise at `(x, y)`, approximately in `[-1, 1]`.
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        self.simplex.noise2d(x, y)
    }

    /// Fractal Brownian motion: `octaves` layers of noise at geometrically
    /// increasing frequency and decreasing amplitude, normalized by the sum
    /// of amplitudes so the result stays approximately in `[-1, 1]` for
    /// persistence at or below 1.
    ///
    /// `octaves` below 1 is invalid configuration; [`FbmParams::validate`]
    /// rejects it at the boundary before evaluation is reached.
    pub fn fbm2d(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.simplex.noise2d(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        total / max_value
    }

    /// Terrain height at world coordinates `(x, y)` under `params`.
    ///
    /// This is the single evaluation path shared by the height-field grid
    /// and the vegetation filter: `fbm2d` at frequency-scaled coordinates,
    /// scaled by the amplitude.
    pub fn sample_height(&self, params: &FbmParams, x: f64, y: f64) -> f64 {
        self.fbm2d(
            x * params.frequency,
            y * params.frequency,
            params.octaves,
            params.persistence,
            params.lacunarity,
        ) * params.amplitude
    }
}
