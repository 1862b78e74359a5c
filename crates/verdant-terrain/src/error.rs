//! Terrain generation errors.

use verdant_noise::NoiseError;

/// Errors raised while building or rendering a terrain patch.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// World size must be positive and finite.
    #[error("world size must be positive and finite, got {0}")]
    InvalidSize(f64),

    /// Grid resolution needs at least two samples per axis to span the patch.
    #[error("grid resolution must be at least 2, got {0}")]
    InvalidResolution(u32),

    /// A color scheme's band thresholds or color list failed validation.
    #[error("invalid color scheme: {0}")]
    InvalidColorScheme(String),

    /// The noise tuple driving the height function failed validation.
    #[error(transparent)]
    Noise(#[from] NoiseError),
}
