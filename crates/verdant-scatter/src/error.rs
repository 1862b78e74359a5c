//! Scattering configuration errors.

use verdant_noise::NoiseError;

/// Errors raised when a sampling or placement configuration fails
/// validation. Generation never starts on an invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ScatterError {
    /// Domain dimensions must both be positive and finite.
    #[error("domain dimensions must be positive and finite, got {width} x {height}")]
    InvalidDomain { width: f64, height: f64 },

    /// Minimum inter-point distance must be positive and finite.
    #[error("minimum distance must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    /// The per-point retry budget must allow at least one attempt.
    #[error("retry budget must be at least 1, got {0}")]
    InvalidRetryBudget(u32),

    /// Tree scale bounds must satisfy `0 < min <= max` and be finite.
    #[error("scale range must satisfy 0 < min <= max, got ({0}, {1})")]
    InvalidScaleRange(f64, f64),

    /// The shared noise tuple failed validation.
    #[error(transparent)]
    Noise(#[from] NoiseError),
}
