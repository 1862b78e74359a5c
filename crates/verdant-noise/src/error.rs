//! Noise parameter validation errors.

/// Errors raised when a noise parameter tuple fails validation.
#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    /// Octave count below one would leave the combinator without a normalizer.
    #[error("octaves must be at least 1, got {0}")]
    InvalidOctaves(u32),

    /// Frequency must be a positive finite number.
    #[error("frequency must be positive and finite, got {0}")]
    InvalidFrequency(f64),

    /// Amplitude must be finite.
    #[error("amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),

    /// Persistence must be a positive finite number.
    #[error("persistence must be positive and finite, got {0}")]
    InvalidPersistence(f64),

    /// Lacunarity must be a positive finite number.
    #[error("lacunarity must be positive and finite, got {0}")]
    InvalidLacunarity(f64),
}
