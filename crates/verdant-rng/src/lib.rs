//! Deterministic seeded randomness for landscape generation.
//!
//! Provides the linear-congruential stream that drives permutation-table
//! construction and Poisson-disk sampling, per-layer RNG derivation from a
//! world seed, and deterministic math functions via `libm` for
//! cross-platform bit-stable generation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// Linear-congruential stream
// ---------------------------------------------------------------------------

/// Seeded linear-congruential generator producing floats in `[0, 1)`.
///
/// The recurrence is `state = (state * 9301 + 49297) mod 233280`, so the
/// period is bounded by the modulus. That is a deliberately small generator:
/// it feeds permutation-table shuffles and sampler candidate generation,
/// where seed-reproducibility matters and statistical quality does not.
/// Streams that need quality randomness (decoration jitter, anything drawn
/// thousands of times) should go through [`layer_rng`] instead.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    const MULTIPLIER: i64 = 9301;
    const INCREMENT: i64 = 49297;
    const MODULUS: i64 = 233280;

    /// Create a generator from an integer seed.
    ///
    /// Any value is accepted, including zero and negatives; the Euclidean
    /// remainder folds the seed into `[0, MODULUS)` so the stream stays
    /// deterministic and in-range regardless of sign.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(Self::MODULUS),
        }
    }

    /// Advance the stream and return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT).rem_euclid(Self::MODULUS);
        self.state as f64 / Self::MODULUS as f64
    }

    /// Uniform index in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `bound` is zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "index bound must be non-zero");
        (self.next_f64() * bound as f64) as usize
    }
}

// ---------------------------------------------------------------------------
// Seed derivation
// ---------------------------------------------------------------------------

/// Derive a u64 seed for a named generation layer from the world seed.
///
/// Uses SipHash (via std's `DefaultHasher`) to combine the world seed with
/// the layer label into a well-distributed u64, so independent passes
/// (terrain, vegetation, decoration) never share a stream.
pub fn derive_layer_seed(world_seed: i64, layer: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    layer.hash(&mut hasher);
    hasher.finish()
}

/// Derive a deterministic RNG for a named generation layer.
///
/// The returned RNG produces an identical sequence for the same
/// `(world_seed, layer)` pair, regardless of thread or platform.
pub fn layer_rng(world_seed: i64, layer: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_layer_seed(world_seed, layer))
}

// ---------------------------------------------------------------------------
// Deterministic math (libm)
// ---------------------------------------------------------------------------

/// Deterministic sine using libm (not platform libc).
#[inline]
pub fn det_sin(x: f64) -> f64 {
    libm::sin(x)
}

/// Deterministic cosine using libm.
#[inline]
pub fn det_cos(x: f64) -> f64 {
    libm::cos(x)
}

/// Deterministic sqrt using libm.
#[inline]
pub fn det_sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}
