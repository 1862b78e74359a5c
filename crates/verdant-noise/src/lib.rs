//! 2D gradient noise and fractal Brownian motion for terrain synthesis.
//!
//! [`Simplex2`] is the band-limited noise primitive; [`NoiseField`] bundles
//! it with the multi-octave combinator and the shared parameter tuple that
//! keeps terrain heights and object placement consistent.

mod error;
mod field;
mod simplex;

pub use error::NoiseError;
pub use field::{FbmParams, NoiseField};
pub use simplex::Simplex2;
