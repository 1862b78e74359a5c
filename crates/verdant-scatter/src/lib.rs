//! Blue-noise object scattering over a 2D domain.
//!
//! [`generate_poisson_disk`] produces minimum-distance point sets with
//! Bridson's algorithm; [`place_vegetation`] turns those points into tree
//! placements filtered against the shared terrain height function.

mod error;
mod poisson;
mod vegetation;

pub use error::ScatterError;
pub use poisson::{PoissonConfig, generate_poisson_disk};
pub use vegetation::{PlacedTree, VegetationParams, place_vegetation};
