//! Terrain patch generation: grid sampling of the shared height function,
//! built-in world presets, and top-down rasterization.

mod error;
mod heightfield;
mod preset;
mod render;

pub use error::TerrainError;
pub use heightfield::HeightField;
pub use preset::{ColorScheme, WorldPreset, preset, preset_names};
pub use render::{RasterImage, mark_placements, render_heightfield};
