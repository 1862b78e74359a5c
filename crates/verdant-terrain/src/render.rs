//! Top-down rasterization of a terrain patch into an RGBA image.

use verdant_scatter::PlacedTree;

use crate::error::TerrainError;
use crate::heightfield::HeightField;
use crate::preset::ColorScheme;

/// Marker color painted over tree placements.
const TREE_COLOR: [u8; 3] = [61, 41, 20];

/// An RGBA raster stored row-major, one pixel per height sample.
#[derive(Clone, Debug)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA order. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create an all-zero image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx] = r;
        self.pixels[idx + 1] = g;
        self.pixels[idx + 2] = b;
        self.pixels[idx + 3] = a;
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let idx = ((y * self.width + x) * 4) as usize;
        (
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Count the unique colors in the image, ignoring alpha.
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }
}

/// Paint a height field top-down, one pixel per grid sample, using the
/// scheme's height bands. Pixel `(ix, iz)` maps to grid sample `(ix, iz)`,
/// so world -x/-z is the top-left corner.
pub fn render_heightfield(
    field: &HeightField,
    scheme: &ColorScheme,
) -> Result<RasterImage, TerrainError> {
    scheme.validate()?;

    let n = field.resolution();
    let mut image = RasterImage::new(n, n);
    for iz in 0..n {
        for ix in 0..n {
            let [r, g, b] = scheme.color_for(field.height(ix, iz));
            image.set_pixel(ix, iz, r, g, b, 255);
        }
    }
    Ok(image)
}

/// Overlay tree placements on a rendered height field.
///
/// Each tree's world x/z is mapped to the nearest grid pixel. Trees that
/// round outside the raster are skipped.
pub fn mark_placements(image: &mut RasterImage, field: &HeightField, trees: &[PlacedTree]) {
    let half = field.size() / 2.0;
    let scale = (field.resolution() - 1) as f64 / field.size();

    for tree in trees {
        let px = ((tree.position.x + half) * scale).round();
        let pz = ((tree.position.z + half) * scale).round();
        if px < 0.0 || pz < 0.0 || px >= image.width as f64 || pz >= image.height as f64 {
            continue;
        }
        image.set_pixel(
            px as u32,
            pz as u32,
            TREE_COLOR[0],
            TREE_COLOR[1],
            TREE_COLOR[2],
            255,
        );
    }
}
