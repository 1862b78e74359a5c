//! Writing generated artifacts to disk.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use verdant_scatter::PlacedTree;
use verdant_terrain::RasterImage;

/// Errors raised while writing output artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    /// JSON serialization failed.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat serializable form of a tree placement.
#[derive(Debug, Serialize)]
struct TreeRecord {
    x: f64,
    y: f64,
    z: f64,
    rotation: f64,
    scale: f64,
}

impl From<&PlacedTree> for TreeRecord {
    fn from(tree: &PlacedTree) -> Self {
        Self {
            x: tree.position.x,
            y: tree.position.y,
            z: tree.position.z,
            rotation: tree.rotation,
            scale: tree.scale,
        }
    }
}

/// Encode a raster as an 8-bit RGBA PNG at `path`.
pub fn write_png(image: &RasterImage, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.write_header()?.write_image_data(&image.pixels)?;
    Ok(())
}

/// Write tree placements as pretty-printed JSON at `path`.
pub fn write_placements(trees: &[PlacedTree], path: &Path) -> Result<(), ExportError> {
    let records: Vec<TreeRecord> = trees.iter().map(TreeRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_written_png_has_signature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heightmap.png");

        let mut image = RasterImage::new(4, 4);
        image.set_pixel(1, 2, 200, 100, 50, 255);
        write_png(&image, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(
            &bytes[..8],
            &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
            "Output must start with the PNG signature"
        );
    }

    #[test]
    fn test_placements_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placements.json");

        let trees = vec![
            PlacedTree {
                position: DVec3::new(1.5, 0.25, -3.0),
                rotation: 1.0,
                scale: 0.9,
            },
            PlacedTree {
                position: DVec3::new(-7.0, 2.0, 4.5),
                rotation: 4.2,
                scale: 1.1,
            },
        ];
        write_placements(&trees, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["x"], 1.5);
        assert_eq!(records[0]["y"], 0.25);
        assert_eq!(records[1]["scale"], 1.1);
    }

    #[test]
    fn test_empty_placements_yield_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placements.json");
        write_placements(&[], &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "[]");
    }
}
