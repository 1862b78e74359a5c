//! Built-in world presets: named parameter bundles for terrain and
//! vegetation that produce recognizable landscape archetypes.

use serde::{Deserialize, Serialize};
use verdant_noise::FbmParams;
use verdant_scatter::VegetationParams;

use crate::error::TerrainError;

/// Height-banded color table for rasterizing a terrain patch.
///
/// `thresholds` splits the height axis into `thresholds.len() + 1` bands;
/// `colors[i]` paints heights below `thresholds[i]`, and the final color
/// paints everything above the last threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Band boundaries in ascending height order.
    pub thresholds: Vec<f64>,
    /// One RGB color per band, `thresholds.len() + 1` entries.
    pub colors: Vec<[u8; 3]>,
}

impl ColorScheme {
    /// Check that the scheme is internally consistent.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.colors.len() != self.thresholds.len() + 1 {
            return Err(TerrainError::InvalidColorScheme(format!(
                "{} thresholds need {} colors, got {}",
                self.thresholds.len(),
                self.thresholds.len() + 1,
                self.colors.len()
            )));
        }
        for pair in self.thresholds.windows(2) {
            if pair[0] >= pair[1] {
                return Err(TerrainError::InvalidColorScheme(format!(
                    "thresholds must be strictly ascending, got {} before {}",
                    pair[0], pair[1]
                )));
            }
        }
        if self.thresholds.iter().any(|t| !t.is_finite()) {
            return Err(TerrainError::InvalidColorScheme(
                "thresholds must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Color for the band containing `height`.
    pub fn color_for(&self, height: f64) -> [u8; 3] {
        for (i, &threshold) in self.thresholds.iter().enumerate() {
            if height < threshold {
                return self.colors[i];
            }
        }
        self.colors[self.thresholds.len()]
    }
}

/// A complete named landscape configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPreset {
    /// Preset identifier used for lookup.
    pub name: String,
    /// One-line human description.
    pub description: String,
    /// Noise tuple shared by the surface and every placement pass.
    pub noise: FbmParams,
    /// Tree placement rules.
    pub vegetation: VegetationParams,
    /// Height-band palette for rasterization.
    pub colors: ColorScheme,
}

/// Look up a built-in preset by name.
pub fn preset(name: &str) -> Option<WorldPreset> {
    match name {
        "mountain" => Some(mountain()),
        "forest" => Some(forest()),
        "plains" => Some(plains()),
        _ => None,
    }
}

/// Names of all built-in presets.
pub fn preset_names() -> &'static [&'static str] {
    &["mountain", "forest", "plains"]
}

fn mountain() -> WorldPreset {
    WorldPreset {
        name: "mountain".into(),
        description: "Tall jagged peaks with snow caps and sparse treelines".into(),
        noise: FbmParams {
            frequency: 0.1,
            amplitude: 4.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        },
        vegetation: VegetationParams {
            enabled: true,
            min_distance: 2.0,
            water_threshold: 0.0,
            scale_range: (0.8, 1.2),
        },
        colors: ColorScheme {
            thresholds: vec![-0.5, 1.0, 2.5],
            colors: vec![
                [26, 77, 140],
                [74, 140, 42],
                [140, 107, 74],
                [255, 255, 255],
            ],
        },
    }
}

fn forest() -> WorldPreset {
    WorldPreset {
        name: "forest".into(),
        description: "Rolling wooded hills under a dense canopy".into(),
        noise: FbmParams {
            frequency: 0.12,
            amplitude: 3.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        },
        vegetation: VegetationParams {
            enabled: true,
            min_distance: 1.5,
            water_threshold: -0.1,
            scale_range: (0.8, 1.2),
        },
        colors: ColorScheme {
            thresholds: vec![-0.2, 0.8, 2.0],
            colors: vec![[26, 77, 140], [45, 80, 22], [74, 140, 42], [107, 140, 74]],
        },
    }
}

fn plains() -> WorldPreset {
    WorldPreset {
        name: "plains".into(),
        description: "Gentle open grassland with scattered trees".into(),
        noise: FbmParams {
            frequency: 0.15,
            amplitude: 1.5,
            octaves: 3,
            persistence: 0.4,
            lacunarity: 2.0,
        },
        vegetation: VegetationParams {
            enabled: true,
            min_distance: 3.5,
            water_threshold: -0.2,
            scale_range: (0.8, 1.2),
        },
        colors: ColorScheme {
            thresholds: vec![-0.3, 0.3, 1.0],
            colors: vec![
                [107, 155, 212],
                [124, 179, 66],
                [156, 204, 101],
                [174, 213, 129],
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_presets_resolve() {
        for name in preset_names() {
            let p = preset(name).unwrap_or_else(|| panic!("Preset {name} should exist"));
            assert_eq!(p.name, *name);
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(preset("volcano").is_none());
    }

    #[test]
    fn test_builtin_presets_pass_validation() {
        for name in preset_names() {
            let p = preset(name).unwrap();
            p.noise
                .validate()
                .unwrap_or_else(|e| panic!("Preset {name} has invalid noise tuple: {e}"));
            p.colors
                .validate()
                .unwrap_or_else(|e| panic!("Preset {name} has invalid colors: {e}"));
        }
    }

    #[test]
    fn test_color_band_lookup() {
        let scheme = preset("mountain").unwrap().colors;
        assert_eq!(scheme.color_for(-2.0), [26, 77, 140], "Deep water band");
        assert_eq!(scheme.color_for(0.0), [74, 140, 42], "Grass band");
        assert_eq!(scheme.color_for(1.5), [140, 107, 74], "Rock band");
        assert_eq!(scheme.color_for(3.0), [255, 255, 255], "Snow band");
    }

    #[test]
    fn test_color_at_exact_threshold_uses_upper_band() {
        let scheme = preset("mountain").unwrap().colors;
        assert_eq!(
            scheme.color_for(-0.5),
            [74, 140, 42],
            "A height exactly at a threshold belongs to the band above it"
        );
    }

    #[test]
    fn test_color_count_mismatch_rejected() {
        let scheme = ColorScheme {
            thresholds: vec![0.0, 1.0],
            colors: vec![[0, 0, 0], [255, 255, 255]],
        };
        assert!(matches!(
            scheme.validate(),
            Err(TerrainError::InvalidColorScheme(_))
        ));
    }

    #[test]
    fn test_unsorted_thresholds_rejected() {
        let scheme = ColorScheme {
            thresholds: vec![1.0, 0.0],
            colors: vec![[0, 0, 0], [128, 128, 128], [255, 255, 255]],
        };
        assert!(matches!(
            scheme.validate(),
            Err(TerrainError::InvalidColorScheme(_))
        ));
    }

    #[test]
    fn test_preset_roundtrips_through_ron() {
        let original = preset("forest").unwrap();
        let text = ron::to_string(&original).unwrap();
        let parsed: WorldPreset = ron::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
