use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::render_settings::{DISPLACEMENT_RANGE, DOT_TEXTURE_SIZE};

/// Model entry within the scene manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Asset path of the point-cloud glb, relative to `assets/`.
    pub path: String,
    /// Vertical offset applied to the spawned cloud.
    #[serde(default)]
    pub offset_y: f32,
}

/// Overlay label copy: a title plus one line per credit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelText {
    pub title: String,
    #[serde(default)]
    pub credits: Vec<String>,
}

/// Scene manifest as a Bevy asset. Mirrors the JSON structure exactly: every
/// asset the demo needs is resolved through this single table instead of
/// ad-hoc per-file lookups scattered through the code.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    pub model: ModelEntry,
    #[serde(default = "default_dot_texture_size")]
    pub dot_texture_size: u32,
    #[serde(default = "default_displacement_range")]
    pub displacement_range: f32,
    #[serde(default)]
    pub labels: LabelText,
}

fn default_dot_texture_size() -> u32 {
    DOT_TEXTURE_SIZE
}

fn default_displacement_range() -> f32 {
    DISPLACEMENT_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_full_document() {
        let manifest: SceneManifest = serde_json::from_str(
            r#"{
                "model": { "path": "scenes/polar_bear/polar_bear_points.glb", "offset_y": -25.0 },
                "dot_texture_size": 200,
                "displacement_range": 1000.0,
                "labels": { "title": "Team Polar", "credits": ["Polar", "xacer"] }
            }"#,
        )
        .expect("manifest should parse");

        assert_eq!(
            manifest.model.path,
            "scenes/polar_bear/polar_bear_points.glb"
        );
        assert_eq!(manifest.model.offset_y, -25.0);
        assert_eq!(manifest.dot_texture_size, 200);
        assert_eq!(manifest.displacement_range, 1000.0);
        assert_eq!(manifest.labels.title, "Team Polar");
        assert_eq!(manifest.labels.credits.len(), 2);
    }

    #[test]
    fn manifest_fills_defaults_for_optional_fields() {
        let manifest: SceneManifest =
            serde_json::from_str(r#"{ "model": { "path": "cloud.glb" } }"#)
                .expect("minimal manifest should parse");

        assert_eq!(manifest.model.offset_y, 0.0);
        assert_eq!(manifest.dot_texture_size, DOT_TEXTURE_SIZE);
        assert_eq!(manifest.displacement_range, DISPLACEMENT_RANGE);
        assert!(manifest.labels.title.is_empty());
        assert!(manifest.labels.credits.is_empty());
    }
}
