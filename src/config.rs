//! Generator configuration module.
//!
//! Holds the assets location and the preset table. The configuration is
//! built once at startup and handed to the generator explicitly.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::types::{default_presets, SoundPreset};

/// Subdirectory of the assets directory that receives the sound files.
pub const SFX_SUBDIR: &str = "sfx";

/// Runtime configuration for the generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the consuming application's static assets.
    /// Sounds are written to `<assets_dir>/sfx`.
    pub assets_dir: PathBuf,

    /// Sounds to render, in order.
    pub presets: Vec<SoundPreset>,
}

impl GeneratorConfig {
    /// Creates a GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration writing the built-in presets under `assets_dir`.
    pub fn with_assets_dir(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            ..Self::default()
        }
    }

    /// Returns the directory the sound files are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.assets_dir.join(SFX_SUBDIR)
    }

    /// Returns the output path for a preset.
    pub fn output_path(&self, preset: &SoundPreset) -> PathBuf {
        self.output_dir().join(preset.file_name())
    }

    /// Validates the preset table.
    ///
    /// Returns an error message if validation fails, None otherwise.
    /// Durations and frequencies are checked by the renderer.
    pub fn validate(&self) -> Option<String> {
        let mut seen = HashSet::new();

        for preset in &self.presets {
            if preset.name.is_empty() {
                return Some("preset name cannot be empty".to_string());
            }

            if preset.name.contains(['/', '\\']) || preset.name == "." || preset.name == ".." {
                return Some(format!(
                    "preset name {:?} must be a plain file stem",
                    preset.name
                ));
            }

            if !seen.insert(preset.name.as_str()) {
                return Some(format!("duplicate preset name {:?}", preset.name));
            }

            if !preset.volume.is_finite() {
                return Some(format!(
                    "preset {:?} has non-finite volume {}",
                    preset.name, preset.volume
                ));
            }
        }

        None
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("public"),
            presets: default_presets(),
        }
    }
}
