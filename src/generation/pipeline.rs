//! Generation pipeline for the sound presets.
//!
//! Renders every preset in a [`GeneratorConfig`] to its own WAV file
//! under the configured assets directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::audio::{render_tone, samples_to_duration, SAMPLE_RATE};
use crate::audio::tone::frame_count;
use crate::config::GeneratorConfig;
use crate::error::{Result, SfxError};
use crate::types::SoundPreset;

/// A sound file written by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSound {
    /// Preset name the file was rendered from.
    pub name: String,
    /// Full filesystem path to the WAV file.
    pub path: PathBuf,
    /// Number of frames written.
    pub frames: usize,
}

impl RenderedSound {
    /// Length of the rendered audio in seconds.
    pub fn duration_sec(&self) -> f32 {
        samples_to_duration(self.frames, SAMPLE_RATE)
    }
}

/// Renders all presets in the configuration.
///
/// Creates the output directory if needed and overwrites existing files.
/// Stops at the first preset that fails.
///
/// # Example
///
/// ```ignore
/// use sfx_gen::{generate_all, GeneratorConfig};
///
/// let rendered = generate_all(&GeneratorConfig::default())?;
/// assert_eq!(rendered.len(), 5);
/// ```
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<RenderedSound>> {
    generate_all_with_progress(config, |_, _| {})
}

/// Renders all presets with progress callback.
///
/// # Arguments
///
/// * `config` - Assets directory and preset table
/// * `on_progress` - Callback function receiving (sounds_written, sounds_total)
pub fn generate_all_with_progress<F>(
    config: &GeneratorConfig,
    on_progress: F,
) -> Result<Vec<RenderedSound>>
where
    F: Fn(usize, usize),
{
    if let Some(reason) = config.validate() {
        return Err(SfxError::invalid_preset(reason));
    }

    let output_dir = config.output_dir();
    std::fs::create_dir_all(&output_dir).map_err(|e| SfxError::storage(&output_dir, e))?;

    info!(
        "Generating {} sounds -> {}",
        config.presets.len(),
        output_dir.display()
    );

    let total = config.presets.len();
    let mut rendered = Vec::with_capacity(total);

    for preset in &config.presets {
        let sound = generate_preset(preset, &config.output_path(preset))?;

        info!(
            "  {} ({} frames, {:.2}s)",
            sound.path.display(),
            sound.frames,
            sound.duration_sec()
        );

        rendered.push(sound);
        on_progress(rendered.len(), total);
    }

    Ok(rendered)
}

/// Renders one preset to `path`.
pub fn generate_preset(preset: &SoundPreset, path: &Path) -> Result<RenderedSound> {
    render_tone(path, preset.duration_sec, &preset.frequencies, preset.volume)?;

    Ok(RenderedSound {
        name: preset.name.clone(),
        path: path.to_path_buf(),
        frames: frame_count(preset.duration_sec),
    })
}
