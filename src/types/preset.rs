//! Sound preset type and the built-in preset table.

/// Peak volume shared by all built-in presets.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// A named, fixed tone definition rendered to `<name>.wav`.
///
/// Presets are built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundPreset {
    /// File stem of the rendered sound (e.g. "click").
    pub name: String,

    /// Length of the sound in seconds. Must be > 0.
    pub duration_sec: f64,

    /// Tone frequencies in Hz, mixed with equal weight.
    pub frequencies: Vec<f64>,

    /// Peak amplitude, nominally in [0, 1]. Louder values clip.
    pub volume: f64,
}

impl SoundPreset {
    /// Creates a preset at the default volume.
    pub fn new(name: impl Into<String>, duration_sec: f64, frequencies: &[f64]) -> Self {
        Self {
            name: name.into(),
            duration_sec,
            frequencies: frequencies.to_vec(),
            volume: DEFAULT_VOLUME,
        }
    }

    /// Returns a copy of this preset with a different volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Output file name for this preset.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name)
    }
}

/// Returns the built-in UI sound table.
///
/// | name       | seconds | Hz               |
/// |------------|---------|------------------|
/// | click      | 0.06    | 1000             |
/// | correct    | 0.25    | 880, 1320        |
/// | incorrect  | 0.25    | 220              |
/// | transition | 0.35    | 520, 780         |
/// | success    | 0.5     | 660, 990, 1320   |
pub fn default_presets() -> Vec<SoundPreset> {
    vec![
        SoundPreset::new("click", 0.06, &[1000.0]),
        SoundPreset::new("correct", 0.25, &[880.0, 1320.0]),
        SoundPreset::new("incorrect", 0.25, &[220.0]),
        SoundPreset::new("transition", 0.35, &[520.0, 780.0]),
        SoundPreset::new("success", 0.5, &[660.0, 990.0, 1320.0]),
    ]
}
