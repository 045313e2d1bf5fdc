//! Tone synthesis with linear fade envelopes.
//!
//! A tone is the equal-weight sum of sine waves at the requested
//! frequencies, scaled by a volume envelope that ramps linearly in over the
//! first frames and out over the last ones, then truncated to 16-bit PCM.

use std::f64::consts::PI;
use std::path::Path;

use tracing::debug;

use super::wav::{write_wav, SAMPLE_RATE};
use crate::error::{Result, SfxError};

/// Longest fade applied at either end of a tone, in seconds.
pub const MAX_FADE_SEC: f64 = 0.01;

/// Full-scale 16-bit sample magnitude.
const FULL_SCALE: f64 = i16::MAX as f64;

/// Number of frames in a tone of the given duration.
pub fn frame_count(duration_sec: f64) -> usize {
    (SAMPLE_RATE as f64 * duration_sec) as usize
}

/// Number of frames in each fade.
///
/// 10 ms, or a fifth of the tone for tones shorter than 50 ms.
pub fn fade_length(duration_sec: f64) -> usize {
    (SAMPLE_RATE as f64 * MAX_FADE_SEC.min(duration_sec / 5.0)) as usize
}

/// Amplitude of frame `index` in a tone of `total` frames with `fade`-frame ramps.
///
/// With `fade == 0` neither ramp applies.
pub fn envelope(index: usize, total: usize, fade: usize, volume: f64) -> f64 {
    let mut amp = volume;
    if index < fade {
        amp *= index as f64 / fade as f64;
    } else if index + fade > total {
        amp *= total.saturating_sub(index) as f64 / fade as f64;
    }
    amp
}

/// Average of the sines at `frequencies` at time `t` seconds.
pub fn mix(frequencies: &[f64], t: f64) -> f64 {
    let mut val = 0.0;
    for &f in frequencies {
        val += (2.0 * PI * f * t).sin();
    }
    val / frequencies.len() as f64
}

/// Clamps to [-1, 1] and truncates toward zero into a 16-bit sample.
pub fn quantize(value: f64) -> i16 {
    (value.clamp(-1.0, 1.0) * FULL_SCALE) as i16
}

/// Checks that a tone can be rendered.
pub fn validate_tone(duration_sec: f64, frequencies: &[f64]) -> Result<()> {
    if !(duration_sec.is_finite() && duration_sec > 0.0) {
        return Err(SfxError::invalid_duration(duration_sec));
    }

    if frequencies.is_empty() {
        return Err(SfxError::no_frequencies());
    }

    if let Some(&bad) = frequencies.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
        return Err(SfxError::invalid_frequency(bad));
    }

    Ok(())
}

/// Lazily generated samples of one tone, in frame order.
#[derive(Debug, Clone)]
pub struct ToneSamples<'a> {
    frequencies: &'a [f64],
    volume: f64,
    total: usize,
    fade: usize,
    index: usize,
}

impl<'a> ToneSamples<'a> {
    /// Creates the sample stream for a tone, validating its parameters.
    pub fn new(duration_sec: f64, frequencies: &'a [f64], volume: f64) -> Result<Self> {
        validate_tone(duration_sec, frequencies)?;

        Ok(Self {
            frequencies,
            volume,
            total: frame_count(duration_sec),
            fade: fade_length(duration_sec),
            index: 0,
        })
    }

    /// Total number of frames this tone produces.
    pub fn total_frames(&self) -> usize {
        self.total
    }

    /// Frames in each fade ramp.
    pub fn fade_frames(&self) -> usize {
        self.fade
    }
}

impl Iterator for ToneSamples<'_> {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.index >= self.total {
            return None;
        }

        let i = self.index;
        self.index += 1;

        let t = i as f64 / SAMPLE_RATE as f64;
        let amp = envelope(i, self.total, self.fade, self.volume);
        Some(quantize(mix(self.frequencies, t) * amp))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSamples<'_> {}

/// Renders a tone to a mono 16-bit WAV file at `path`, replacing any existing file.
///
/// Invalid parameters are rejected before the file is created.
///
/// # Example
///
/// ```ignore
/// use sfx_gen::audio::render_tone;
/// use sfx_gen::types::DEFAULT_VOLUME;
///
/// render_tone(Path::new("public/sfx/correct.wav"), 0.25, &[880.0, 1320.0], DEFAULT_VOLUME)?;
/// ```
pub fn render_tone(path: &Path, duration_sec: f64, frequencies: &[f64], volume: f64) -> Result<()> {
    let samples = ToneSamples::new(duration_sec, frequencies, volume)?;

    debug!(
        path = %path.display(),
        frames = samples.total_frames(),
        fade = samples.fade_frames(),
        "rendering tone"
    );

    write_wav(samples, path)
}
