//! Audio output module.
//!
//! Tone synthesis and WAV file writing for the rendered sounds.

pub mod tone;
pub mod wav;

// Re-export commonly used items
pub use tone::{render_tone, ToneSamples};
pub use wav::{samples_to_duration, write_wav, write_wav_to_buffer, CHANNELS, SAMPLE_RATE};
