//! Core types for sfx-gen.
//!
//! - [`SoundPreset`]: A named tone definition rendered to one WAV file

mod preset;

pub use preset::{default_presets, SoundPreset, DEFAULT_VOLUME};
