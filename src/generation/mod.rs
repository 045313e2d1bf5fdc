//! Sound generation module.
//!
//! Provides the pipeline that renders the preset table to WAV files.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{generate_all, generate_all_with_progress, generate_preset, RenderedSound};
