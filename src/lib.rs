//! sfx-gen: renders short UI sound effects as 16-bit mono WAV files.
//!
//! Each sound is a mix of sine tones with a short linear fade at both
//! ends, written to `<assets_dir>/sfx/<name>.wav`.
//!
//! # Modules
//!
//! - [`audio`]: Tone synthesis and WAV writing
//! - [`generation`]: Renders the preset table to disk
//! - [`types`]: Sound presets and the built-in table
//! - [`config`]: Generator configuration (GeneratorConfig)
//! - [`error`]: Error types and codes (SfxError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use sfx_gen::{generate_all, GeneratorConfig};
//!
//! let config = GeneratorConfig::with_assets_dir("public");
//! for sound in generate_all(&config)? {
//!     println!("{} ({:.2}s)", sound.path.display(), sound.duration_sec());
//! }
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use audio::{render_tone, ToneSamples};
pub use config::GeneratorConfig;
pub use error::{ErrorCode, Result, SfxError};
pub use generation::{generate_all, RenderedSound};
pub use types::{default_presets, SoundPreset, DEFAULT_VOLUME};
