//! Error types for sfx-gen.
//!
//! Defines the error codes and the error type used when rendering
//! sound effects, so failures are reported consistently.

use std::fmt;
use std::path::Path;

/// Error codes identifying why a render failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Requested duration is not a positive, finite number of seconds.
    /// Trigger: duration <= 0, NaN or infinite.
    InvalidDuration,

    /// Frequency list cannot be synthesized.
    /// Trigger: empty list, or a frequency that is not positive and finite.
    InvalidFrequencies,

    /// Preset table entry cannot be turned into an output file.
    /// Trigger: empty, duplicate or path-like preset name.
    InvalidPreset,

    /// Output directory or file could not be created or written.
    /// Trigger: permissions, missing mount, disk full.
    StorageFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidFrequencies => "INVALID_FREQUENCIES",
            ErrorCode::InvalidPreset => "INVALID_PRESET",
            ErrorCode::StorageFailed => "STORAGE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => "Duration must be a positive number of seconds",
            ErrorCode::InvalidFrequencies => {
                "At least one positive frequency is required"
            }
            ErrorCode::InvalidPreset => "Preset names must be unique, plain file stems",
            ErrorCode::StorageFailed => "Failed to write the output file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDuration => {
                "Give the preset a duration greater than zero (e.g., 0.25)"
            }
            ErrorCode::InvalidFrequencies => {
                "List one or more frequencies in Hz, all greater than zero (e.g., [880, 1320])"
            }
            ErrorCode::InvalidPreset => {
                "Rename the preset to a unique name without path separators (e.g., \"click\")"
            }
            ErrorCode::StorageFailed => {
                "Check that the assets directory is writable and the disk has free space, \
                 then run the generator again"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for sound rendering.
#[derive(Debug)]
pub struct SfxError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SfxError {
    /// Creates a new SfxError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SfxError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration_sec: f64) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!("Invalid duration: {} seconds (must be > 0)", duration_sec),
        )
    }

    /// Creates an INVALID_FREQUENCIES error for an empty frequency list.
    pub fn no_frequencies() -> Self {
        Self::new(
            ErrorCode::InvalidFrequencies,
            "Frequency list cannot be empty",
        )
    }

    /// Creates an INVALID_FREQUENCIES error for a single bad frequency.
    pub fn invalid_frequency(frequency: f64) -> Self {
        Self::new(
            ErrorCode::InvalidFrequencies,
            format!("Invalid frequency: {} Hz (must be > 0)", frequency),
        )
    }

    /// Creates an INVALID_PRESET error.
    pub fn invalid_preset(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidPreset,
            format!("Invalid preset table: {}", reason.into()),
        )
    }

    /// Creates a STORAGE_FAILED error wrapping the underlying I/O failure.
    pub fn storage(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::StorageFailed,
            format!("Failed to write {}: {}", path.display(), source),
            source,
        )
    }
}

impl fmt::Display for SfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for SfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SfxError.
pub type Result<T> = std::result::Result<T, SfxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidDuration.as_str(), "INVALID_DURATION");
        assert_eq!(ErrorCode::InvalidFrequencies.as_str(), "INVALID_FREQUENCIES");
        assert_eq!(ErrorCode::InvalidPreset.as_str(), "INVALID_PRESET");
        assert_eq!(ErrorCode::StorageFailed.as_str(), "STORAGE_FAILED");
    }

    #[test]
    fn error_code_hints_not_empty() {
        for code in [
            ErrorCode::InvalidDuration,
            ErrorCode::InvalidFrequencies,
            ErrorCode::InvalidPreset,
            ErrorCode::StorageFailed,
        ] {
            assert!(!code.description().is_empty());
            assert!(!code.recovery_hint().is_empty());
        }
    }

    #[test]
    fn sfx_error_display() {
        let err = SfxError::invalid_duration(-1.5);
        assert!(err.to_string().contains("INVALID_DURATION"));
        assert!(err.to_string().contains("-1.5"));
        assert!(err.to_string().contains("Recovery:"));
    }

    #[test]
    fn storage_error_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err = SfxError::storage(Path::new("/tmp/click.wav"), io_err);

        assert_eq!(err.code, ErrorCode::StorageFailed);
        assert!(err.message.contains("click.wav"));

        let source = err.source().expect("storage errors carry their cause");
        let io_err = source.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
