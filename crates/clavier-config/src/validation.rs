//! Range checks for configuration values.
//!
//! Limits keep each recompute bounded: at most ten seconds of audio at
//! 192 kHz, which caps both the synthesis buffer and the FFT size.

use thiserror::Error;

/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Longest accepted chord in seconds.
pub const MAX_DURATION_SECS: f64 = 10.0;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Sample rate outside the accepted range.
    #[error("sample_rate {0} Hz out of range [8000, 192000]")]
    SampleRate(u32),

    /// Duration not in (0, 10] seconds.
    #[error("duration_secs {0} out of range (0, 10]")]
    Duration(f64),

    /// Zero preview length.
    #[error("preview_samples must be greater than zero")]
    EmptyPreview,

    /// Bit depth other than 16 or 32.
    #[error("bits_per_sample must be 16 or 32, got {0}")]
    UnsupportedBitDepth(u16),

    /// Multiple validation errors.
    #[error("{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check a sample rate.
pub fn validate_sample_rate(sample_rate: u32) -> ValidationResult<()> {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(())
    } else {
        Err(ValidationError::SampleRate(sample_rate))
    }
}

/// Check a chord duration. NaN and infinities are rejected.
pub fn validate_duration(duration_secs: f64) -> ValidationResult<()> {
    if duration_secs > 0.0 && duration_secs <= MAX_DURATION_SECS {
        Ok(())
    } else {
        Err(ValidationError::Duration(duration_secs))
    }
}

/// Check a WAV bit depth.
pub fn validate_bits_per_sample(bits: u16) -> ValidationResult<()> {
    match bits {
        16 | 32 => Ok(()),
        other => Err(ValidationError::UnsupportedBitDepth(other)),
    }
}

/// Fold a list of errors into one result.
pub(crate) fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
