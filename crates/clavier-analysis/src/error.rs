//! Error types for analysis and export.

use thiserror::Error;

/// Errors that can occur while analyzing or exporting a signal.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Sample rate was zero, negative, or not finite.
    #[error("invalid sample rate: {0} (must be finite and > 0)")]
    InvalidSampleRate(f64),

    /// Failed to write an export file.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize JSON.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

pub(crate) fn ensure_sample_rate(sample_rate: f64) -> Result<f64> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(sample_rate)
    } else {
        Err(AnalysisError::InvalidSampleRate(sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_sample_rate_display() {
        let msg = AnalysisError::InvalidSampleRate(0.0).to_string();
        assert!(msg.contains("invalid sample rate: 0"), "got: {msg}");
    }

    #[test]
    fn io_source_is_some() {
        let err = AnalysisError::from(std::io::Error::other("mock"));
        assert!(err.source().is_some());
    }

    #[test]
    fn ensure_sample_rate_checks_sign_and_finiteness() {
        assert!(ensure_sample_rate(44100.0).is_ok());
        assert!(ensure_sample_rate(0.0).is_err());
        assert!(ensure_sample_rate(-1.0).is_err());
        assert!(ensure_sample_rate(f64::NAN).is_err());
    }
}
