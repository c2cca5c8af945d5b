//! Error types for synthesis operations.

use thiserror::Error;

/// Errors produced by note lookup and signal synthesis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// The identifier does not name one of the 108 keyboard notes.
    #[error("unknown note: {0}")]
    UnknownNote(String),

    /// A synthesis parameter was zero, negative or not finite, or the
    /// requested signal would exceed [`MAX_SAMPLES`](crate::MAX_SAMPLES).
    #[error(
        "invalid synthesis parameter '{name}': {value} (must be finite, > 0 and fit in 16777216 samples)"
    )]
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl SynthError {
    /// Create an unknown note error.
    pub fn unknown_note(id: impl Into<String>) -> Self {
        SynthError::UnknownNote(id.into())
    }
}

/// Convenience result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Reject `value` unless it is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SynthError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_note_display() {
        let err = SynthError::unknown_note("H4");
        assert_eq!(err.to_string(), "unknown note: H4");
    }

    #[test]
    fn invalid_parameter_display() {
        let err = SynthError::InvalidParameter {
            name: "duration",
            value: -1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("'duration'"), "got: {msg}");
        assert!(msg.contains("-1"), "got: {msg}");
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("x", 0.0).is_err());
        assert!(ensure_positive("x", -3.0).is_err());
        assert!(ensure_positive("x", f64::NAN).is_err());
        assert!(ensure_positive("x", f64::INFINITY).is_err());
        assert_eq!(ensure_positive("x", 2.5), Ok(2.5));
    }
}
