//! Error types for the synthesis core.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during asset synthesis.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = SynthError::invalid_param("feedback", "must be between 0 and 0.95");
        assert!(err.to_string().contains("feedback"));
        assert!(err.to_string().contains("between 0 and 0.95"));
    }

    #[test]
    fn test_invalid_duration_message() {
        let err = SynthError::InvalidDuration { duration: -1.0 };
        assert!(err.to_string().contains("-1"));
    }
}
