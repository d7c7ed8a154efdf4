//! Error types for pattern rendering.

use std::io;

use thiserror::Error;

/// Result type alias using PatternError.
pub type PatternResult<T> = Result<T, PatternError>;

#[derive(Debug, Error)]
pub enum PatternError {
    /// The size parameter was zero, negative, out of range or not a number.
    #[error("n must be a positive integer, got '{input}'")]
    InvalidArgument { input: String },

    #[error("failed to write pattern")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn invalid_argument(input: impl Into<String>) -> Self {
        Self::InvalidArgument { input: input.into() }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// The reader on the other end of the output went away, e.g. `| head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn io_message_leaves_cause_to_source() {
        let err = PatternError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "failed to write pattern");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("pipe closed"));

        let report = format!("{:?}", anyhow::Error::from(err));
        assert_eq!(report.matches("pipe closed").count(), 1);
    }

    #[test]
    fn broken_pipe_is_detected() {
        assert!(PatternError::from(io::Error::from(io::ErrorKind::BrokenPipe)).is_broken_pipe());
        assert!(!PatternError::from(io::Error::from(io::ErrorKind::Other)).is_broken_pipe());
        assert!(!PatternError::invalid_argument("0").is_broken_pipe());
    }
}
