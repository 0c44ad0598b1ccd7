//! Error types for tokentally-core

use thiserror::Error;

/// Normalization error type
#[derive(Debug, Error)]
pub enum Error {
    /// Response body is not valid JSON
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Response body exceeds the accepted size
    #[error("body too large: {size} bytes (limit {limit})")]
    BodyTooLarge {
        /// Body size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },
}

/// Discriminant of [`Error`], for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::MalformedInput`]
    MalformedInput,
    /// See [`Error::BodyTooLarge`]
    BodyTooLarge,
}

impl Error {
    /// Get the kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::BodyTooLarge { .. } => ErrorKind::BodyTooLarge,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_malformed_input() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not valid json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().starts_with("malformed input:"));
    }

    #[test]
    fn test_body_too_large_display() {
        let err = Error::BodyTooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(err.kind(), ErrorKind::BodyTooLarge);
        assert_eq!(err.to_string(), "body too large: 2048 bytes (limit 1024)");
    }
}
