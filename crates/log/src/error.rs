//! Error handling for ferrule-log

use thiserror::Error;

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
#[derive(Debug, Error)]
pub enum LogError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Filter directive could not be parsed
    #[error("invalid filter: {0}")]
    Filter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed
    #[error("subscriber initialization failed: {0}")]
    Init(String),
}

impl LogError {
    /// Create a filter error for `directive`
    pub(crate) fn filter(directive: &str, reason: impl std::fmt::Display) -> Self {
        Self::Filter(format!("{directive}: {reason}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LogError::filter("foo=loud", "invalid level").to_string(),
            "invalid filter: foo=loud: invalid level"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(LogError::from(io).to_string(), "IO error: missing");
    }
}
