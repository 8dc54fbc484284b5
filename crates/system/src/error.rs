//! Error types for system operations

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Boxed error returned by caller-supplied handlers
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for system operations
#[derive(Error, Debug)]
pub enum SystemError {
    /// The visited root is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// I/O error
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A visitor handler failed
    #[error("handler failed for {}: {source}", .path.display())]
    Handler {
        /// Entry passed to the handler
        path: PathBuf,
        /// Error returned by the handler
        #[source]
        source: BoxError,
    },
}

/// Result type for system operations
pub type SystemResult<T> = Result<T, SystemError>;

impl SystemError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::NotADirectory(path) | Self::Io { path, .. } | Self::Handler { path, .. } => path,
        }
    }

    /// Whether the error came from a handler rather than the filesystem
    pub const fn is_handler_error(&self) -> bool {
        matches!(self, Self::Handler { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = SystemError::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /tmp/file.txt");

        let err = SystemError::io(
            Path::new("/missing"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error at /missing: gone");
        assert_eq!(err.path(), Path::new("/missing"));
        assert!(!err.is_handler_error());
    }
}
