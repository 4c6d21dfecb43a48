//! Error types for fuzzysum.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while computing a digest.
///
/// I/O failures inside the pipeline keep their originating [`io::Error`]
/// (and its kind) rather than being collapsed into an opaque compute error;
/// the file entry point additionally maps the two common open failures to
/// dedicated variants.
#[derive(Debug)]
pub enum FuzzyError {
    /// The path given to the file-hashing entry point does not exist or is
    /// not a regular file.
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The file exists but is not readable.
    PermissionDenied {
        /// The path that was requested.
        path: PathBuf,
    },

    /// An I/O error occurred while reading input data.
    Io(io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl FuzzyError {
    /// Maps a failed file open to the matching variant, keeping the path.
    pub(crate) fn open(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FuzzyError::FileNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => FuzzyError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FuzzyError::Io(err),
        }
    }
}

impl fmt::Display for FuzzyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuzzyError::FileNotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            FuzzyError::PermissionDenied { path } => {
                write!(f, "file not readable: {}", path.display())
            }
            FuzzyError::Io(e) => write!(f, "io error: {}", e),
            FuzzyError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for FuzzyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FuzzyError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FuzzyError {
    fn from(e: io::Error) -> Self {
        FuzzyError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "test");
        let err: FuzzyError = io_err.into();
        match err {
            FuzzyError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_open_maps_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err = FuzzyError::open(Path::new("/no/such/file"), io_err);
        matches!(err, FuzzyError::FileNotFound { .. });
    }

    #[test]
    fn test_open_maps_permission_denied() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "test");
        let err = FuzzyError::open(Path::new("/locked"), io_err);
        matches!(err, FuzzyError::PermissionDenied { .. });
    }

    #[test]
    fn test_display() {
        let err = FuzzyError::FileNotFound {
            path: PathBuf::from("/no/such/file"),
        };
        assert!(err.to_string().contains("file not found"));

        let err = FuzzyError::InvalidConfig {
            message: "buffer size must be non-zero",
        };
        assert!(err.to_string().contains("invalid config"));
    }
}
