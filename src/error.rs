//! Error types for the matterstamp library
//!
//! Every failure in a run is fatal, so the error type mostly exists to carry
//! the offending path and to classify the failure for callers.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum MatterStampError {
    /// I/O errors that do not map to a more specific variant
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Errors raised while walking the folder tree
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// File or folder does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File or folder exists but cannot be accessed
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Configuration content is not a YAML mapping
    #[error("Malformed configuration document {path}: {reason}")]
    MalformedDocument { path: PathBuf, reason: String },

    /// Required configuration key is absent
    #[error("Missing configuration key: {key}")]
    MissingKey { key: String },

    /// Configuration key holds a value of the wrong type
    #[error("Invalid value for configuration key {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Root of the walk is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MatterStampError>;

/// Coarse classification of a [`MatterStampError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    MalformedDocument,
    InvalidArgument,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::PermissionDenied => write!(f, "PERMISSION_DENIED"),
            Self::MalformedDocument => write!(f, "MALFORMED_DOCUMENT"),
            Self::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            Self::Io => write!(f, "IO"),
        }
    }
}

impl MatterStampError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new malformed document error
    pub fn malformed_document(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new missing key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Create a new invalid value error
    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a new not a directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Attach a path to an I/O error, promoting the kinds callers care about
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::file_not_found(path),
            io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::NotFound,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::MalformedDocument { .. }
            | Self::MissingKey { .. }
            | Self::InvalidValue { .. } => ErrorKind::MalformedDocument,
            Self::NotADirectory { .. } => ErrorKind::InvalidArgument,
            Self::Io { .. } => ErrorKind::Io,
            Self::Walk(err) => match err.io_error().map(io::Error::kind) {
                Some(io::ErrorKind::NotFound) => ErrorKind::NotFound,
                Some(io::ErrorKind::PermissionDenied) => ErrorKind::PermissionDenied,
                _ => ErrorKind::Io,
            },
        }
    }
}
