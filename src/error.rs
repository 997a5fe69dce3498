use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for the quote patcher
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied while {operation}: {}", path.display())]
    PermissionDenied { path: PathBuf, operation: String },

    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("File is not valid UTF-8: {} ({source})", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn permission_error(path: impl Into<PathBuf>, operation: impl Into<String>) -> Self {
        Self::PermissionDenied {
            path: path.into(),
            operation: operation.into(),
        }
    }

    /// Create a new decode error for a file whose bytes are not UTF-8
    pub fn decode_error(path: impl Into<PathBuf>, source: FromUtf8Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Stable tag for the error class, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            PatchError::NotFound { .. } => "not_found",
            PatchError::PermissionDenied { .. } => "permission_denied",
            PatchError::Io { .. } => "io_error",
            PatchError::Decode { .. } => "decode_error",
        }
    }

    /// Whether the error comes from reaching the file at all, as opposed to its content
    pub fn is_file_access(&self) -> bool {
        matches!(
            self,
            PatchError::NotFound { .. } | PatchError::PermissionDenied { .. } | PatchError::Io { .. }
        )
    }
}

impl From<std::io::Error> for PatchError {
    fn from(error: std::io::Error) -> Self {
        PatchError::io_error(error, None::<PathBuf>)
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::io_error(err, Some(path))
}
