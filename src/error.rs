use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures of the I/O step that supplies bytes to the detector.
///
/// Matching itself never fails; an unrecognized buffer is `Format::Unknown`.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Empty path")]
    EmptyPath,

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Stream error: {0}")]
    Stream(#[from] io::Error),
}

impl DetectError {
    /// Classifies an OS error raised while opening or reading `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => DetectError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => DetectError::PermissionDenied(path.to_path_buf()),
            _ => DetectError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The `io::ErrorKind` this failure corresponds to.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            DetectError::EmptyPath => io::ErrorKind::InvalidInput,
            DetectError::NotFound(_) => io::ErrorKind::NotFound,
            DetectError::PermissionDenied(_) => io::ErrorKind::PermissionDenied,
            DetectError::Io { source, .. } => source.kind(),
            DetectError::Stream(source) => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;
