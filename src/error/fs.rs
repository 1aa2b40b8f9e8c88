//! File system errors

use std::io;
use std::path::Path;

use super::MergeError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> MergeError {
    MergeError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MergeError {
    MergeError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> MergeError {
    MergeError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MergeError {
    MergeError::IoError {
        message: message.into(),
    }
}

/// Maps a failed read of `path`, keeping a missing file distinct from other failures
pub fn from_read(path: &Path, err: &io::Error) -> MergeError {
    if err.kind() == io::ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        read_failed(path.display().to_string(), err.to_string())
    }
}

/// Maps a failed write of `path`
pub fn from_write(path: &Path, err: &io::Error) -> MergeError {
    write_failed(path.display().to_string(), err.to_string())
}
