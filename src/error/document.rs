//! Document errors

use super::MergeError;

/// Creates a document parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MergeError {
    MergeError::DocumentParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a not-a-mapping error
pub fn not_a_mapping(path: impl Into<String>, found: impl Into<String>) -> MergeError {
    MergeError::NotAMapping {
        path: path.into(),
        found: found.into(),
    }
}

/// Creates a document encode failed error
pub fn encode_failed(reason: impl Into<String>) -> MergeError {
    MergeError::DocumentEncodeFailed {
        reason: reason.into(),
    }
}
