//! Error types and handling for merge-yaml
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: reading inputs and writing the output
//! - [`document`]: decoding and encoding YAML documents

pub mod document;
pub mod fs;

pub use document::{
    encode_failed as document_encode_failed, not_a_mapping,
    parse_failed as document_parse_failed,
};
pub use fs::io_error;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for merge-yaml operations
#[derive(Error, Diagnostic, Debug)]
pub enum MergeError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(merge_yaml::fs::not_found),
        help("Pass --base/--header or run from the directory holding the documents")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(merge_yaml::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(merge_yaml::fs::write_failed),
        help("Check that the output directory exists and is writable")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(merge_yaml::fs::io_error))]
    IoError { message: String },

    // Document errors
    #[error("Failed to parse YAML document: {path}: {reason}")]
    #[diagnostic(code(merge_yaml::document::parse_failed))]
    DocumentParseFailed { path: String, reason: String },

    #[error("Document is not a mapping: {path} (found {found})")]
    #[diagnostic(
        code(merge_yaml::document::not_a_mapping),
        help("Both documents must have a key/value mapping at the top level")
    )]
    NotAMapping { path: String, found: String },

    #[error("Failed to encode merged document: {reason}")]
    #[diagnostic(code(merge_yaml::document::encode_failed))]
    DocumentEncodeFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(merge_yaml::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MergeError>;
