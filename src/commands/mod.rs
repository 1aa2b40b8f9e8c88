//! Command implementations for merge-yaml CLI

pub mod completions;
pub mod merge;
pub mod version;
