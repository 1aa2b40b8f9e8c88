//! Loading and storing documents on disk
//!
//! Each file is opened, used and closed inside a single call; nothing holds a
//! handle across the merge.

use std::path::Path;

use super::Document;
use crate::error::{Result, fs};

/// Read and decode the document at `path`
pub fn load(path: &Path) -> Result<Document> {
    let text = std::fs::read_to_string(path).map_err(|e| fs::from_read(path, &e))?;
    let document = Document::decode(&text, &path.display().to_string())?;

    tracing::debug!(path = %path.display(), keys = document.len(), "loaded document");
    Ok(document)
}

/// Encode `document` and write it to `path`, replacing any existing content.
///
/// Encoding finishes before the file is opened, so an encode failure leaves
/// `path` untouched.
pub fn store(document: &Document, path: &Path) -> Result<()> {
    let yaml = document.encode()?;
    std::fs::write(path, yaml).map_err(|e| fs::from_write(path, &e))?;

    tracing::debug!(path = %path.display(), keys = document.len(), "stored document");
    Ok(())
}
