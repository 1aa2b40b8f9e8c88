//! Shallow overlay of one document onto another
//!
//! Only top-level keys are combined. When both documents define a key the
//! overlay's value replaces the base's value wholesale; nested mappings are
//! never merged recursively.
//!
//! ```text
//! Base:    {"paths": {"/x": {}}, "info": {"title": "old", "version": "1"}}
//! Overlay: {"info": {"title": "new"}}
//! Result:  {"paths": {"/x": {}}, "info": {"title": "new"}}
//!                                ^^^^^^^^^^^^^^^^^^^^^^^^^
//!                          Entire "info" mapping replaced
//! ```
//!
//! Key order follows the base: a replaced key keeps its base position and
//! keys only the overlay defines are appended in overlay order.

use crate::document::Document;

/// Overlay `overlay`'s top-level keys onto `base`; `overlay` wins on collision.
pub fn shallow_merge(mut base: Document, overlay: Document) -> Document {
    for (key, value) in overlay {
        if base.insert(key.clone(), value).is_some() {
            tracing::debug!(key = ?key, "overlay replaces base key");
        }
    }
    base
}
