//! YAML documents with a mapping at the top level
//!
//! A [`Document`] is what both merge inputs decode to and what the merge
//! produces. Decoding rejects any root that is not a mapping, so the merge
//! itself never has to deal with sequences or scalars.

mod io;

pub use io::{load, store};

use serde::Serialize;
use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::{Result, document_encode_failed, document_parse_failed, not_a_mapping};

/// An ordered top-level YAML mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Mapping);

impl Document {
    #[allow(dead_code)] // Used by tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode YAML text. `origin` names the source in error messages.
    ///
    /// Merge keys (`<<: *anchor`) are expanded at every depth before the
    /// root is checked. Duplicate keys are a parse error.
    pub fn decode(text: &str, origin: &str) -> Result<Self> {
        let mut value: YamlValue =
            serde_yaml::from_str(text).map_err(|e| document_parse_failed(origin, e.to_string()))?;
        value
            .apply_merge()
            .map_err(|e| document_parse_failed(origin, e.to_string()))?;

        match value {
            YamlValue::Mapping(mapping) => Ok(Self(mapping)),
            other => Err(not_a_mapping(origin, kind_of(&other))),
        }
    }

    /// Encode as YAML text
    pub fn encode(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| document_encode_failed(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)] // Used by tests
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)] // Used by tests
    pub fn get(&self, key: &str) -> Option<&YamlValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &YamlValue> {
        self.0.keys()
    }

    /// Insert `value` under `key`, returning the value it replaced.
    ///
    /// A replaced key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: YamlValue, value: YamlValue) -> Option<YamlValue> {
        self.0.insert(key, value)
    }

    /// Sort mapping keys at every depth, including mappings nested in sequences.
    pub fn sort_keys(&mut self) {
        sort_mapping(&mut self.0);
    }
}

impl IntoIterator for Document {
    type Item = (YamlValue, YamlValue);
    type IntoIter = <Mapping as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Human-readable name of a YAML node kind
fn kind_of(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}

fn sort_mapping(mapping: &mut Mapping) {
    let mut entries: Vec<(YamlValue, YamlValue)> = std::mem::take(mapping).into_iter().collect();
    entries.sort_by_cached_key(|(key, _)| sort_key(key));

    for (key, mut value) in entries {
        sort_value(&mut value);
        mapping.insert(key, value);
    }
}

fn sort_value(value: &mut YamlValue) {
    match value {
        YamlValue::Mapping(mapping) => sort_mapping(mapping),
        YamlValue::Sequence(items) => items.iter_mut().for_each(sort_value),
        YamlValue::Tagged(tagged) => sort_value(&mut tagged.value),
        _ => {}
    }
}

/// Keys compare by their text; non-string keys by their YAML rendering
fn sort_key(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
