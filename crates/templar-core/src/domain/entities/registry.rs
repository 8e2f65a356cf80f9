//! The template registry: template name → extension recorded at creation.
//!
//! The registry is the in-memory mirror of `registry.json`. It knows how to
//! decode and encode that file but performs no I/O itself; the store that
//! owns it decides when to read and when to flush.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::domain::{DomainError, Extension, TemplateName};

/// Name → extension table.
///
/// Keys are kept as plain strings so a hand-edited file with an odd key
/// still loads; lookups always go through a validated [`TemplateName`].
/// A `BTreeMap` keeps the serialized form stable between flushes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, Extension>,
}

impl Registry {
    /// An empty registry, serialized as `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a registry file.
    ///
    /// The document must be a JSON object whose values are all strings.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| DomainError::MalformedRegistry {
                reason: e.to_string(),
            })?;

        let Value::Object(map) = value else {
            return Err(DomainError::MalformedRegistry {
                reason: "top-level value is not an object".into(),
            });
        };

        let mut entries = BTreeMap::new();
        for (name, ext) in map {
            match ext {
                Value::String(ext) => {
                    entries.insert(name, Extension::from(ext.as_str()));
                }
                _ => return Err(DomainError::InvalidRegistryEntry { name }),
            }
        }

        Ok(Self { entries })
    }

    /// Encode as pretty-printed JSON with 4-space indentation.
    pub fn to_json(&self) -> Result<Vec<u8>, DomainError> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.entries
            .serialize(&mut ser)
            .map_err(|e| DomainError::MalformedRegistry {
                reason: e.to_string(),
            })?;
        Ok(out)
    }

    /// Record `name`'s extension, returning the previous one if any.
    pub fn insert(&mut self, name: &TemplateName, extension: Extension) -> Option<Extension> {
        self.entries.insert(name.as_str().to_string(), extension)
    }

    pub fn remove(&mut self, name: &TemplateName) -> Option<Extension> {
        self.entries.remove(name.as_str())
    }

    pub fn get(&self, name: &TemplateName) -> Option<&Extension> {
        self.entries.get(name.as_str())
    }

    pub fn contains(&self, name: &TemplateName) -> bool {
        self.entries.contains_key(name.as_str())
    }

    /// Drop an entry by its raw key (used when repairing odd keys).
    pub fn remove_key(&mut self, key: &str) -> Option<Extension> {
        self.entries.remove(key)
    }

    /// Raw keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
