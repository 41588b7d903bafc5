#![deny(missing_docs)]

//! # Extension Bag
//!
//! Vendor extensions (`x-*` keys) attached to most spec entities. The bag is
//! split out of a flat JSON object on decode and flattened back into it on
//! encode; it never shares a key with the structural fields of its entity.

use crate::error::{SpecError, SpecResult};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Prefix every extension key must carry.
///
/// Matching is an exact, case-sensitive byte comparison: `X-Foo` is not an extension.
pub const EXTENSION_PREFIX: &str = "x-";

/// Ordered map of vendor extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` belongs in an extension bag.
    pub fn is_extension_key(key: &str) -> bool {
        key.starts_with(EXTENSION_PREFIX)
    }

    /// Stores `value` under `key`, returning the previous value if any.
    ///
    /// # Errors
    ///
    /// `SpecError::InvalidExtensionKey` if `key` lacks the `x-` prefix.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> SpecResult<Option<Value>> {
        let key = key.into();
        if !Self::is_extension_key(&key) {
            return Err(SpecError::InvalidExtensionKey(key));
        }
        Ok(self.0.insert(key, value.into()))
    }

    /// Builder form of [`Extensions::add`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> SpecResult<Self> {
        self.add(key, value)?;
        Ok(self)
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value under `key` if it is a string.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the value under `key` if it is a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns the value under `key` if it is an array made only of strings.
    pub fn get_string_slice(&self, key: &str) -> Option<Vec<&str>> {
        self.get(key)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Number of extensions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the bag holds nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order, ready to be merged into an output object.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Moves every prefixed key of `object` into a new bag.
    ///
    /// Returns the bag and the untouched remaining keys, both in document order.
    pub fn split_from(object: Map<String, Value>) -> (Self, Map<String, Value>) {
        let mut extensions = IndexMap::new();
        let mut rest = Map::new();
        for (key, value) in object {
            if Self::is_extension_key(&key) {
                extensions.insert(key, value);
            } else {
                rest.insert(key, value);
            }
        }
        (Self(extensions), rest)
    }
}
