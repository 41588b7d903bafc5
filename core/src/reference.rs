#![deny(missing_docs)]

//! # Reference Cell
//!
//! The `$ref` pointer carried by entities that may stand in for an inline body.
//!
//! Helpers here classify a reference and split its JSON-pointer fragment, but
//! never fetch or dereference anything.

use crate::codec::ObjectWriter;
use crate::error::{json_kind, SpecError, SpecResult};
use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};
use url::Url;

/// Reserved key holding the pointer.
pub const REF_KEY: &str = "$ref";

/// Where a `$ref` points relative to the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Fragment-only reference into the current document (`#/definitions/Pet`).
    Local,
    /// Relative URI reference (`Pet`, `pets.json#/Pet`).
    Relative,
    /// Absolute URI (`https://example.com/pets.json#/Pet`).
    Remote,
}

/// Optional `$ref` URI.
///
/// An empty string is treated as unset, so it is never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Reference(Option<String>);

impl Reference {
    /// Creates a reference to `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        if uri.is_empty() {
            Self(None)
        } else {
            Self(Some(uri))
        }
    }

    /// Returns true when a pointer is present.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The raw URI, if set.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Classifies the pointer without resolving it.
    pub fn kind(&self) -> Option<ReferenceKind> {
        let uri = self.as_str()?;
        Some(if uri.starts_with('#') {
            ReferenceKind::Local
        } else if Url::parse(uri).is_ok() {
            ReferenceKind::Remote
        } else {
            ReferenceKind::Relative
        })
    }

    /// The part after `#`, if the pointer has one.
    pub fn fragment(&self) -> Option<&str> {
        self.as_str()?.split_once('#').map(|(_, frag)| frag)
    }

    /// Decoded JSON-pointer segments of the fragment.
    ///
    /// `#/definitions/a~1b` yields `["definitions", "a/b"]`; `#` yields an empty
    /// list. Returns `None` when there is no fragment or it is not a pointer.
    pub fn pointer_segments(&self) -> Option<Vec<String>> {
        let fragment = self.fragment()?;
        if fragment.is_empty() {
            return Some(Vec::new());
        }
        let pointer = fragment.strip_prefix('/')?;
        Some(pointer.split('/').map(decode_pointer_segment).collect())
    }

    pub(crate) fn write_to(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        match &self.0 {
            Some(uri) => out.insert(REF_KEY, Value::String(uri.clone())),
            None => Ok(()),
        }
    }

    /// Removes `$ref` from `object` so it is not mistaken for an unknown field.
    pub(crate) fn take_from(
        object: &mut Map<String, Value>,
        entity: &'static str,
    ) -> SpecResult<Self> {
        match object.remove(REF_KEY) {
            None => Ok(Self(None)),
            Some(Value::String(uri)) => Ok(Self::new(uri)),
            Some(other) => Err(SpecError::InvalidReferenceValue {
                entity,
                found: json_kind(&other),
            }),
        }
    }
}

impl From<&str> for Reference {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

/// Decodes a JSON Pointer segment (handles `~1`, `~0` and percent-encoding).
fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_empty_uri_is_unset() {
        assert!(!Reference::new("").is_set());
        assert!(Reference::new("Cat").is_set());
        assert_eq!(Reference::default().as_str(), None);
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            Reference::new("#/definitions/Pet").kind(),
            Some(ReferenceKind::Local)
        );
        assert_eq!(Reference::new("Cat").kind(), Some(ReferenceKind::Relative));
        assert_eq!(
            Reference::new("pets.json#/Pet").kind(),
            Some(ReferenceKind::Relative)
        );
        assert_eq!(
            Reference::new("https://example.com/pets.json#/Pet").kind(),
            Some(ReferenceKind::Remote)
        );
        assert_eq!(Reference::default().kind(), None);
    }

    #[test]
    fn test_pointer_segments() {
        let r = Reference::new("#/definitions/User%20Profile~1details");
        assert_eq!(
            r.pointer_segments(),
            Some(vec!["definitions".to_string(), "User Profile/details".to_string()])
        );
        assert_eq!(Reference::new("doc.json#").pointer_segments(), Some(vec![]));
        assert_eq!(Reference::new("#anchor").pointer_segments(), None);
        assert_eq!(Reference::new("Cat").pointer_segments(), None);
    }

    #[test]
    fn test_take_from_removes_key() {
        let mut map = object(json!({"$ref": "Cat", "description": "d"}));
        let r = Reference::take_from(&mut map, "Schema").unwrap();
        assert_eq!(r.as_str(), Some("Cat"));
        assert!(!map.contains_key(REF_KEY));
        assert!(map.contains_key("description"));
    }

    #[test]
    fn test_take_from_missing_key() {
        let mut map = object(json!({"description": "d"}));
        let r = Reference::take_from(&mut map, "Schema").unwrap();
        assert!(!r.is_set());
    }

    #[test]
    fn test_take_from_rejects_non_string() {
        let mut map = object(json!({"$ref": 42}));
        let err = Reference::take_from(&mut map, "Parameter").unwrap_err();
        assert!(matches!(
            err,
            SpecError::InvalidReferenceValue {
                entity: "Parameter",
                found: "number"
            }
        ));
    }

    #[test]
    fn test_write_only_when_set() {
        let mut out = ObjectWriter::new("Schema");
        Reference::default().write_to(&mut out).unwrap();
        assert!(out.finish().is_empty());

        let mut out = ObjectWriter::new("Schema");
        Reference::new("Cat").write_to(&mut out).unwrap();
        assert_eq!(Value::Object(out.finish()), json!({"$ref": "Cat"}));
    }
}
