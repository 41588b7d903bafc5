#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the `SpecError` enum returned by every encode and decode path.

use derive_more::Display;

/// Failure raised while encoding or decoding a spec entity.
///
/// Every variant is a local, synchronous failure: a decode either yields a
/// complete entity or one of these, never a partially filled value.
#[derive(Debug, Display)]
pub enum SpecError {
    /// Input is not valid JSON, or a value has the wrong JSON type for its position.
    #[display("Malformed JSON at {}: {detail}", display_path(path))]
    MalformedJson {
        /// JSON-pointer-like location of the offending value (empty for the root).
        path: String,
        /// What went wrong.
        detail: String,
    },

    /// A non-extension key that the entity does not know.
    #[display("Unknown field '{key}' in {entity}")]
    UnknownField {
        /// Entity being decoded.
        entity: &'static str,
        /// Offending key.
        key: String,
    },

    /// Programmatic attempt to store a key without the `x-` prefix in an extension bag.
    #[display("Invalid extension key '{_0}': extension keys must start with 'x-'")]
    InvalidExtensionKey(String),

    /// `$ref` holds something other than a string.
    #[display("Invalid $ref in {entity}: expected a string, found {found}")]
    InvalidReferenceValue {
        /// Entity being decoded.
        entity: &'static str,
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// A union-shaped field got a token matching none of its variants.
    #[display("Invalid {union} at {}: expected {expected}, found {found}", display_path(path))]
    InvalidSchemaShape {
        /// Location of the value.
        path: String,
        /// Union type being decoded.
        union: &'static str,
        /// Accepted token kinds.
        expected: &'static str,
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// Two contributor groups tried to write the same output key.
    #[display("Duplicate key '{key}' while encoding {entity}")]
    DuplicateKey {
        /// Entity being encoded.
        entity: &'static str,
        /// Colliding key.
        key: String,
    },

    /// The entity's minimum-content rule is violated.
    #[display("{entity} requires {field}")]
    MissingRequiredField {
        /// Entity being checked.
        entity: &'static str,
        /// Description of what is missing.
        field: &'static str,
    },
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for SpecError {}

impl SpecError {
    /// Builds a `MalformedJson` error for a value of the wrong kind at the current position.
    pub(crate) fn mismatch(expected: &str, found: &serde_json::Value) -> Self {
        SpecError::MalformedJson {
            path: String::new(),
            detail: format!("expected {}, found {}", expected, json_kind(found)),
        }
    }

    /// Prefixes the error location with one path segment.
    ///
    /// Applied while unwinding out of nested fields so the outermost caller
    /// sees the full location. Variants without a location pass through.
    pub(crate) fn at(self, segment: &str) -> Self {
        let escaped = segment.replace('~', "~0").replace('/', "~1");
        match self {
            SpecError::MalformedJson { path, detail } => SpecError::MalformedJson {
                path: format!("/{}{}", escaped, path),
                detail,
            },
            SpecError::InvalidSchemaShape {
                path,
                union,
                expected,
                found,
            } => SpecError::InvalidSchemaShape {
                path: format!("/{}{}", escaped, path),
                union,
                expected,
                found,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for SpecError {
    fn from(err: serde_json::Error) -> Self {
        SpecError::MalformedJson {
            path: String::new(),
            detail: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for SpecError {
    fn from(err: serde_yaml::Error) -> Self {
        SpecError::MalformedJson {
            path: String::new(),
            detail: format!("YAML: {}", err),
        }
    }
}

/// Helper type alias for Result using SpecError.
pub type SpecResult<T> = Result<T, SpecError>;

/// Names the kind of a JSON token for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serde_json_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let spec_err: SpecError = err.into();
        assert!(matches!(spec_err, SpecError::MalformedJson { .. }));
    }

    #[test]
    fn test_path_is_built_outside_in() {
        let err = SpecError::mismatch("object", &json!("text"))
            .at("default")
            .at("responses");
        match err {
            SpecError::MalformedJson { path, detail } => {
                assert_eq!(path, "/responses/default");
                assert_eq!(detail, "expected object, found string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_path_segments_are_escaped() {
        let err = SpecError::mismatch("string", &json!(1)).at("a/b~c");
        assert_eq!(
            err.to_string(),
            "Malformed JSON at /a~1b~0c: expected string, found number"
        );
    }

    #[test]
    fn test_root_path_display() {
        let err = SpecError::mismatch("object", &json!([]));
        assert_eq!(
            err.to_string(),
            "Malformed JSON at /: expected object, found array"
        );
    }

    #[test]
    fn test_located_variants_only() {
        let err = SpecError::UnknownField {
            entity: "Operation",
            key: "bogus".into(),
        }
        .at("ignored");
        assert_eq!(err.to_string(), "Unknown field 'bogus' in Operation");
    }
}
