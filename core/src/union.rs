#![deny(missing_docs)]

//! # Union Values
//!
//! Fields whose JSON shape may take one of two incompatible forms. Each union
//! is decoded by one shape-sniffing step over the raw token and
//! encodes whichever variant it holds. Being enums, they can never hold both.

use crate::codec::{Decode, Encode};
use crate::error::{json_kind, SpecError, SpecResult};
use crate::spec::Schema;
use serde_json::{Map, Value};

/// Kind of a raw JSON token, with its payload.
#[derive(Debug)]
enum Shape {
    Object(Map<String, Value>),
    Array(Vec<Value>),
    Bool(bool),
    String(String),
    Other(Value),
}

impl Shape {
    fn of(value: Value) -> Self {
        match value {
            Value::Object(map) => Shape::Object(map),
            Value::Array(items) => Shape::Array(items),
            Value::Bool(b) => Shape::Bool(b),
            Value::String(s) => Shape::String(s),
            other => Shape::Other(other),
        }
    }

    /// Kind name for errors; consumes the payload.
    fn kind(self) -> &'static str {
        match self {
            Shape::Object(_) => "object",
            Shape::Array(_) => "array",
            Shape::Bool(_) => "boolean",
            Shape::String(_) => "string",
            Shape::Other(value) => json_kind(&value),
        }
    }
}

fn shape_error(union: &'static str, expected: &'static str, shape: Shape) -> SpecError {
    SpecError::InvalidSchemaShape {
        path: String::new(),
        union,
        expected,
        found: shape.kind(),
    }
}

fn schema_list(items: Vec<Value>) -> SpecResult<Vec<Schema>> {
    Vec::<Schema>::decode(Value::Array(items))
}

/// A single schema or a positional list of schemas (`items`).
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaOrArray {
    /// Every element is described by one schema.
    Single(Box<Schema>),
    /// Tuple-style, one schema per position.
    Array(Vec<Schema>),
}

impl SchemaOrArray {
    /// Number of schemas held.
    pub fn len(&self) -> usize {
        match self {
            SchemaOrArray::Single(_) => 1,
            SchemaOrArray::Array(schemas) => schemas.len(),
        }
    }

    /// True only for an empty array variant.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for the array variant.
    pub fn is_array(&self) -> bool {
        matches!(self, SchemaOrArray::Array(_))
    }
}

impl From<Schema> for SchemaOrArray {
    fn from(schema: Schema) -> Self {
        SchemaOrArray::Single(Box::new(schema))
    }
}

impl From<Vec<Schema>> for SchemaOrArray {
    fn from(schemas: Vec<Schema>) -> Self {
        SchemaOrArray::Array(schemas)
    }
}

impl Encode for SchemaOrArray {
    fn encode(&self) -> SpecResult<Value> {
        match self {
            SchemaOrArray::Single(schema) => schema.encode(),
            SchemaOrArray::Array(schemas) => schemas.encode(),
        }
    }
}

impl Decode for SchemaOrArray {
    fn decode(value: Value) -> SpecResult<Self> {
        match Shape::of(value) {
            Shape::Object(map) => Schema::decode(Value::Object(map))
                .map(|schema| SchemaOrArray::Single(Box::new(schema))),
            Shape::Array(items) => schema_list(items).map(SchemaOrArray::Array),
            other => Err(shape_error("SchemaOrArray", "object or array", other)),
        }
    }
}

/// A boolean switch or a schema (`additionalProperties`, `additionalItems`).
///
/// The default is `Bool(false)`: a present-but-unspecified value still
/// encodes as `false`. Leave the parent field `None` to omit it.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaOrBool {
    /// Allowed (`true`) or forbidden (`false`).
    Bool(bool),
    /// Allowed, constrained by this schema.
    Schema(Box<Schema>),
}

impl Default for SchemaOrBool {
    fn default() -> Self {
        SchemaOrBool::Bool(false)
    }
}

impl SchemaOrBool {
    /// Whether additional entries are allowed at all.
    pub fn allows(&self) -> bool {
        match self {
            SchemaOrBool::Bool(allows) => *allows,
            SchemaOrBool::Schema(_) => true,
        }
    }

    /// The constraining schema, if any.
    pub fn schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrBool::Schema(schema) => Some(schema),
            SchemaOrBool::Bool(_) => None,
        }
    }
}

impl From<bool> for SchemaOrBool {
    fn from(allows: bool) -> Self {
        SchemaOrBool::Bool(allows)
    }
}

impl From<Schema> for SchemaOrBool {
    fn from(schema: Schema) -> Self {
        SchemaOrBool::Schema(Box::new(schema))
    }
}

impl Encode for SchemaOrBool {
    fn encode(&self) -> SpecResult<Value> {
        match self {
            SchemaOrBool::Bool(allows) => Ok(Value::Bool(*allows)),
            SchemaOrBool::Schema(schema) => schema.encode(),
        }
    }
}

impl Decode for SchemaOrBool {
    fn decode(value: Value) -> SpecResult<Self> {
        match Shape::of(value) {
            Shape::Bool(allows) => Ok(SchemaOrBool::Bool(allows)),
            Shape::Object(map) => Schema::decode(Value::Object(map))
                .map(|schema| SchemaOrBool::Schema(Box::new(schema))),
            other => Err(shape_error("SchemaOrBool", "boolean or object", other)),
        }
    }
}

/// One string or a list of strings (schema `type`).
///
/// The original form is kept, so `"string"` and `["string"]` each re-encode as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringOrArray {
    /// A bare string.
    Single(String),
    /// A list of strings.
    Array(Vec<String>),
}

impl StringOrArray {
    /// Returns true if `value` is one of the held strings.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            StringOrArray::Single(s) => s == value,
            StringOrArray::Array(items) => items.iter().any(|s| s == value),
        }
    }

    /// The held strings, as a list.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            StringOrArray::Single(s) => vec![s.clone()],
            StringOrArray::Array(items) => items.clone(),
        }
    }
}

impl From<&str> for StringOrArray {
    fn from(value: &str) -> Self {
        StringOrArray::Single(value.to_string())
    }
}

impl From<Vec<String>> for StringOrArray {
    fn from(items: Vec<String>) -> Self {
        StringOrArray::Array(items)
    }
}

impl Encode for StringOrArray {
    fn encode(&self) -> SpecResult<Value> {
        match self {
            StringOrArray::Single(s) => s.encode(),
            StringOrArray::Array(items) => items.encode(),
        }
    }
}

impl Decode for StringOrArray {
    fn decode(value: Value) -> SpecResult<Self> {
        match Shape::of(value) {
            Shape::String(s) => Ok(StringOrArray::Single(s)),
            Shape::Array(items) => {
                Vec::<String>::decode(Value::Array(items)).map(StringOrArray::Array)
            }
            other => Err(shape_error("StringOrArray", "string or array", other)),
        }
    }
}

/// A schema or a list of property names (`dependencies` values).
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaOrStringArray {
    /// Schema dependency.
    Schema(Box<Schema>),
    /// Property dependency.
    Property(Vec<String>),
}

impl Encode for SchemaOrStringArray {
    fn encode(&self) -> SpecResult<Value> {
        match self {
            SchemaOrStringArray::Schema(schema) => schema.encode(),
            SchemaOrStringArray::Property(names) => names.encode(),
        }
    }
}

impl Decode for SchemaOrStringArray {
    fn decode(value: Value) -> SpecResult<Self> {
        match Shape::of(value) {
            Shape::Object(map) => Schema::decode(Value::Object(map))
                .map(|schema| SchemaOrStringArray::Schema(Box::new(schema))),
            Shape::Array(items) => {
                Vec::<String>::decode(Value::Array(items)).map(SchemaOrStringArray::Property)
            }
            other => Err(shape_error("SchemaOrStringArray", "object or array", other)),
        }
    }
}
