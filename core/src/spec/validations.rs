#![deny(missing_docs)]

//! # Shared Field Groups
//!
//! Structural groups reused by the non-body descriptions (Parameter, Header, Items):
//!
//! - `SimpleSchema`: the primitive type description (`type`, `format`, `items`, ...).
//! - `CommonValidations`: the JSON-Schema validation keywords they may carry.

use crate::codec::{Field, FieldGroup, FieldSource, ObjectWriter};
use crate::error::SpecResult;
use crate::spec::Items;
use serde_json::{Number, Value};

const TYPE: Field = Field::new("type");
const FORMAT: Field = Field::new("format");
const ITEMS: Field = Field::new("items");
const COLLECTION_FORMAT: Field = Field::new("collectionFormat");
const DEFAULT: Field = Field::new("default");
const EXAMPLE: Field = Field::new("example");

/// Primitive type description of a non-body value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleSchema {
    /// `type`: `string`, `number`, `integer`, `boolean`, `array` or `file`.
    pub schema_type: String,
    /// `format`, refining `type`.
    pub format: String,
    /// `items`, required when `type` is `array`.
    pub items: Option<Box<Items>>,
    /// `collectionFormat`: `csv`, `ssv`, `tsv`, `pipes` or `multi`.
    pub collection_format: String,
    /// `default`; `null` is kept as an explicit value.
    pub default: Option<Value>,
    /// `example`.
    pub example: Option<Value>,
}

impl SimpleSchema {
    /// Type and format in one go.
    pub fn typed(schema_type: &str, format: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            format: format.to_string(),
            ..Self::default()
        }
    }
}

impl FieldGroup for SimpleSchema {
    const FIELDS: &'static [Field] = &[TYPE, FORMAT, ITEMS, COLLECTION_FORMAT, DEFAULT, EXAMPLE];

    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&TYPE, &self.schema_type)?;
        out.field(&FORMAT, &self.format)?;
        out.field(&ITEMS, &self.items)?;
        out.field(&COLLECTION_FORMAT, &self.collection_format)?;
        out.field(&DEFAULT, &self.default)?;
        out.field(&EXAMPLE, &self.example)
    }

    fn read(source: &mut FieldSource) -> SpecResult<Self> {
        Ok(Self {
            schema_type: source.value(&TYPE)?,
            format: source.value(&FORMAT)?,
            items: source.optional(&ITEMS)?,
            collection_format: source.value(&COLLECTION_FORMAT)?,
            default: source.optional(&DEFAULT)?,
            example: source.optional(&EXAMPLE)?,
        })
    }
}

const MAXIMUM: Field = Field::new("maximum");
const EXCLUSIVE_MAXIMUM: Field = Field::new("exclusiveMaximum");
const MINIMUM: Field = Field::new("minimum");
const EXCLUSIVE_MINIMUM: Field = Field::new("exclusiveMinimum");
const MAX_LENGTH: Field = Field::new("maxLength");
const MIN_LENGTH: Field = Field::new("minLength");
const PATTERN: Field = Field::new("pattern");
const MAX_ITEMS: Field = Field::new("maxItems");
const MIN_ITEMS: Field = Field::new("minItems");
const UNIQUE_ITEMS: Field = Field::new("uniqueItems");
const MULTIPLE_OF: Field = Field::new("multipleOf");
const ENUM: Field = Field::new("enum");

/// Validation keywords shared by non-body values.
///
/// Bounds are optional so that an unset bound differs from a zero bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonValidations {
    /// `maximum`.
    pub maximum: Option<Number>,
    /// `exclusiveMaximum`.
    pub exclusive_maximum: bool,
    /// `minimum`.
    pub minimum: Option<Number>,
    /// `exclusiveMinimum`.
    pub exclusive_minimum: bool,
    /// `maxLength`.
    pub max_length: Option<i64>,
    /// `minLength`.
    pub min_length: Option<i64>,
    /// `pattern`.
    pub pattern: String,
    /// `maxItems`.
    pub max_items: Option<i64>,
    /// `minItems`.
    pub min_items: Option<i64>,
    /// `uniqueItems`.
    pub unique_items: bool,
    /// `multipleOf`.
    pub multiple_of: Option<Number>,
    /// `enum`.
    pub enum_values: Vec<Value>,
}

impl FieldGroup for CommonValidations {
    const FIELDS: &'static [Field] = &[
        MAXIMUM,
        EXCLUSIVE_MAXIMUM,
        MINIMUM,
        EXCLUSIVE_MINIMUM,
        MAX_LENGTH,
        MIN_LENGTH,
        PATTERN,
        MAX_ITEMS,
        MIN_ITEMS,
        UNIQUE_ITEMS,
        MULTIPLE_OF,
        ENUM,
    ];

    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&MAXIMUM, &self.maximum)?;
        out.field(&EXCLUSIVE_MAXIMUM, &self.exclusive_maximum)?;
        out.field(&MINIMUM, &self.minimum)?;
        out.field(&EXCLUSIVE_MINIMUM, &self.exclusive_minimum)?;
        out.field(&MAX_LENGTH, &self.max_length)?;
        out.field(&MIN_LENGTH, &self.min_length)?;
        out.field(&PATTERN, &self.pattern)?;
        out.field(&MAX_ITEMS, &self.max_items)?;
        out.field(&MIN_ITEMS, &self.min_items)?;
        out.field(&UNIQUE_ITEMS, &self.unique_items)?;
        out.field(&MULTIPLE_OF, &self.multiple_of)?;
        out.field(&ENUM, &self.enum_values)
    }

    fn read(source: &mut FieldSource) -> SpecResult<Self> {
        Ok(Self {
            maximum: source.optional(&MAXIMUM)?,
            exclusive_maximum: source.value(&EXCLUSIVE_MAXIMUM)?,
            minimum: source.optional(&MINIMUM)?,
            exclusive_minimum: source.value(&EXCLUSIVE_MINIMUM)?,
            max_length: source.optional(&MAX_LENGTH)?,
            min_length: source.optional(&MIN_LENGTH)?,
            pattern: source.value(&PATTERN)?,
            max_items: source.optional(&MAX_ITEMS)?,
            min_items: source.optional(&MIN_ITEMS)?,
            unique_items: source.value(&UNIQUE_ITEMS)?,
            multiple_of: source.optional(&MULTIPLE_OF)?,
            enum_values: source.value(&ENUM)?,
        })
    }
}
