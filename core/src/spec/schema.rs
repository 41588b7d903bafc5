#![deny(missing_docs)]

//! # Schema Object
//!
//! The richest entity. Groups, in output order:
//!
//! 1. `$ref`
//! 2. `SchemaProps`: the JSON-Schema keywords.
//! 3. `SwaggerSchemaProps`: Swagger-only keywords (`discriminator`, `readOnly`, ...).
//! 4. Vendor extensions.

use crate::codec::{
    composed_codec, Composed, Field, FieldGroup, FieldSource, ObjectReader, ObjectWriter, Parts,
};
use crate::error::SpecResult;
use crate::extensions::Extensions;
use crate::reference::Reference;
use crate::spec::{ExternalDocumentation, XmlObject};
use crate::union::{SchemaOrArray, SchemaOrBool, SchemaOrStringArray, StringOrArray};
use indexmap::IndexMap;
use serde_json::{Number, Value};

mod keys {
    use crate::codec::Field;

    pub const ID: Field = Field::new("id");
    pub const SCHEMA: Field = Field::new("$schema");
    pub const DESCRIPTION: Field = Field::new("description");
    pub const TYPE: Field = Field::new("type");
    pub const NULLABLE: Field = Field::new("nullable");
    pub const FORMAT: Field = Field::new("format");
    pub const TITLE: Field = Field::new("title");
    pub const DEFAULT: Field = Field::new("default");
    pub const MAXIMUM: Field = Field::new("maximum");
    pub const EXCLUSIVE_MAXIMUM: Field = Field::new("exclusiveMaximum");
    pub const MINIMUM: Field = Field::new("minimum");
    pub const EXCLUSIVE_MINIMUM: Field = Field::new("exclusiveMinimum");
    pub const MAX_LENGTH: Field = Field::new("maxLength");
    pub const MIN_LENGTH: Field = Field::new("minLength");
    pub const PATTERN: Field = Field::new("pattern");
    pub const MAX_ITEMS: Field = Field::new("maxItems");
    pub const MIN_ITEMS: Field = Field::new("minItems");
    pub const UNIQUE_ITEMS: Field = Field::new("uniqueItems");
    pub const MULTIPLE_OF: Field = Field::new("multipleOf");
    pub const ENUM: Field = Field::new("enum");
    pub const MAX_PROPERTIES: Field = Field::new("maxProperties");
    pub const MIN_PROPERTIES: Field = Field::new("minProperties");
    // `required: []` is meaningful and must survive.
    pub const REQUIRED: Field = Field::keep_empty("required");
    pub const ITEMS: Field = Field::new("items");
    pub const ALL_OF: Field = Field::new("allOf");
    pub const ONE_OF: Field = Field::new("oneOf");
    pub const ANY_OF: Field = Field::new("anyOf");
    pub const NOT: Field = Field::new("not");
    pub const PROPERTIES: Field = Field::new("properties");
    pub const ADDITIONAL_PROPERTIES: Field = Field::new("additionalProperties");
    pub const PATTERN_PROPERTIES: Field = Field::new("patternProperties");
    pub const DEPENDENCIES: Field = Field::new("dependencies");
    pub const ADDITIONAL_ITEMS: Field = Field::new("additionalItems");
    pub const DEFINITIONS: Field = Field::new("definitions");

    pub const DISCRIMINATOR: Field = Field::new("discriminator");
    pub const READ_ONLY: Field = Field::new("readOnly");
    pub const XML: Field = Field::new("xml");
    pub const EXTERNAL_DOCS: Field = Field::new("externalDocs");
    pub const EXAMPLE: Field = Field::new("example");
}

use keys::*;

/// JSON-Schema keywords of a Schema Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaProps {
    /// `id`.
    pub id: String,
    /// `$schema`.
    pub schema: String,
    /// `description`.
    pub description: String,
    /// `type`, kept in the form it was written.
    pub schema_type: Option<StringOrArray>,
    /// `nullable`.
    pub nullable: bool,
    /// `format`.
    pub format: String,
    /// `title`.
    pub title: String,
    /// `default`; `null` is kept as an explicit value.
    pub default: Option<Value>,
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
    /// `maxProperties`.
    pub max_properties: Option<i64>,
    /// `minProperties`.
    pub min_properties: Option<i64>,
    /// `required`; `Some(vec![])` encodes as `[]`.
    pub required: Option<Vec<String>>,
    /// `items`.
    pub items: Option<SchemaOrArray>,
    /// `allOf`.
    pub all_of: Vec<Schema>,
    /// `oneOf`.
    pub one_of: Vec<Schema>,
    /// `anyOf`.
    pub any_of: Vec<Schema>,
    /// `not`.
    pub not: Option<Box<Schema>>,
    /// `properties`, in document order.
    pub properties: IndexMap<String, Schema>,
    /// `additionalProperties`; `None` omits the key.
    pub additional_properties: Option<SchemaOrBool>,
    /// `patternProperties`.
    pub pattern_properties: IndexMap<String, Schema>,
    /// `dependencies`.
    pub dependencies: IndexMap<String, SchemaOrStringArray>,
    /// `additionalItems`.
    pub additional_items: Option<SchemaOrBool>,
    /// `definitions`.
    pub definitions: IndexMap<String, Schema>,
}

impl FieldGroup for SchemaProps {
    const FIELDS: &'static [Field] = &[
        ID,
        SCHEMA,
        DESCRIPTION,
        TYPE,
        NULLABLE,
        FORMAT,
        TITLE,
        DEFAULT,
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
        MAX_PROPERTIES,
        MIN_PROPERTIES,
        REQUIRED,
        ITEMS,
        ALL_OF,
        ONE_OF,
        ANY_OF,
        NOT,
        PROPERTIES,
        ADDITIONAL_PROPERTIES,
        PATTERN_PROPERTIES,
        DEPENDENCIES,
        ADDITIONAL_ITEMS,
        DEFINITIONS,
    ];

    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&ID, &self.id)?;
        out.field(&SCHEMA, &self.schema)?;
        out.field(&DESCRIPTION, &self.description)?;
        out.field(&TYPE, &self.schema_type)?;
        out.field(&NULLABLE, &self.nullable)?;
        out.field(&FORMAT, &self.format)?;
        out.field(&TITLE, &self.title)?;
        out.field(&DEFAULT, &self.default)?;
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
        out.field(&ENUM, &self.enum_values)?;
        out.field(&MAX_PROPERTIES, &self.max_properties)?;
        out.field(&MIN_PROPERTIES, &self.min_properties)?;
        out.field(&REQUIRED, &self.required)?;
        out.field(&ITEMS, &self.items)?;
        out.field(&ALL_OF, &self.all_of)?;
        out.field(&ONE_OF, &self.one_of)?;
        out.field(&ANY_OF, &self.any_of)?;
        out.field(&NOT, &self.not)?;
        out.field(&PROPERTIES, &self.properties)?;
        out.field(&ADDITIONAL_PROPERTIES, &self.additional_properties)?;
        out.field(&PATTERN_PROPERTIES, &self.pattern_properties)?;
        out.field(&DEPENDENCIES, &self.dependencies)?;
        out.field(&ADDITIONAL_ITEMS, &self.additional_items)?;
        out.field(&DEFINITIONS, &self.definitions)
    }

    fn read(source: &mut FieldSource) -> SpecResult<Self> {
        Ok(Self {
            id: source.value(&ID)?,
            schema: source.value(&SCHEMA)?,
            description: source.value(&DESCRIPTION)?,
            schema_type: source.optional(&TYPE)?,
            nullable: source.value(&NULLABLE)?,
            format: source.value(&FORMAT)?,
            title: source.value(&TITLE)?,
            default: source.optional(&DEFAULT)?,
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
            max_properties: source.optional(&MAX_PROPERTIES)?,
            min_properties: source.optional(&MIN_PROPERTIES)?,
            required: source.optional(&REQUIRED)?,
            items: source.optional(&ITEMS)?,
            all_of: source.value(&ALL_OF)?,
            one_of: source.value(&ONE_OF)?,
            any_of: source.value(&ANY_OF)?,
            not: source.optional(&NOT)?,
            properties: source.value(&PROPERTIES)?,
            additional_properties: source.optional(&ADDITIONAL_PROPERTIES)?,
            pattern_properties: source.value(&PATTERN_PROPERTIES)?,
            dependencies: source.value(&DEPENDENCIES)?,
            additional_items: source.optional(&ADDITIONAL_ITEMS)?,
            definitions: source.value(&DEFINITIONS)?,
        })
    }
}

/// Swagger-specific keywords of a Schema Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwaggerSchemaProps {
    /// `discriminator`: property name used for polymorphism.
    pub discriminator: String,
    /// `readOnly`.
    pub read_only: bool,
    /// `xml`.
    pub xml: Option<XmlObject>,
    /// `externalDocs`.
    pub external_docs: Option<ExternalDocumentation>,
    /// `example`.
    pub example: Option<Value>,
}

impl FieldGroup for SwaggerSchemaProps {
    const FIELDS: &'static [Field] = &[DISCRIMINATOR, READ_ONLY, XML, EXTERNAL_DOCS, EXAMPLE];

    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&DISCRIMINATOR, &self.discriminator)?;
        out.field(&READ_ONLY, &self.read_only)?;
        out.field(&XML, &self.xml)?;
        out.field(&EXTERNAL_DOCS, &self.external_docs)?;
        out.field(&EXAMPLE, &self.example)
    }

    fn read(source: &mut FieldSource) -> SpecResult<Self> {
        Ok(Self {
            discriminator: source.value(&DISCRIMINATOR)?,
            read_only: source.value(&READ_ONLY)?,
            xml: source.optional(&XML)?,
            external_docs: source.optional(&EXTERNAL_DOCS)?,
            example: source.optional(&EXAMPLE)?,
        })
    }
}

/// Schema Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// `$ref`; emitted alongside any other fields that are set.
    pub reference: Reference,
    /// JSON-Schema keywords.
    pub props: SchemaProps,
    /// Swagger-only keywords.
    pub swagger: SwaggerSchemaProps,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Schema {
    /// An empty schema (`{}`).
    pub fn new() -> Self {
        Self::default()
    }

    /// A schema that only points elsewhere.
    pub fn ref_to(uri: impl Into<String>) -> Self {
        Self {
            reference: Reference::new(uri),
            ..Self::default()
        }
    }

    /// A schema with a single `type`.
    pub fn of_type(schema_type: &str) -> Self {
        Self::new().with_type(schema_type)
    }

    /// Sets a single `type`.
    pub fn with_type(mut self, schema_type: &str) -> Self {
        self.props.schema_type = Some(StringOrArray::from(schema_type));
        self
    }

    /// Sets `format`.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.props.format = format.into();
        self
    }

    /// Sets `title`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.props.title = title.into();
        self
    }

    /// Sets `description`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.props.description = description.into();
        self
    }

    /// Adds or replaces one entry of `properties`.
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.props.properties.insert(name.into(), schema);
        self
    }

    /// Sets `required`, keeping an explicitly empty list.
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props.required = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets `items`.
    pub fn with_items(mut self, items: impl Into<SchemaOrArray>) -> Self {
        self.props.items = Some(items.into());
        self
    }

    /// Sets `additionalProperties`.
    pub fn with_additional_properties(mut self, value: impl Into<SchemaOrBool>) -> Self {
        self.props.additional_properties = Some(value.into());
        self
    }

    /// Returns true if `type` mentions `schema_type`.
    pub fn is_type(&self, schema_type: &str) -> bool {
        self.props
            .schema_type
            .as_ref()
            .is_some_and(|t| t.contains(schema_type))
    }
}

impl Composed for Schema {
    const ENTITY: &'static str = "Schema";
    const REFERENCE: bool = true;

    fn reference(&self) -> Option<&Reference> {
        Some(&self.reference)
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        self.props.write(out)?;
        self.swagger.write(out)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        Ok(Self {
            reference: parts.reference,
            props: input.group()?,
            swagger: input.group()?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(Schema);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecError;
    use serde_json::json;

    #[test]
    fn test_additional_properties_absent() {
        let schema = Schema::from_json_str(r#"{"type":"object"}"#).unwrap();
        assert_eq!(schema.props.additional_properties, None);
        let out = schema.to_json_value().unwrap();
        assert!(out.get("additionalProperties").is_none());
    }

    #[test]
    fn test_additional_properties_false() {
        let schema = Schema::from_json_str(r#"{"additionalProperties":false}"#).unwrap();
        assert_eq!(
            schema.props.additional_properties,
            Some(SchemaOrBool::Bool(false))
        );
        assert_eq!(
            schema.to_json_value().unwrap(),
            json!({"additionalProperties": false})
        );
    }

    #[test]
    fn test_required_explicitly_empty() {
        let schema = Schema::from_json_str(r#"{"required":[]}"#).unwrap();
        assert_eq!(schema.props.required, Some(vec![]));
        assert_eq!(schema.to_json_string().unwrap(), r#"{"required":[]}"#);
        assert_eq!(Schema::new().to_json_string().unwrap(), "{}");
    }

    #[test]
    fn test_ref_and_body_both_emitted() {
        let schema = Schema::ref_to("Cat").with_description("a cat");
        assert_eq!(
            schema.to_json_string().unwrap(),
            r#"{"$ref":"Cat","description":"a cat"}"#
        );
    }

    #[test]
    fn test_swagger_group_and_xml() {
        let doc = json!({
            "type": "string",
            "readOnly": true,
            "discriminator": "kind",
            "xml": {"name": "animal", "wrapped": true, "x-ns": "zoo"},
            "externalDocs": {"url": "http://example.com"}
        });
        let schema = Schema::from_json_value(doc.clone()).unwrap();
        assert!(schema.swagger.read_only);
        let xml = schema.swagger.xml.as_ref().unwrap();
        assert!(xml.wrapped && !xml.attribute);
        assert_eq!(xml.extensions.get_string("x-ns"), Some("zoo"));
        assert_eq!(schema.to_json_value().unwrap(), doc);
    }

    #[test]
    fn test_dependencies_and_definitions() {
        let doc = json!({
            "dependencies": {
                "credit_card": ["billing_address"],
                "name": {"required": ["first"]}
            },
            "definitions": {"Pet": {"type": "object"}},
            "patternProperties": {"^x-": {"type": "string"}},
            "additionalItems": {"type": "integer"},
            "not": {"type": "null"}
        });
        let schema = Schema::from_json_value(doc.clone()).unwrap();
        assert!(matches!(
            schema.props.dependencies["credit_card"],
            SchemaOrStringArray::Property(_)
        ));
        assert!(schema.props.definitions["Pet"].is_type("object"));
        assert_eq!(schema.to_json_value().unwrap(), doc);
    }

    #[test]
    fn test_property_errors_carry_path() {
        let err = Schema::from_json_str(r#"{"properties":{"id":{"minimum":"5"}}}"#).unwrap_err();
        match err {
            SpecError::MalformedJson { path, .. } => {
                assert_eq!(path, "/properties/id/minimum")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_items_shape_error() {
        let err = Schema::from_json_str(r#"{"items":"string"}"#).unwrap_err();
        assert!(matches!(
            err,
            SpecError::InvalidSchemaShape { ref path, union: "SchemaOrArray", .. } if path == "/items"
        ));
    }

    #[test]
    fn test_builders() {
        let schema = Schema::of_type("object")
            .with_title("Pet")
            .with_property("id", Schema::of_type("integer").with_format("int64"))
            .with_required(["id"])
            .with_items(Schema::of_type("string"))
            .with_additional_properties(true);
        assert!(schema.is_type("object"));
        assert_eq!(
            schema.to_json_value().unwrap(),
            json!({
                "type": "object",
                "title": "Pet",
                "required": ["id"],
                "items": {"type": "string"},
                "properties": {"id": {"type": "integer", "format": "int64"}},
                "additionalProperties": true
            })
        );
    }
}
