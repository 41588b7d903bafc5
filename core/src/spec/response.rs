#![deny(missing_docs)]

//! # Response Object

use crate::codec::{
    composed_codec, Composed, Field, FieldGroup, FieldSource, ObjectReader, ObjectWriter, Parts,
};
use crate::error::SpecResult;
use crate::extensions::Extensions;
use crate::reference::Reference;
use crate::spec::{Header, Schema};
use indexmap::IndexMap;
use serde_json::Value;

const DESCRIPTION: Field = Field::new("description");
const SCHEMA: Field = Field::new("schema");
const HEADERS: Field = Field::new("headers");
const EXAMPLES: Field = Field::new("examples");

/// Response-specific fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseProps {
    /// `description`.
    pub description: String,
    /// `schema` of the response body.
    pub schema: Option<Box<Schema>>,
    /// `headers`, by header name.
    pub headers: IndexMap<String, Header>,
    /// `examples`, by media type.
    pub examples: IndexMap<String, Value>,
}

impl FieldGroup for ResponseProps {
    const FIELDS: &'static [Field] = &[DESCRIPTION, SCHEMA, HEADERS, EXAMPLES];

    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&DESCRIPTION, &self.description)?;
        out.field(&SCHEMA, &self.schema)?;
        out.field(&HEADERS, &self.headers)?;
        out.field(&EXAMPLES, &self.examples)
    }

    fn read(source: &mut FieldSource) -> SpecResult<Self> {
        Ok(Self {
            description: source.value(&DESCRIPTION)?,
            schema: source.optional(&SCHEMA)?,
            headers: source.value(&HEADERS)?,
            examples: source.value(&EXAMPLES)?,
        })
    }
}

/// Response Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// `$ref`.
    pub reference: Reference,
    /// Response-specific fields.
    pub props: ResponseProps,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Response {
    /// A response with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            props: ResponseProps {
                description: description.into(),
                ..ResponseProps::default()
            },
            ..Self::default()
        }
    }

    /// A response that only points elsewhere.
    pub fn ref_to(uri: impl Into<String>) -> Self {
        Self {
            reference: Reference::new(uri),
            ..Self::default()
        }
    }

    /// Sets the body `schema`.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.props.schema = Some(Box::new(schema));
        self
    }

    /// Adds or replaces a header.
    pub fn add_header(mut self, name: impl Into<String>, header: Header) -> Self {
        self.props.headers.insert(name.into(), header);
        self
    }

    /// Adds or replaces the example for a media type.
    pub fn add_example(mut self, media_type: impl Into<String>, example: Value) -> Self {
        self.props.examples.insert(media_type.into(), example);
        self
    }
}

impl Composed for Response {
    const ENTITY: &'static str = "Response";
    const REFERENCE: bool = true;

    fn reference(&self) -> Option<&Reference> {
        Some(&self.reference)
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        self.props.write(out)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        Ok(Self {
            reference: parts.reference,
            props: input.group()?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(Response);
