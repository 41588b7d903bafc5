#![deny(missing_docs)]

//! # Parameter Object
//!
//! A single operation parameter. Body parameters carry a `schema`; every
//! other location describes its value through `SimpleSchema` and
//! `CommonValidations`.

use crate::codec::{
    composed_codec, Composed, Field, FieldGroup, FieldSource, ObjectReader, ObjectWriter, Parts,
};
use crate::error::SpecResult;
use crate::extensions::Extensions;
use crate::reference::Reference;
use crate::spec::{CommonValidations, Schema, SimpleSchema};

const DESCRIPTION: Field = Field::new("description");
const NAME: Field = Field::new("name");
const IN: Field = Field::new("in");
const REQUIRED: Field = Field::new("required");
const SCHEMA: Field = Field::new("schema");
const ALLOW_EMPTY_VALUE: Field = Field::new("allowEmptyValue");

/// Parameter-specific fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamProps {
    /// `description`.
    pub description: String,
    /// `name`.
    pub name: String,
    /// `in`: `query`, `header`, `path`, `formData` or `body`.
    pub location: String,
    /// `required`.
    pub required: bool,
    /// `schema`, for body parameters.
    pub schema: Option<Box<Schema>>,
    /// `allowEmptyValue`.
    pub allow_empty_value: bool,
}

impl FieldGroup for ParamProps {
    const FIELDS: &'static [Field] = &[DESCRIPTION, NAME, IN, REQUIRED, SCHEMA, ALLOW_EMPTY_VALUE];

    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&DESCRIPTION, &self.description)?;
        out.field(&NAME, &self.name)?;
        out.field(&IN, &self.location)?;
        out.field(&REQUIRED, &self.required)?;
        out.field(&SCHEMA, &self.schema)?;
        out.field(&ALLOW_EMPTY_VALUE, &self.allow_empty_value)
    }

    fn read(source: &mut FieldSource) -> SpecResult<Self> {
        Ok(Self {
            description: source.value(&DESCRIPTION)?,
            name: source.value(&NAME)?,
            location: source.value(&IN)?,
            required: source.value(&REQUIRED)?,
            schema: source.optional(&SCHEMA)?,
            allow_empty_value: source.value(&ALLOW_EMPTY_VALUE)?,
        })
    }
}

/// Parameter Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    /// `$ref`.
    pub reference: Reference,
    /// Parameter-specific fields.
    pub props: ParamProps,
    /// Type description of non-body parameters.
    pub simple: SimpleSchema,
    /// Validation keywords of non-body parameters.
    pub validations: CommonValidations,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Parameter {
    fn located(name: impl Into<String>, location: &str) -> Self {
        Self {
            props: ParamProps {
                name: name.into(),
                location: location.to_string(),
                ..ParamProps::default()
            },
            ..Self::default()
        }
    }

    /// A parameter that only points elsewhere.
    pub fn ref_to(uri: impl Into<String>) -> Self {
        Self {
            reference: Reference::new(uri),
            ..Self::default()
        }
    }

    /// A query parameter.
    pub fn query(name: impl Into<String>) -> Self {
        Self::located(name, "query")
    }

    /// A header parameter.
    pub fn header(name: impl Into<String>) -> Self {
        Self::located(name, "header")
    }

    /// A path parameter; always required.
    pub fn path(name: impl Into<String>) -> Self {
        let mut param = Self::located(name, "path");
        param.props.required = true;
        param
    }

    /// A form field.
    pub fn form_data(name: impl Into<String>) -> Self {
        Self::located(name, "formData")
    }

    /// A body parameter described by `schema`.
    pub fn body(name: impl Into<String>, schema: Schema) -> Self {
        let mut param = Self::located(name, "body");
        param.props.schema = Some(Box::new(schema));
        param
    }

    /// Sets type and format.
    pub fn typed(mut self, schema_type: &str, format: &str) -> Self {
        self.simple.schema_type = schema_type.to_string();
        self.simple.format = format.to_string();
        self
    }

    /// Sets `description`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.props.description = description.into();
        self
    }

    /// Marks the parameter required.
    pub fn as_required(mut self) -> Self {
        self.props.required = true;
        self
    }

    /// Returns true if this parameter has the given name and location.
    pub fn matches(&self, name: &str, location: &str) -> bool {
        self.props.name == name && self.props.location == location
    }
}

impl Composed for Parameter {
    const ENTITY: &'static str = "Parameter";
    const REFERENCE: bool = true;

    fn reference(&self) -> Option<&Reference> {
        Some(&self.reference)
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        self.props.write(out)?;
        self.simple.write(out)?;
        self.validations.write(out)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        Ok(Self {
            reference: parts.reference,
            props: input.group()?,
            simple: input.group()?,
            validations: input.group()?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(Parameter);
