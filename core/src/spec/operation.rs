#![deny(missing_docs)]

//! # Operation Object
//!
//! One API operation on a path. Operations have no `$ref`; a `$ref` key is
//! rejected like any other unknown field.

use crate::codec::{
    composed_codec, Composed, Field, FieldGroup, FieldSource, ObjectReader, ObjectWriter, Parts,
};
use crate::error::SpecResult;
use crate::extensions::Extensions;
use crate::spec::{ExternalDocumentation, Parameter, Response, Responses};
use indexmap::IndexMap;

const DESCRIPTION: Field = Field::new("description");
const CONSUMES: Field = Field::new("consumes");
const PRODUCES: Field = Field::new("produces");
const SCHEMES: Field = Field::new("schemes");
const TAGS: Field = Field::new("tags");
const SUMMARY: Field = Field::new("summary");
const EXTERNAL_DOCS: Field = Field::new("externalDocs");
const OPERATION_ID: Field = Field::new("operationId");
const DEPRECATED: Field = Field::new("deprecated");
// `security: []` switches off document-level security, so it must survive.
const SECURITY: Field = Field::keep_empty("security");
const PARAMETERS: Field = Field::new("parameters");
const RESPONSES: Field = Field::new("responses");

/// One security requirement: scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Operation-specific fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationProps {
    /// `description`.
    pub description: String,
    /// `consumes` media types.
    pub consumes: Vec<String>,
    /// `produces` media types.
    pub produces: Vec<String>,
    /// `schemes`.
    pub schemes: Vec<String>,
    /// `tags`.
    pub tags: Vec<String>,
    /// `summary`.
    pub summary: String,
    /// `externalDocs`.
    pub external_docs: Option<ExternalDocumentation>,
    /// `operationId`.
    pub id: String,
    /// `deprecated`.
    pub deprecated: bool,
    /// `security`; `Some(vec![])` encodes as `[]`.
    pub security: Option<Vec<SecurityRequirement>>,
    /// `parameters`, in declaration order.
    pub parameters: Vec<Parameter>,
    /// `responses`.
    pub responses: Option<Responses>,
}

impl FieldGroup for OperationProps {
    const FIELDS: &'static [Field] = &[
        DESCRIPTION,
        CONSUMES,
        PRODUCES,
        SCHEMES,
        TAGS,
        SUMMARY,
        EXTERNAL_DOCS,
        OPERATION_ID,
        DEPRECATED,
        SECURITY,
        PARAMETERS,
        RESPONSES,
    ];

    fn write(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&DESCRIPTION, &self.description)?;
        out.field(&CONSUMES, &self.consumes)?;
        out.field(&PRODUCES, &self.produces)?;
        out.field(&SCHEMES, &self.schemes)?;
        out.field(&TAGS, &self.tags)?;
        out.field(&SUMMARY, &self.summary)?;
        out.field(&EXTERNAL_DOCS, &self.external_docs)?;
        out.field(&OPERATION_ID, &self.id)?;
        out.field(&DEPRECATED, &self.deprecated)?;
        out.field(&SECURITY, &self.security)?;
        out.field(&PARAMETERS, &self.parameters)?;
        out.field(&RESPONSES, &self.responses)
    }

    fn read(source: &mut FieldSource) -> SpecResult<Self> {
        Ok(Self {
            description: source.value(&DESCRIPTION)?,
            consumes: source.value(&CONSUMES)?,
            produces: source.value(&PRODUCES)?,
            schemes: source.value(&SCHEMES)?,
            tags: source.value(&TAGS)?,
            summary: source.value(&SUMMARY)?,
            external_docs: source.optional(&EXTERNAL_DOCS)?,
            id: source.value(&OPERATION_ID)?,
            deprecated: source.value(&DEPRECATED)?,
            security: source.optional(&SECURITY)?,
            parameters: source.value(&PARAMETERS)?,
            responses: source.optional(&RESPONSES)?,
        })
    }
}

/// Operation Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    /// Operation-specific fields.
    pub props: OperationProps,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Operation {
    /// An operation with the given `operationId`.
    pub fn new(id: impl Into<String>) -> Self {
        Self::default().with_id(id)
    }

    /// Sets `operationId`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.props.id = id.into();
        self
    }

    /// Sets `summary`.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.props.summary = summary.into();
        self
    }

    /// Sets `description`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.props.description = description.into();
        self
    }

    /// Adds tags, keeping existing ones.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.props.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Marks the operation deprecated.
    pub fn deprecate(mut self) -> Self {
        self.props.deprecated = true;
        self
    }

    /// Adds a security requirement for `scheme` with the given scopes.
    pub fn secured_with<I, S>(mut self, scheme: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut requirement = SecurityRequirement::new();
        requirement.insert(scheme.into(), scopes.into_iter().map(Into::into).collect());
        self.props
            .security
            .get_or_insert_with(Vec::new)
            .push(requirement);
        self
    }

    /// Adds a parameter, replacing one with the same name and location.
    ///
    /// `$ref` parameters carry no name or location and are always appended.
    pub fn add_param(mut self, param: Parameter) -> Self {
        let existing = if param.reference.is_set() {
            None
        } else {
            self.props
                .parameters
                .iter()
                .position(|p| !p.reference.is_set() && p.matches(&param.props.name, &param.props.location))
        };
        match existing {
            Some(index) => self.props.parameters[index] = param,
            None => self.props.parameters.push(param),
        }
        self
    }

    /// Removes the parameter with this name and location, if any.
    pub fn remove_param(mut self, name: &str, location: &str) -> Self {
        self.props
            .parameters
            .retain(|p| p.reference.is_set() || !p.matches(name, location));
        self
    }

    /// Sets the default response.
    pub fn with_default_response(mut self, response: Response) -> Self {
        self.props
            .responses
            .get_or_insert_with(Responses::default)
            .default = Some(response);
        self
    }

    /// Adds or replaces the response for a status code.
    pub fn responds_with(mut self, code: u16, response: Response) -> Self {
        self.props
            .responses
            .get_or_insert_with(Responses::default)
            .insert(code, response);
        self
    }
}

impl Composed for Operation {
    const ENTITY: &'static str = "Operation";

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        self.props.write(out)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        Ok(Self {
            props: input.group()?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(Operation);
