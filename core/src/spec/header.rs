#![deny(missing_docs)]

//! # Header Object
//!
//! Response header description: a `description` plus the shared
//! `SimpleSchema` and `CommonValidations` groups.

use crate::codec::{
    composed_codec, Composed, Field, FieldGroup, ObjectReader, ObjectWriter, Parts,
};
use crate::error::SpecResult;
use crate::extensions::Extensions;
use crate::reference::Reference;
use crate::spec::{CommonValidations, SimpleSchema};

const DESCRIPTION: Field = Field::new("description");
const FIELDS: &[Field] = &[DESCRIPTION];

/// Header Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    /// `$ref`.
    pub reference: Reference,
    /// `description`.
    pub description: String,
    /// Type description.
    pub simple: SimpleSchema,
    /// Validation keywords.
    pub validations: CommonValidations,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Header {
    /// A header of the given primitive type.
    pub fn typed(schema_type: &str, format: &str) -> Self {
        Self {
            simple: SimpleSchema::typed(schema_type, format),
            ..Self::default()
        }
    }

    /// Sets `description`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Composed for Header {
    const ENTITY: &'static str = "Header";
    const REFERENCE: bool = true;

    fn reference(&self) -> Option<&Reference> {
        Some(&self.reference)
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&DESCRIPTION, &self.description)?;
        self.simple.write(out)?;
        self.validations.write(out)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        let description = input.claim(FIELDS).value(&DESCRIPTION)?;
        Ok(Self {
            reference: parts.reference,
            description,
            simple: input.group()?,
            validations: input.group()?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(Header);
