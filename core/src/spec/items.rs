#![deny(missing_docs)]

//! # Items Object
//!
//! Element description of an `array` typed parameter or header.

use crate::codec::{composed_codec, Composed, FieldGroup, ObjectReader, ObjectWriter, Parts};
use crate::error::SpecResult;
use crate::extensions::Extensions;
use crate::reference::Reference;
use crate::spec::{CommonValidations, SimpleSchema};

/// Items Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Items {
    /// `$ref`.
    pub reference: Reference,
    /// Type description.
    pub simple: SimpleSchema,
    /// Validation keywords.
    pub validations: CommonValidations,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Items {
    /// Items of the given primitive type.
    pub fn typed(schema_type: &str, format: &str) -> Self {
        Self {
            simple: SimpleSchema::typed(schema_type, format),
            ..Self::default()
        }
    }
}

impl Composed for Items {
    const ENTITY: &'static str = "Items";
    const REFERENCE: bool = true;

    fn reference(&self) -> Option<&Reference> {
        Some(&self.reference)
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        self.simple.write(out)?;
        self.validations.write(out)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        Ok(Self {
            reference: parts.reference,
            simple: input.group()?,
            validations: input.group()?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(Items);
