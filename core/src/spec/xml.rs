#![deny(missing_docs)]

//! # XML Object
//!
//! Fine-tunes the XML rendering of a schema property.

use crate::codec::{composed_codec, Composed, Field, ObjectReader, ObjectWriter, Parts};
use crate::error::SpecResult;
use crate::extensions::Extensions;

const NAME: Field = Field::new("name");
const NAMESPACE: Field = Field::new("namespace");
const PREFIX: Field = Field::new("prefix");
const ATTRIBUTE: Field = Field::new("attribute");
const WRAPPED: Field = Field::new("wrapped");
const FIELDS: &[Field] = &[NAME, NAMESPACE, PREFIX, ATTRIBUTE, WRAPPED];

/// XML Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlObject {
    /// `name`.
    pub name: String,
    /// `namespace`.
    pub namespace: String,
    /// `prefix`.
    pub prefix: String,
    /// `attribute`.
    pub attribute: bool,
    /// `wrapped`.
    pub wrapped: bool,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Composed for XmlObject {
    const ENTITY: &'static str = "XmlObject";

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&NAME, &self.name)?;
        out.field(&NAMESPACE, &self.namespace)?;
        out.field(&PREFIX, &self.prefix)?;
        out.field(&ATTRIBUTE, &self.attribute)?;
        out.field(&WRAPPED, &self.wrapped)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        let mut source = input.claim(FIELDS);
        Ok(Self {
            name: source.value(&NAME)?,
            namespace: source.value(&NAMESPACE)?,
            prefix: source.value(&PREFIX)?,
            attribute: source.value(&ATTRIBUTE)?,
            wrapped: source.value(&WRAPPED)?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(XmlObject);
