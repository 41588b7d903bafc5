#![deny(missing_docs)]

//! # External Documentation Object

use crate::codec::{composed_codec, Composed, Field, ObjectReader, ObjectWriter, Parts};
use crate::error::SpecResult;
use crate::extensions::Extensions;

const DESCRIPTION: Field = Field::new("description");
const URL: Field = Field::new("url");
const FIELDS: &[Field] = &[DESCRIPTION, URL];

/// Link to additional documentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalDocumentation {
    /// `description`.
    pub description: String,
    /// `url`.
    pub url: String,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl ExternalDocumentation {
    /// Documentation at `url`.
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: url.into(),
            extensions: Extensions::new(),
        }
    }
}

impl Composed for ExternalDocumentation {
    const ENTITY: &'static str = "ExternalDocumentation";

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&DESCRIPTION, &self.description)?;
        out.field(&URL, &self.url)
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        let mut source = input.claim(FIELDS);
        Ok(Self {
            description: source.value(&DESCRIPTION)?,
            url: source.value(&URL)?,
            extensions: parts.extensions,
        })
    }
}

composed_codec!(ExternalDocumentation);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecError;

    #[test]
    fn test_round_trip() {
        let docs = ExternalDocumentation::new("http://readthedocs.org/swagger", "the docs");
        let text = docs.to_json_string().unwrap();
        assert_eq!(
            text,
            r#"{"description":"the docs","url":"http://readthedocs.org/swagger"}"#
        );
        assert_eq!(ExternalDocumentation::from_json_str(&text).unwrap(), docs);
    }

    #[test]
    fn test_ref_is_not_supported() {
        let err = ExternalDocumentation::from_json_str(r##"{"$ref":"#/x"}"##).unwrap_err();
        assert!(matches!(err, SpecError::UnknownField { ref key, .. } if key == "$ref"));
    }
}
