#![deny(missing_docs)]

//! # Responses Object
//!
//! Keys fall in three classes:
//! - base-10 integer strings, with an optional `+`/`-` sign, map to the
//!   status-code table (extracted first). Codes are written back in their
//!   canonical form, so `+200` and `0200` both come out as `200`;
//! - `default` maps to the default response;
//! - `x-*` keys go to the extension bag.
//!
//! A Responses object must hold a default or at least one status code.

use crate::codec::{composed_codec, Composed, Decode, Encode, Field, ObjectReader, ObjectWriter, Parts};
use crate::error::{SpecError, SpecResult};
use crate::extensions::Extensions;
use crate::spec::Response;
use std::collections::BTreeMap;

const DEFAULT: Field = Field::new("default");
const FIELDS: &[Field] = &[DEFAULT];

/// Responses Object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    /// `default`.
    pub default: Option<Response>,
    /// Responses by HTTP status code, emitted in ascending order.
    pub status_codes: BTreeMap<u16, Response>,
    /// Vendor extensions.
    pub extensions: Extensions,
}

impl Responses {
    /// Responses with only a default.
    pub fn with_default(response: Response) -> Self {
        Self {
            default: Some(response),
            ..Self::default()
        }
    }

    /// Adds or replaces the response for `code`.
    pub fn insert(&mut self, code: u16, response: Response) -> Option<Response> {
        self.status_codes.insert(code, response)
    }

    /// Response for `code`, if declared.
    pub fn get(&self, code: u16) -> Option<&Response> {
        self.status_codes.get(&code)
    }
}

fn is_status_code_key(key: &str) -> bool {
    let digits = key.strip_prefix(['+', '-']).unwrap_or(key);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_status_code(key: &str) -> SpecResult<u16> {
    key.parse::<u16>().map_err(|_| {
        SpecError::MalformedJson {
            path: String::new(),
            detail: format!("status code '{}' is out of range", key),
        }
        .at(key)
    })
}

impl Composed for Responses {
    const ENTITY: &'static str = "Responses";

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn write_groups(&self, out: &mut ObjectWriter) -> SpecResult<()> {
        out.field(&DEFAULT, &self.default)?;
        for (code, response) in &self.status_codes {
            let key = code.to_string();
            let encoded = response.encode().map_err(|e| e.at(&key))?;
            out.insert(&key, encoded)?;
        }
        Ok(())
    }

    fn read_groups(parts: Parts, input: &mut ObjectReader) -> SpecResult<Self> {
        let mut status_codes = BTreeMap::new();
        for (key, value) in input.drain_matching(is_status_code_key) {
            let code = parse_status_code(&key)?;
            let response = Response::decode(value).map_err(|e| e.at(&key))?;
            if status_codes.insert(code, response).is_some() {
                return Err(SpecError::MalformedJson {
                    path: String::new(),
                    detail: format!("status code {} is declared twice", code),
                }
                .at(&key));
            }
        }

        let default = input.claim(FIELDS).optional(&DEFAULT)?;
        Ok(Self {
            default,
            status_codes,
            extensions: parts.extensions,
        })
    }

    fn check(&self) -> SpecResult<()> {
        if self.default.is_none() && self.status_codes.is_empty() {
            return Err(SpecError::MissingRequiredField {
                entity: Self::ENTITY,
                field: "a default response or at least one status code",
            });
        }
        Ok(())
    }
}

composed_codec!(Responses);
