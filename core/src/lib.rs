#![deny(missing_docs)]

//! # OAS Spec
//!
//! In-memory model of OpenAPI 2.0 (Swagger) objects with a lossless JSON codec.
//!
//! Each entity is the composition of a `$ref` cell, structural field groups
//! and a bag of `x-*` vendor extensions, flattened into one JSON object.
//! Decoding routes every key back to its group and rejects keys that are
//! neither known fields nor extensions, so `decode` followed by `encode`
//! reproduces the input.
//!
//! ```
//! use oas_spec::{Composed, Operation};
//!
//! let op = Operation::from_json_str(
//!     r#"{"operationId":"sendCat","x-framework":"go-swagger","responses":{"default":{"description":"void"}}}"#,
//! )
//! .unwrap();
//! assert_eq!(op.props.id, "sendCat");
//! assert_eq!(op.extensions.get_string("x-framework"), Some("go-swagger"));
//! ```

/// Shared error types.
pub mod error;

/// Vendor extension bag.
pub mod extensions;

/// `$ref` cell.
pub mod reference;

/// Union-shaped field values.
pub mod union;

/// Composed-object encode/decode driver.
pub mod codec;

/// OpenAPI entities.
pub mod spec;

pub use codec::{Composed, Decode, Encode, Field, FieldGroup, Omit, MAX_DEPTH};
pub use error::{SpecError, SpecResult};
pub use extensions::{Extensions, EXTENSION_PREFIX};
pub use reference::{Reference, ReferenceKind, REF_KEY};
pub use spec::{
    CommonValidations, ExternalDocumentation, Header, Items, Operation, OperationProps,
    ParamProps, Parameter, Response, ResponseProps, Responses, Schema, SchemaProps,
    SecurityRequirement, SimpleSchema, SwaggerSchemaProps, XmlObject,
};
pub use union::{SchemaOrArray, SchemaOrBool, SchemaOrStringArray, StringOrArray};
