#![deny(missing_docs)]

//! # Spec Entities
//!
//! OpenAPI 2.0 objects built on the composed-object codec. Each entity
//! declares its field tables, whether it carries a `$ref`, and its
//! minimum-content rule.
//!
//! - **schema**: Schema Object (plus its Swagger-only group).
//! - **operation**: Operation Object.
//! - **responses** / **response**: Responses and Response Objects.
//! - **parameter** / **header** / **items**: non-body value descriptions.
//! - **validations**: groups shared by parameter, header and items.
//! - **external_docs** / **xml**: small leaf objects.

pub mod external_docs;
pub mod header;
pub mod items;
pub mod operation;
pub mod parameter;
pub mod response;
pub mod responses;
pub mod schema;
pub mod validations;
pub mod xml;

pub use external_docs::ExternalDocumentation;
pub use header::Header;
pub use items::Items;
pub use operation::{Operation, OperationProps, SecurityRequirement};
pub use parameter::{ParamProps, Parameter};
pub use response::{Response, ResponseProps};
pub use responses::Responses;
pub use schema::{Schema, SchemaProps, SwaggerSchemaProps};
pub use validations::{CommonValidations, SimpleSchema};
pub use xml::XmlObject;
