//! The JSON:API document model.
//!
//! This module provides the typed tree for response documents and the
//! polymorphic codecs and recursive validation that operate on it.
//!
//! # Key Types
//!
//! - [`ResourceIdentifier`]: the `(id, type)` pair
//! - [`RelationshipData`] and [`Relationship`]: to-one or to-many references,
//!   told apart by JSON shape
//! - [`Resource<T>`]: identity plus typed attributes and named relationships
//! - [`ResourceResponse<T>`]: the envelope, holding one resource or a
//!   collection ([`PrimaryData`])
//! - [`ErrorObject`] and [`ErrorResponse`]: failure documents
//! - [`Validate`]: the self-validation capability every node implements
//! - [`DocumentError`] and [`ValidationError`]: decode and validation failures
//!
//! # Example
//!
//! ```rust
//! use jsonapi_document::{ResourceResponse, Validate};
//! use serde_json::{Map, Value};
//!
//! let body = br#"{"data": [{"id": "1", "type": "tags"}, {"id": "2", "type": "tags"}]}"#;
//! let response = ResourceResponse::<Map<String, Value>>::from_json(body).unwrap();
//!
//! assert!(!response.is_single());
//! assert!(response.validate().is_ok());
//! ```

mod error_object;
mod errors;
mod identifier;
mod links;
mod relationship;
mod resource;
mod response;
mod validate;

pub use error_object::{ErrorObject, ErrorResponse, ErrorSource};
pub use errors::{DocumentError, ValidationError};
pub use identifier::ResourceIdentifier;
pub use links::{Links, PaginationLinks, RelatedLink};
pub use relationship::{Relationship, RelationshipData};
pub use resource::{IncludedResource, Resource};
pub use response::{Meta, PrimaryData, ResourceResponse};
pub use validate::Validate;
