//! # JSON:API Document Model
//!
//! Typed construction, decoding and validation of JSON:API response
//! documents for service endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - A typed document tree: [`ResourceIdentifier`], [`Relationship`],
//!   [`Resource<T>`] and the [`ResourceResponse<T>`] envelope
//! - Shape-sniffing codecs that tell a to-one relationship from a to-many
//!   one, and a single-resource document from a collection, by JSON shape
//! - Recursive, fail-fast validation through the [`Validate`] trait, with
//!   errors that name the failing resource index and relationship
//! - Pagination arithmetic and page links ([`build_pagination`],
//!   [`build_pagination_links`])
//! - Response builders and a configured [`DocumentFactory`]
//! - Error documents ([`ErrorObject`], [`ErrorResponse`])
//! - Type-safe configuration via [`DocumentConfig`] and
//!   [`DocumentConfigBuilder`], plus a [`ServiceRegistry`] for services
//!   hosting several APIs
//! - A structured logging seam ([`logging::LogSink`]) backed by `tracing`
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use jsonapi_document::{
//!     build_relationship, build_single_resource_response, ResourceResponse, Validate,
//!     ValidationError,
//! };
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Article {
//!     title: String,
//! }
//!
//! impl Validate for Article {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         if self.title.is_empty() {
//!             return Err(ValidationError::invalid_attribute("title", "cannot be empty"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut relationships = BTreeMap::new();
//! relationships.insert(
//!     "author".to_string(),
//!     build_relationship("9", "people", "https://api.example.com"),
//! );
//!
//! let response = build_single_resource_response(
//!     "1",
//!     "articles",
//!     Article { title: "JSON:API paints my bikeshed".to_string() },
//!     relationships,
//!     "https://api.example.com",
//! )
//! .unwrap();
//! assert!(response.validate().is_ok());
//!
//! // Decoding picks the single form from the object-shaped `data`
//! let bytes = response.to_json().unwrap();
//! let decoded = ResourceResponse::<Article>::from_json_validated(&bytes).unwrap();
//! assert!(decoded.is_single());
//! ```
//!
//! ## Validation
//!
//! Validation stops at the first failure and wraps it with where it
//! happened:
//!
//! ```rust
//! use jsonapi_document::{Resource, ResourceIdentifier, ResourceResponse, Validate};
//! use serde_json::{Map, Value};
//!
//! let response = ResourceResponse::collection(vec![
//!     Resource::<Map<String, Value>>::without_attributes(ResourceIdentifier::new("1", "tags")),
//!     Resource::without_attributes(ResourceIdentifier::new("", "tags")),
//! ]);
//!
//! let error = response.validate().unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "resource at index 1 validation failed: resource ID cannot be empty"
//! );
//! assert_eq!(error.pointer(), "/data/1/id");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and log sinks are passed in
//! - **Fail-fast validation**: newtypes validate on construction and
//!   documents report their first violation
//! - **Thread-safe**: all document and configuration types are `Send + Sync`
//! - **Immutable once built**: builders and constructors return finished
//!   values

pub mod builders;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod pagination;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, DocumentConfig, DocumentConfigBuilder, PageSize, ServiceRegistry};
pub use error::ConfigError;

// Re-export document model types
pub use document::{
    DocumentError, ErrorObject, ErrorResponse, ErrorSource, IncludedResource, Links, Meta,
    PaginationLinks, PrimaryData, RelatedLink, Relationship, RelationshipData, Resource,
    ResourceIdentifier, ResourceResponse, Validate, ValidationError,
};

// Re-export pagination and builders
pub use builders::{
    build_collection_relationship, build_error_response, build_multiple_resources_response,
    build_relationship, build_single_resource_response, DocumentFactory,
};
pub use pagination::{build_pagination, build_pagination_links, PageRequest, Pagination};
