//! Error types for decoding and validating documents.
//!
//! Two families of failure exist:
//!
//! - [`DocumentError`]: raw JSON that matches none of the shapes a
//!   polymorphic member accepts (relationship data, primary data), plus
//!   JSON syntax errors from the `from_json` helpers.
//! - [`ValidationError`]: a structural or semantic rule violated somewhere
//!   in an already decoded document. Wrapping variants carry the context
//!   (relationship name, resource index) of the node that failed, and
//!   [`ValidationError::pointer`] renders that context as a JSON Pointer.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_document::{ResourceIdentifier, Validate, ValidationError};
//!
//! let error = ResourceIdentifier::new("", "users").validate().unwrap_err();
//! assert!(matches!(error, ValidationError::EmptyResourceId));
//! assert_eq!(error.pointer(), "/id");
//! ```

use thiserror::Error;

/// Error returned when a document cannot be decoded.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Relationship `data` was neither a resource identifier object with a
    /// non-empty `id` nor an array of resource identifier objects.
    #[error("data field is neither a resource object nor a valid array of objects")]
    MalformedRelationshipData,

    /// The envelope matched neither the single-resource nor the collection
    /// shape.
    ///
    /// When `data` had the right outer shape but a nested member failed to
    /// decode, `source` holds that decode error.
    #[error("invalid resource response format")]
    InvalidResourceResponseFormat {
        /// The decode error of the last shape attempted, if any.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The input was not valid JSON, or a member had the wrong type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The document decoded but failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A rule violation found while validating a document.
///
/// Validation is fail-fast: the first violation found in a depth-first walk
/// is returned, wrapped once per level with the context of the enclosing
/// node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A resource identifier has a blank `id`.
    #[error("resource ID cannot be empty")]
    EmptyResourceId,

    /// A resource identifier has a blank `type`.
    #[error("resource type cannot be empty")]
    EmptyResourceType,

    /// An attribute failed a caller-defined rule.
    #[error("{field}: {message}")]
    InvalidAttribute {
        /// The attribute name, or an empty string for the attributes object
        /// as a whole.
        field: String,
        /// A human-readable description of the violation.
        message: String,
    },

    /// The attributes payload of a resource is invalid.
    #[error("attributes validation failed: {cause}")]
    Attributes {
        /// The violation reported by the attributes type.
        cause: Box<ValidationError>,
    },

    /// A named relationship of a resource is invalid.
    #[error("relationship '{name}' validation failed: {cause}")]
    Relationship {
        /// The relationship name.
        name: String,
        /// The violation inside the relationship data.
        cause: Box<ValidationError>,
    },

    /// A member of to-many relationship data is invalid.
    #[error("resource identifier at index {index} validation failed: {cause}")]
    IdentifierAtIndex {
        /// Position of the identifier within the relationship data array.
        index: usize,
        /// The identifier violation.
        cause: Box<ValidationError>,
    },

    /// A single-resource envelope carries pagination links.
    #[error("single resource response cannot have pagination links")]
    SingleResourceWithLinks,

    /// The primary resource of a single-resource envelope is invalid.
    #[error("single resource validation failed: {cause}")]
    SingleResource {
        /// The resource violation.
        cause: Box<ValidationError>,
    },

    /// A resource in a collection envelope is invalid.
    #[error("resource at index {index} validation failed: {cause}")]
    ResourceAtIndex {
        /// Position of the resource within `data`.
        index: usize,
        /// The resource violation.
        cause: Box<ValidationError>,
    },

    /// A side-loaded resource is invalid.
    #[error("included resource at index {index} validation failed: {cause}")]
    IncludedAtIndex {
        /// Position of the resource within `included`.
        index: usize,
        /// The resource violation.
        cause: Box<ValidationError>,
    },

    /// An error document has no error objects.
    #[error("errors cannot be empty")]
    EmptyErrors,

    /// An error object has a blank `status`.
    #[error("error status cannot be empty")]
    EmptyErrorStatus,

    /// An error object has a blank `title`.
    #[error("error title cannot be empty")]
    EmptyErrorTitle,

    /// An error object within an error document is invalid.
    #[error("error object at index {index} validation failed: {cause}")]
    ErrorObjectAtIndex {
        /// Position of the error object within `errors`.
        index: usize,
        /// The error object violation.
        cause: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Creates an attribute violation for use in [`Validate`](crate::Validate)
    /// implementations.
    ///
    /// ```rust
    /// use jsonapi_document::ValidationError;
    ///
    /// let error = ValidationError::invalid_attribute("email", "must contain '@'");
    /// assert_eq!(error.to_string(), "email: must contain '@'");
    /// ```
    #[must_use]
    pub fn invalid_attribute(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the innermost violation, skipping every context wrapper.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Attributes { cause }
            | Self::Relationship { cause, .. }
            | Self::IdentifierAtIndex { cause, .. }
            | Self::SingleResource { cause }
            | Self::ResourceAtIndex { cause, .. }
            | Self::IncludedAtIndex { cause, .. }
            | Self::ErrorObjectAtIndex { cause, .. } => cause.root_cause(),
            _ => self,
        }
    }

    /// Returns a JSON Pointer (RFC 6901) to the node that failed, relative to
    /// the value `validate` was called on.
    ///
    /// ```rust
    /// use jsonapi_document::ValidationError;
    ///
    /// let error = ValidationError::ResourceAtIndex {
    ///     index: 3,
    ///     cause: Box::new(ValidationError::Relationship {
    ///         name: "author".to_string(),
    ///         cause: Box::new(ValidationError::EmptyResourceType),
    ///     }),
    /// };
    /// assert_eq!(error.pointer(), "/data/3/relationships/author/data/type");
    /// ```
    #[must_use]
    pub fn pointer(&self) -> String {
        match self {
            Self::EmptyResourceId => "/id".to_string(),
            Self::EmptyResourceType => "/type".to_string(),
            Self::InvalidAttribute { field, .. } if field.is_empty() => String::new(),
            Self::InvalidAttribute { field, .. } => format!("/{}", escape_token(field)),
            Self::Attributes { cause } => format!("/attributes{}", cause.pointer()),
            Self::Relationship { name, cause } => format!(
                "/relationships/{}/data{}",
                escape_token(name),
                cause.pointer()
            ),
            Self::IdentifierAtIndex { index, cause } => format!("/{index}{}", cause.pointer()),
            Self::SingleResourceWithLinks => "/links".to_string(),
            Self::SingleResource { cause } => format!("/data{}", cause.pointer()),
            Self::ResourceAtIndex { index, cause } => {
                format!("/data/{index}{}", cause.pointer())
            }
            Self::IncludedAtIndex { index, cause } => {
                format!("/included/{index}{}", cause.pointer())
            }
            Self::EmptyErrors => "/errors".to_string(),
            Self::EmptyErrorStatus => "/status".to_string(),
            Self::EmptyErrorTitle => "/title".to_string(),
            Self::ErrorObjectAtIndex { index, cause } => {
                format!("/errors/{index}{}", cause.pointer())
            }
        }
    }
}

fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
