//! Error documents.
//!
//! Failure payloads use a separate, simpler tree than resource documents:
//! an [`ErrorResponse`] owns a non-empty list of [`ErrorObject`]s, each of
//! which needs a `status` and a `title`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DocumentError, Links, Validate, ValidationError};

/// Points at the part of the request that caused an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// A JSON Pointer into the request document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    /// The query parameter that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl ErrorSource {
    /// Creates a source pointing into the request document.
    #[must_use]
    pub fn pointer(pointer: impl Into<String>) -> Self {
        Self {
            pointer: Some(pointer.into()),
            parameter: None,
        }
    }

    /// Creates a source naming a query parameter.
    #[must_use]
    pub fn parameter(parameter: impl Into<String>) -> Self {
        Self {
            pointer: None,
            parameter: Some(parameter.into()),
        }
    }
}

/// A single error object.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{ErrorObject, ErrorSource, Validate};
///
/// let error = ErrorObject::new("422", "Unprocessable Entity")
///     .with_detail("name is required")
///     .with_source(ErrorSource::pointer("/data/attributes/name"));
///
/// assert!(error.validate().is_ok());
/// let json = serde_json::to_value(&error).unwrap();
/// assert_eq!(json["source"]["pointer"], "/data/attributes/name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// A unique identifier for this occurrence of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Links describing the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// The HTTP status code, as a string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// An application-specific error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// A short summary of the problem.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// An explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The part of the request that caused the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl ErrorObject {
    /// Creates an error object with the required members.
    #[must_use]
    pub fn new(status: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the occurrence identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the application-specific error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the error source.
    #[must_use]
    pub fn with_source(mut self, source: ErrorSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the error links.
    #[must_use]
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = Some(links);
        self
    }

    /// Sets the error metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl Validate for ErrorObject {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.status.trim().is_empty() {
            return Err(ValidationError::EmptyErrorStatus);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyErrorTitle);
        }
        Ok(())
    }
}

/// An error document: `{"errors": [...], "meta"?: {...}}`.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{ErrorResponse, Validate};
///
/// let empty = ErrorResponse::new(Vec::new());
/// assert_eq!(empty.validate().unwrap_err().to_string(), "errors cannot be empty");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error objects; must not be empty.
    pub errors: Vec<ErrorObject>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl ErrorResponse {
    /// Creates an error document from a list of error objects.
    #[must_use]
    pub const fn new(errors: Vec<ErrorObject>) -> Self {
        Self { errors, meta: None }
    }

    /// Maps a validation failure to an error document.
    ///
    /// The failure message becomes the `detail` and its JSON Pointer the
    /// `source.pointer`. The caller chooses `status` and `title`.
    ///
    /// ```rust
    /// use jsonapi_document::{ErrorResponse, ValidationError};
    ///
    /// let failure = ValidationError::SingleResource {
    ///     cause: Box::new(ValidationError::EmptyResourceId),
    /// };
    /// let document = ErrorResponse::from_validation_error("422", "Unprocessable Entity", &failure);
    ///
    /// let error = &document.errors[0];
    /// assert_eq!(error.source.as_ref().unwrap().pointer.as_deref(), Some("/data/id"));
    /// ```
    #[must_use]
    pub fn from_validation_error(
        status: impl Into<String>,
        title: impl Into<String>,
        failure: &ValidationError,
    ) -> Self {
        Self::new(vec![ErrorObject::new(status, title)
            .with_detail(failure.to_string())
            .with_source(ErrorSource::pointer(failure.pointer()))])
    }

    /// Sets the document metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Serializes the document to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes an error document from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if the bytes are not an error document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DocumentError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl Validate for ErrorResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            return Err(ValidationError::EmptyErrors);
        }
        for (index, error) in self.errors.iter().enumerate() {
            error
                .validate()
                .map_err(|cause| ValidationError::ErrorObjectAtIndex {
                    index,
                    cause: Box::new(cause),
                })?;
        }
        Ok(())
    }
}
