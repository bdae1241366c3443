//! The `(id, type)` pair that identifies a resource.

use serde::{Deserialize, Serialize};

use super::{Validate, ValidationError};

/// A resource identifier object: `{"id": ..., "type": ...}`.
///
/// The identifier is immutable once constructed. Blank members are allowed
/// at construction time (a decoded document may contain them) and are
/// rejected by [`Validate::validate`].
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{ResourceIdentifier, Validate};
///
/// let identifier = ResourceIdentifier::new("42", "users");
/// assert_eq!(identifier.id(), "42");
/// assert_eq!(identifier.resource_type(), "users");
/// assert!(identifier.validate().is_ok());
///
/// let json = serde_json::to_string(&identifier).unwrap();
/// assert_eq!(json, r#"{"id":"42","type":"users"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    id: String,
    #[serde(rename = "type")]
    resource_type: String,
}

impl ResourceIdentifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
        }
    }

    /// Returns the resource ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the resource type.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }
}

impl Validate for ResourceIdentifier {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyResourceId);
        }
        if self.resource_type.trim().is_empty() {
            return Err(ValidationError::EmptyResourceType);
        }
        Ok(())
    }
}
