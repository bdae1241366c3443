//! Relationship objects and their polymorphic `data` member.
//!
//! Relationship `data` is either one resource identifier (to-one) or an
//! array of them (to-many). The wire format has no discriminator, so the
//! variant is chosen from the JSON shape:
//!
//! 1. an object decoding to an identifier with a non-empty `id` is
//!    [`RelationshipData::Single`];
//! 2. otherwise an array of identifier objects is
//!    [`RelationshipData::Collection`];
//! 3. anything else is [`DocumentError::MalformedRelationshipData`].
//!
//! An empty object is never taken for a to-one relationship.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DocumentError, Links, ResourceIdentifier, Validate, ValidationError};

/// The `data` member of a relationship.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::RelationshipData;
///
/// let single: RelationshipData =
///     serde_json::from_str(r#"{"id":"1","type":"users"}"#).unwrap();
/// assert!(single.as_single().is_some());
///
/// let many: RelationshipData =
///     serde_json::from_str(r#"[{"id":"1","type":"tags"},{"id":"2","type":"tags"}]"#).unwrap();
/// assert_eq!(many.as_collection().map(<[_]>::len), Some(2));
///
/// assert!(serde_json::from_str::<RelationshipData>("{}").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// A to-one relationship.
    Single(ResourceIdentifier),
    /// A to-many relationship; order is preserved.
    Collection(Vec<ResourceIdentifier>),
}

impl RelationshipData {
    /// Decodes relationship data from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MalformedRelationshipData`] if the value is
    /// neither shape.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        if value.is_object() {
            if let Ok(identifier) = ResourceIdentifier::deserialize(value) {
                if !identifier.id().is_empty() {
                    return Ok(Self::Single(identifier));
                }
            }
        }

        if let Value::Array(items) = value {
            if items.iter().all(Value::is_object) {
                if let Ok(identifiers) = Vec::<ResourceIdentifier>::deserialize(value) {
                    return Ok(Self::Collection(identifiers));
                }
            }
        }

        Err(DocumentError::MalformedRelationshipData)
    }

    /// Returns the identifier of a to-one relationship.
    #[must_use]
    pub const fn as_single(&self) -> Option<&ResourceIdentifier> {
        match self {
            Self::Single(identifier) => Some(identifier),
            Self::Collection(_) => None,
        }
    }

    /// Returns the identifiers of a to-many relationship.
    #[must_use]
    pub fn as_collection(&self) -> Option<&[ResourceIdentifier]> {
        match self {
            Self::Single(_) => None,
            Self::Collection(identifiers) => Some(identifiers),
        }
    }

    /// Iterates over every identifier, whichever variant is populated.
    pub fn identifiers(&self) -> impl Iterator<Item = &ResourceIdentifier> {
        match self {
            Self::Single(identifier) => std::slice::from_ref(identifier).iter(),
            Self::Collection(identifiers) => identifiers.iter(),
        }
    }
}

impl From<ResourceIdentifier> for RelationshipData {
    fn from(identifier: ResourceIdentifier) -> Self {
        Self::Single(identifier)
    }
}

impl From<Vec<ResourceIdentifier>> for RelationshipData {
    fn from(identifiers: Vec<ResourceIdentifier>) -> Self {
        Self::Collection(identifiers)
    }
}

impl<'de> Deserialize<'de> for RelationshipData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

impl Validate for RelationshipData {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Single(identifier) => identifier.validate(),
            Self::Collection(identifiers) => {
                for (index, identifier) in identifiers.iter().enumerate() {
                    identifier
                        .validate()
                        .map_err(|cause| ValidationError::IdentifierAtIndex {
                            index,
                            cause: Box::new(cause),
                        })?;
                }
                Ok(())
            }
        }
    }
}

/// A relationship object: `{"data": ..., "links"?: ..., "meta"?: ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// The related resource identifier(s).
    pub data: RelationshipData,
    /// Links to the relationship and the related resource(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl Relationship {
    /// Creates a relationship with no links or metadata.
    #[must_use]
    pub fn new(data: impl Into<RelationshipData>) -> Self {
        Self {
            data: data.into(),
            links: None,
            meta: None,
        }
    }

    /// Sets the relationship links.
    #[must_use]
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = Some(links);
        self
    }

    /// Sets the relationship metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl Validate for Relationship {
    fn validate(&self) -> Result<(), ValidationError> {
        self.data.validate()
    }
}
