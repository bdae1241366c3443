//! Resource objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Links, Relationship, ResourceIdentifier, Validate, ValidationError};

/// A resource object: identity, typed attributes and named relationships.
///
/// `T` is the attributes payload. It must implement [`Validate`] for the
/// resource to be validated; decoding and encoding only need serde.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{Relationship, Resource, ResourceIdentifier, Validate, ValidationError};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Article {
///     title: String,
/// }
///
/// impl Validate for Article {
///     fn validate(&self) -> Result<(), ValidationError> {
///         Ok(())
///     }
/// }
///
/// let resource = Resource::new(
///     ResourceIdentifier::new("1", "articles"),
///     Article { title: "Hello".to_string() },
/// )
/// .with_relationship(
///     "author",
///     Relationship::new(ResourceIdentifier::new("9", "people")),
/// );
///
/// assert!(resource.validate().is_ok());
/// let json = serde_json::to_value(&resource).unwrap();
/// assert_eq!(json["relationships"]["author"]["data"]["id"], "9");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    /// The resource identity, flattened into `id` and `type` members.
    #[serde(flatten)]
    pub identifier: ResourceIdentifier,
    /// The attributes payload.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<T>,
    /// Relationships keyed by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
    /// Links to the resource itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// A side-loaded resource of any type, with free-form attributes.
pub type IncludedResource = Resource<Map<String, Value>>;

impl<T> Resource<T> {
    /// Creates a resource carrying `attributes`.
    #[must_use]
    pub const fn new(identifier: ResourceIdentifier, attributes: T) -> Self {
        Self {
            identifier,
            attributes: Some(attributes),
            relationships: BTreeMap::new(),
            links: None,
            meta: None,
        }
    }

    /// Creates a resource with no attributes member.
    #[must_use]
    pub const fn without_attributes(identifier: ResourceIdentifier) -> Self {
        Self {
            identifier,
            attributes: None,
            relationships: BTreeMap::new(),
            links: None,
            meta: None,
        }
    }

    /// Adds (or replaces) a named relationship.
    #[must_use]
    pub fn with_relationship(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }

    /// Replaces every relationship.
    #[must_use]
    pub fn with_relationships(mut self, relationships: BTreeMap<String, Relationship>) -> Self {
        self.relationships = relationships;
        self
    }

    /// Sets the resource links.
    #[must_use]
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = Some(links);
        self
    }

    /// Sets the resource metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Returns the resource ID.
    #[must_use]
    pub fn id(&self) -> &str {
        self.identifier.id()
    }

    /// Returns the resource type.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        self.identifier.resource_type()
    }

    /// Looks up a relationship by name.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }
}

impl<T: Serialize> Resource<T> {
    /// Converts the resource into an [`IncludedResource`] so that it can be
    /// side-loaded next to resources of other types.
    ///
    /// # Errors
    ///
    /// Returns an error if the attributes do not serialize to a JSON object.
    pub fn into_included(self) -> Result<IncludedResource, serde_json::Error> {
        let attributes = match self.attributes {
            Some(attributes) => match serde_json::to_value(attributes)? {
                Value::Object(map) => Some(map),
                other => {
                    return Err(serde::ser::Error::custom(format!(
                        "attributes must serialize to an object, got {other}"
                    )))
                }
            },
            None => None,
        };

        Ok(Resource {
            identifier: self.identifier,
            attributes,
            relationships: self.relationships,
            links: self.links,
            meta: self.meta,
        })
    }
}

impl<T: Validate> Validate for Resource<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.identifier.validate()?;

        if let Some(attributes) = &self.attributes {
            attributes
                .validate()
                .map_err(|cause| ValidationError::Attributes {
                    cause: Box::new(cause),
                })?;
        }

        for (name, relationship) in &self.relationships {
            relationship
                .validate()
                .map_err(|cause| ValidationError::Relationship {
                    name: name.clone(),
                    cause: Box::new(cause),
                })?;
        }

        Ok(())
    }
}
