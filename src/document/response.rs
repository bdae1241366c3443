//! The top-level response envelope.
//!
//! A [`ResourceResponse<T>`] carries either one primary resource or a
//! collection of them. The two modes are an enum ([`PrimaryData`]) so a
//! response can never hold both or neither. Decoding picks the mode from
//! the shape of the `data` member:
//!
//! 1. `data` is an object that decodes to a resource with a non-empty
//!    `id`: single mode;
//! 2. otherwise `data` is an array of resources: collection mode;
//! 3. otherwise [`DocumentError::InvalidResourceResponseFormat`].
//!
//! Envelope-level `links` are pagination links and only belong to
//! collections. That rule is enforced by [`Validate`], not at
//! construction, so a decoded single response with links can still be
//! inspected and reported.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    DocumentError, IncludedResource, PaginationLinks, Resource, Validate, ValidationError,
};
use crate::pagination::Pagination;

/// The `meta` member of an envelope.
///
/// `pagination` holds the page counters of a collection; every other
/// member is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Page counters for collection responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Any other metadata members.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Meta {
    /// Creates metadata holding only pagination counters.
    #[must_use]
    pub fn with_pagination(pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            extra: Map::new(),
        }
    }
}

/// The primary data of an envelope: one resource or an ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryData<T> {
    /// Single-resource mode.
    Single(Box<Resource<T>>),
    /// Collection mode; an empty collection serializes as `[]`.
    Collection(Vec<Resource<T>>),
}

/// A JSON:API response document with typed primary data.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{Resource, ResourceIdentifier, ResourceResponse, Validate};
/// use serde_json::{json, Map, Value};
///
/// let resource: Resource<Map<String, Value>> =
///     Resource::without_attributes(ResourceIdentifier::new("1", "users"));
/// let response = ResourceResponse::single(resource);
/// assert!(response.validate().is_ok());
///
/// let json = serde_json::to_value(&response).unwrap();
/// assert_eq!(json, json!({"data": {"id": "1", "type": "users"}}));
///
/// let decoded: ResourceResponse<Map<String, Value>> = serde_json::from_value(json).unwrap();
/// assert!(decoded.is_single());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceResponse<T> {
    data: PrimaryData<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<PaginationLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    included: Vec<IncludedResource>,
}

impl<T> ResourceResponse<T> {
    /// Creates a single-resource response.
    #[must_use]
    pub fn single(resource: Resource<T>) -> Self {
        Self::from_data(PrimaryData::Single(Box::new(resource)))
    }

    /// Creates a collection response.
    #[must_use]
    pub const fn collection(resources: Vec<Resource<T>>) -> Self {
        Self::from_data(PrimaryData::Collection(resources))
    }

    /// Creates a response from already built primary data.
    #[must_use]
    pub const fn from_data(data: PrimaryData<T>) -> Self {
        Self {
            data,
            links: None,
            meta: None,
            included: Vec::new(),
        }
    }

    /// Sets the envelope links.
    ///
    /// Only collection responses may carry links; a single response with
    /// links fails validation.
    #[must_use]
    pub fn with_links(mut self, links: PaginationLinks) -> Self {
        self.links = Some(links);
        self
    }

    /// Sets the envelope metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Sets the side-loaded resources.
    #[must_use]
    pub fn with_included(mut self, included: Vec<IncludedResource>) -> Self {
        self.included = included;
        self
    }

    /// Returns the primary data.
    #[must_use]
    pub const fn data(&self) -> &PrimaryData<T> {
        &self.data
    }

    /// Consumes the response and returns the primary data.
    #[must_use]
    pub fn into_data(self) -> PrimaryData<T> {
        self.data
    }

    /// Returns `true` in single-resource mode.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self.data, PrimaryData::Single(_))
    }

    /// Returns the primary resource in single-resource mode.
    #[must_use]
    pub fn as_single(&self) -> Option<&Resource<T>> {
        match &self.data {
            PrimaryData::Single(resource) => Some(resource),
            PrimaryData::Collection(_) => None,
        }
    }

    /// Returns the primary resources in collection mode.
    #[must_use]
    pub fn as_collection(&self) -> Option<&[Resource<T>]> {
        match &self.data {
            PrimaryData::Single(_) => None,
            PrimaryData::Collection(resources) => Some(resources),
        }
    }

    /// Returns the envelope links, if any.
    #[must_use]
    pub const fn links(&self) -> Option<&PaginationLinks> {
        self.links.as_ref()
    }

    /// Returns the envelope metadata, if any.
    #[must_use]
    pub const fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Returns the side-loaded resources.
    #[must_use]
    pub fn included(&self) -> &[IncludedResource] {
        &self.included
    }
}

impl<T: Serialize> ResourceResponse<T> {
    /// Serializes the document to JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if the attributes fail to serialize.
    pub fn to_json(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct SingleEnvelope<T> {
    data: Resource<T>,
    #[serde(default)]
    links: Option<PaginationLinks>,
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    included: Vec<IncludedResource>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct CollectionEnvelope<T> {
    data: Vec<Resource<T>>,
    #[serde(default)]
    links: Option<PaginationLinks>,
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    included: Vec<IncludedResource>,
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes a response from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidResourceResponseFormat`] if the value
    /// matches neither envelope shape.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        let data = value.get("data");
        let mut source = None;

        if data.is_some_and(Value::is_object) {
            match SingleEnvelope::<T>::deserialize(value) {
                Ok(envelope) if !envelope.data.id().is_empty() => {
                    return Ok(Self {
                        data: PrimaryData::Single(Box::new(envelope.data)),
                        links: envelope.links,
                        meta: envelope.meta,
                        included: envelope.included,
                    });
                }
                Ok(_) => {}
                Err(error) => source = Some(error),
            }
        }

        if data.is_some_and(Value::is_array) {
            match CollectionEnvelope::<T>::deserialize(value) {
                Ok(envelope) => {
                    return Ok(Self {
                        data: PrimaryData::Collection(envelope.data),
                        links: envelope.links,
                        meta: envelope.meta,
                        included: envelope.included,
                    });
                }
                Err(error) => source = Some(error),
            }
        }

        Err(DocumentError::InvalidResourceResponseFormat { source })
    }

    /// Decodes a response from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] for malformed JSON and
    /// [`DocumentError::InvalidResourceResponseFormat`] for a well-formed
    /// document of the wrong shape.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }
}

impl<T: DeserializeOwned + Validate> ResourceResponse<T> {
    /// Decodes a response from JSON bytes and validates it.
    ///
    /// # Errors
    ///
    /// Returns the decode errors of [`ResourceResponse::from_json`] or
    /// [`DocumentError::Validation`] for the first rule violation.
    pub fn from_json_validated(bytes: &[u8]) -> Result<Self, DocumentError> {
        let response = Self::from_json(bytes)?;
        response.validate()?;
        Ok(response)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ResourceResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

impl<T: Validate> Validate for ResourceResponse<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.data {
            PrimaryData::Single(resource) => {
                if self.links.is_some() {
                    return Err(ValidationError::SingleResourceWithLinks);
                }
                resource
                    .validate()
                    .map_err(|cause| ValidationError::SingleResource {
                        cause: Box::new(cause),
                    })?;
            }
            PrimaryData::Collection(resources) => {
                for (index, resource) in resources.iter().enumerate() {
                    resource
                        .validate()
                        .map_err(|cause| ValidationError::ResourceAtIndex {
                            index,
                            cause: Box::new(cause),
                        })?;
                }
            }
        }

        for (index, resource) in self.included.iter().enumerate() {
            resource
                .validate()
                .map_err(|cause| ValidationError::IncludedAtIndex {
                    index,
                    cause: Box::new(cause),
                })?;
        }

        Ok(())
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<Map<String, Value>>>();
};
