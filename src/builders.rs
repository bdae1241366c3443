//! Response builders for endpoint handlers.
//!
//! The free functions are pure constructors: given identities, attributes
//! and a base URL they assemble self links, pagination metadata and the
//! right envelope. [`DocumentFactory`] wraps them with a
//! [`DocumentConfig`] and a [`LogSink`] so handlers do not repeat the base
//! URL and page-size plumbing.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use jsonapi_document::{build_single_resource_response, Validate, ValidationError};
//! use serde::Serialize;
//!
//! #[derive(Debug, Clone, Serialize)]
//! struct User {
//!     name: String,
//! }
//!
//! impl Validate for User {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         Ok(())
//!     }
//! }
//!
//! let response = build_single_resource_response(
//!     "42",
//!     "users",
//!     User { name: "Ada".to_string() },
//!     BTreeMap::new(),
//!     "https://api.example.com",
//! )
//! .expect("identity is present");
//!
//! let resource = response.as_single().unwrap();
//! assert_eq!(
//!     resource.links.as_ref().unwrap().self_link.as_deref(),
//!     Some("https://api.example.com/users/42")
//! );
//! assert!(response.validate().is_ok());
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{join_url, DocumentConfig};
use crate::document::{
    ErrorObject, ErrorResponse, ErrorSource, Links, Meta, Relationship, RelationshipData, Resource,
    ResourceIdentifier, ResourceResponse,
};
use crate::logging::{LogField, LogLevel, LogSink};
use crate::pagination::{build_pagination, build_pagination_links, PageRequest};

fn resource_url(base_url: &str, resource_type: &str, id: &str) -> String {
    join_url(base_url, &[resource_type, id])
}

fn collection_url(base_url: &str, resource_type: &str) -> String {
    join_url(base_url, &[resource_type])
}

/// Builds a single-resource response with a `self` link of
/// `{base_url}/{resource_type}/{id}`.
///
/// Returns `None` when `id` or `resource_type` is blank; callers must treat
/// that as a build failure.
#[must_use]
pub fn build_single_resource_response<T>(
    id: &str,
    resource_type: &str,
    attributes: T,
    relationships: BTreeMap<String, Relationship>,
    base_url: &str,
) -> Option<ResourceResponse<T>> {
    if id.trim().is_empty() || resource_type.trim().is_empty() {
        return None;
    }

    let resource = Resource::new(ResourceIdentifier::new(id, resource_type), attributes)
        .with_relationships(relationships)
        .with_links(Links::with_self(resource_url(base_url, resource_type, id)));

    Some(ResourceResponse::single(resource))
}

/// Builds a paginated collection response.
///
/// Each `(id, attributes)` pair becomes a resource with a `self` link.
/// Pagination links are built against `{base_url}/{resource_type}` and
/// the page counters are attached under `meta.pagination`.
///
/// # Panics
///
/// Panics if `page_size` is zero (see
/// [`build_pagination`](crate::build_pagination)).
#[must_use]
pub fn build_multiple_resources_response<T>(
    items: Vec<(String, T)>,
    resource_type: &str,
    base_url: &str,
    current_page: u64,
    total_count: u64,
    page_size: u64,
) -> ResourceResponse<T> {
    let resources = items
        .into_iter()
        .map(|(id, attributes)| {
            let links = Links::with_self(resource_url(base_url, resource_type, &id));
            Resource::new(ResourceIdentifier::new(id, resource_type), attributes).with_links(links)
        })
        .collect();

    let pagination = build_pagination(current_page, total_count, page_size);
    let links = build_pagination_links(
        &collection_url(base_url, resource_type),
        current_page,
        pagination.total_pages,
    );

    ResourceResponse::collection(resources)
        .with_links(links)
        .with_meta(Meta::with_pagination(pagination))
}

/// Builds an error document holding one error object.
#[must_use]
pub fn build_error_response(
    status: &str,
    title: &str,
    detail: Option<&str>,
    source: Option<ErrorSource>,
) -> ErrorResponse {
    let mut error = ErrorObject::new(status, title);
    error.detail = detail.map(ToString::to_string);
    error.source = source;
    ErrorResponse::new(vec![error])
}

/// Builds a to-one relationship with a `self` link to the related resource.
#[must_use]
pub fn build_relationship(related_id: &str, related_type: &str, base_url: &str) -> Relationship {
    Relationship::new(ResourceIdentifier::new(related_id, related_type)).with_links(
        Links::with_self(resource_url(base_url, related_type, related_id)),
    )
}

/// Builds a to-many relationship, preserving the order of `related`.
///
/// `self_url` becomes the relationship's `self` link when given.
#[must_use]
pub fn build_collection_relationship(
    related: Vec<ResourceIdentifier>,
    self_url: Option<&str>,
) -> Relationship {
    let relationship = Relationship::new(RelationshipData::Collection(related));
    match self_url {
        Some(url) => relationship.with_links(Links::with_self(url)),
        None => relationship,
    }
}

/// Builds documents against one service's configuration.
///
/// The factory is cheap to clone and can be shared across handlers.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use jsonapi_document::logging::TracingSink;
/// use jsonapi_document::{BaseUrl, DocumentConfig, DocumentFactory, PageRequest};
/// use serde_json::{json, Map};
///
/// let config = DocumentConfig::builder()
///     .base_url(BaseUrl::new("/api").unwrap())
///     .build()
///     .unwrap();
/// let factory = DocumentFactory::new(config, Arc::new(TracingSink::new()));
///
/// let mut attributes = Map::new();
/// attributes.insert("label".to_string(), json!("rust"));
///
/// let response = factory.collection(
///     vec![("1".to_string(), attributes)],
///     "tags",
///     &PageRequest::new(Some(1), Some(10)),
///     1,
/// );
/// assert_eq!(
///     response.links().unwrap().self_link.as_deref(),
///     Some("/api/tags?page=1")
/// );
/// ```
#[derive(Clone)]
pub struct DocumentFactory {
    config: DocumentConfig,
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for DocumentFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DocumentFactory {
    /// Creates a factory.
    #[must_use]
    pub fn new(config: DocumentConfig, sink: Arc<dyn LogSink>) -> Self {
        Self { config, sink }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Builds a single-resource response.
    ///
    /// Returns `None` (and records a warning) when the identity is blank.
    #[must_use]
    pub fn single<T>(
        &self,
        id: &str,
        resource_type: &str,
        attributes: T,
        relationships: BTreeMap<String, Relationship>,
    ) -> Option<ResourceResponse<T>> {
        let response = build_single_resource_response(
            id,
            resource_type,
            attributes,
            relationships,
            self.config.base_url().as_ref(),
        );

        let fields = [
            LogField::new("resource_type", resource_type),
            LogField::new("id", id),
        ];
        if response.is_some() {
            self.sink
                .record(LogLevel::Debug, "built single resource document", &fields);
        } else {
            self.sink.record(
                LogLevel::Warn,
                "refused to build document for blank resource identity",
                &fields,
            );
        }

        response
    }

    /// Builds a paginated collection response for `page`.
    ///
    /// The page number and size are resolved against the configuration, so
    /// this never hits the zero page-size precondition.
    #[must_use]
    pub fn collection<T>(
        &self,
        items: Vec<(String, T)>,
        resource_type: &str,
        page: &PageRequest,
        total_count: u64,
    ) -> ResourceResponse<T> {
        let current_page = page.number();
        let page_size = page.size(&self.config).get();
        let item_count = items.len();

        let response = build_multiple_resources_response(
            items,
            resource_type,
            self.config.base_url().as_ref(),
            current_page,
            total_count,
            page_size,
        );

        self.sink.record(
            LogLevel::Debug,
            "built collection document",
            &[
                LogField::new("resource_type", resource_type),
                LogField::new("items", item_count),
                LogField::new("page", current_page),
                LogField::new("page_size", page_size),
                LogField::new("total_count", total_count),
            ],
        );

        response
    }

    /// Builds a to-one relationship under the configured base URL.
    #[must_use]
    pub fn relationship(&self, related_id: &str, related_type: &str) -> Relationship {
        build_relationship(related_id, related_type, self.config.base_url().as_ref())
    }

    /// Builds a single-error document and records it.
    #[must_use]
    pub fn error(
        &self,
        status: &str,
        title: &str,
        detail: Option<&str>,
        source: Option<ErrorSource>,
    ) -> ErrorResponse {
        self.sink.record(
            LogLevel::Debug,
            "built error document",
            &[
                LogField::new("status", status),
                LogField::new("title", title),
            ],
        );
        build_error_response(status, title, detail, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, PageSize};
    use crate::document::{Validate, ValidationError};
    use crate::logging::tests::RecordingSink;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Tag {
        label: String,
    }

    impl Validate for Tag {
        fn validate(&self) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    fn tag(label: &str) -> Tag {
        Tag {
            label: label.to_string(),
        }
    }

    #[test]
    fn test_single_response_returns_none_for_blank_identity() {
        assert!(build_single_resource_response("", "tags", tag("a"), BTreeMap::new(), "/api")
            .is_none());
        assert!(build_single_resource_response("1", " ", tag("a"), BTreeMap::new(), "/api")
            .is_none());
    }

    #[test]
    fn test_single_response_attaches_relationships_and_self_link() {
        let mut relationships = BTreeMap::new();
        relationships.insert(
            "owner".to_string(),
            build_relationship("9", "users", "/api/"),
        );

        let response =
            build_single_resource_response("1", "tags", tag("rust"), relationships, "/api/")
                .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"data": {
                "id": "1",
                "type": "tags",
                "attributes": {"label": "rust"},
                "relationships": {"owner": {
                    "data": {"id": "9", "type": "users"},
                    "links": {"self": "/api/users/9"}
                }},
                "links": {"self": "/api/tags/1"}
            }})
        );
        assert!(response.validate().is_ok());
    }

    #[test]
    fn test_multiple_response_builds_links_and_meta() {
        let response = build_multiple_resources_response(
            vec![("11".to_string(), tag("a")), ("12".to_string(), tag("b"))],
            "tags",
            "https://api.example.com",
            2,
            95,
            10,
        );

        let resources = response.as_collection().unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(
            resources[0].links.as_ref().unwrap().self_link.as_deref(),
            Some("https://api.example.com/tags/11")
        );

        let links = response.links().unwrap();
        assert_eq!(
            links.prev.as_deref(),
            Some("https://api.example.com/tags?page=1")
        );
        assert_eq!(
            links.last.as_deref(),
            Some("https://api.example.com/tags?page=10")
        );

        let pagination = response.meta().unwrap().pagination.unwrap();
        assert_eq!(pagination, build_pagination(2, 95, 10));
        assert!(response.validate().is_ok());
    }

    #[test]
    fn test_error_response_has_one_object() {
        let response = build_error_response(
            "400",
            "Bad Request",
            Some("page[size] must be positive"),
            Some(ErrorSource::parameter("page[size]")),
        );

        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].detail.as_deref(),
            Some("page[size] must be positive")
        );
        assert!(response.validate().is_ok());
    }

    #[test]
    fn test_collection_relationship_preserves_order() {
        let relationship = build_collection_relationship(
            vec![
                ResourceIdentifier::new("3", "tags"),
                ResourceIdentifier::new("1", "tags"),
            ],
            Some("/api/articles/1/relationships/tags"),
        );

        assert_eq!(
            serde_json::to_value(&relationship).unwrap(),
            json!({
                "data": [{"id": "3", "type": "tags"}, {"id": "1", "type": "tags"}],
                "links": {"self": "/api/articles/1/relationships/tags"}
            })
        );
    }

    fn factory(sink: Arc<RecordingSink>) -> DocumentFactory {
        let config = DocumentConfig::builder()
            .base_url(BaseUrl::new("/api").unwrap())
            .default_page_size(PageSize::new(2).unwrap())
            .build()
            .unwrap();
        DocumentFactory::new(config, sink)
    }

    #[test]
    fn test_factory_collection_uses_configured_page_size() {
        let sink = Arc::new(RecordingSink::default());
        let factory = factory(Arc::clone(&sink));

        let response = factory.collection(
            vec![("1".to_string(), tag("a")), ("2".to_string(), tag("b"))],
            "tags",
            &PageRequest::default(),
            5,
        );

        let pagination = response.meta().unwrap().pagination.unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.next_page, 2);
        assert_eq!(
            response.links().unwrap().next.as_deref(),
            Some("/api/tags?page=2")
        );

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, LogLevel::Debug);
    }

    #[test]
    fn test_factory_single_warns_on_blank_identity() {
        let sink = Arc::new(RecordingSink::default());
        let factory = factory(Arc::clone(&sink));

        assert!(factory.single("", "tags", tag("a"), BTreeMap::new()).is_none());
        assert!(factory.single("1", "tags", tag("a"), BTreeMap::new()).is_some());

        let records = sink.records.lock().unwrap();
        assert_eq!(records[0].0, LogLevel::Warn);
        assert_eq!(records[1].0, LogLevel::Debug);
    }

    #[test]
    fn test_factory_relationship_and_error_use_config() {
        let factory = factory(Arc::new(RecordingSink::default()));

        let relationship = factory.relationship("5", "users");
        assert_eq!(
            relationship.links.unwrap().self_link.as_deref(),
            Some("/api/users/5")
        );

        let error = factory.error("404", "Not Found", None, None);
        assert!(error.validate().is_ok());
        assert!(error.errors[0].detail.is_none());
        assert!(format!("{factory:?}").contains("DocumentFactory"));
    }

    #[test]
    fn test_factory_links_follow_base_url_join() {
        let config = DocumentConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com/v1/").unwrap())
            .build()
            .unwrap();
        let base_url = config.base_url().clone();
        let factory = DocumentFactory::new(config, Arc::new(RecordingSink::default()));

        let single = factory
            .single("7", "tags", tag("a"), BTreeMap::new())
            .unwrap();
        assert_eq!(
            single.as_single().unwrap().links.as_ref().unwrap().self_link,
            Some(base_url.join(&["tags", "7"]))
        );

        let collection = factory.collection(
            vec![("8".to_string(), tag("b"))],
            "tags",
            &PageRequest::default(),
            1,
        );
        assert_eq!(
            collection.as_collection().unwrap()[0]
                .links
                .as_ref()
                .unwrap()
                .self_link,
            Some(base_url.join(&["tags", "8"]))
        );
        assert_eq!(
            collection.links().unwrap().self_link,
            Some(format!("{}?page=1", base_url.join(&["tags"])))
        );

        let relationship = factory.relationship("9", "users");
        assert_eq!(
            relationship.links.unwrap().self_link,
            Some(base_url.join(&["users", "9"]))
        );
    }

    #[test]
    fn test_free_builders_trim_slashes_like_base_url_join() {
        let relationship = build_relationship("/9/", "users", "/api//");
        assert_eq!(
            relationship.links.unwrap().self_link.as_deref(),
            Some("/api/users/9")
        );
    }
}
