//! Link objects attached to resources, relationships and envelopes.
//!
//! Absent links are omitted from the serialized form rather than emitted as
//! `null` or empty strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Navigation links for a resource or relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    /// The canonical URL of the resource or relationship.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// A link to the related resource(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedLink>,
}

impl Links {
    /// Creates links holding only a `self` URL.
    #[must_use]
    pub fn with_self(url: impl Into<String>) -> Self {
        Self {
            self_link: Some(url.into()),
            related: None,
        }
    }

    /// Returns `true` if no link is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.self_link.is_none() && self.related.is_none()
    }
}

/// A link object with an `href` and optional descriptive members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedLink {
    /// The target URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// A human-readable label for the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A URL to a description document for the link target.
    #[serde(
        rename = "describedby",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub described_by: Option<String>,
    /// Free-form metadata about the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

/// Page-relative links attached to a collection envelope.
///
/// Built by [`build_pagination_links`](crate::build_pagination_links).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    /// The current page.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// The last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    /// The previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// The next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
