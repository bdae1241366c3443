//! Page counters and page-relative links for collection responses.
//!
//! Both builders are pure functions of their inputs. Page numbers are
//! 1-based.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_document::{build_pagination, build_pagination_links};
//!
//! let pagination = build_pagination(2, 95, 10);
//! assert_eq!(pagination.total_pages, 10);
//! assert_eq!(pagination.prev_page, 1);
//! assert_eq!(pagination.next_page, 3);
//!
//! let links = build_pagination_links("/articles", 2, pagination.total_pages);
//! assert_eq!(links.self_link.as_deref(), Some("/articles?page=2"));
//! assert_eq!(links.next.as_deref(), Some("/articles?page=3"));
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{DocumentConfig, PageSize};
use crate::document::PaginationLinks;

/// Page counters reported under `meta.pagination`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The page being returned.
    pub current_page: u64,
    /// The previous page, or 1 on the first page.
    pub prev_page: u64,
    /// The next page, or the last page when already there.
    pub next_page: u64,
    /// The number of pages needed for `total_count` items.
    pub total_pages: u64,
    /// The total number of items across all pages.
    pub total_count: u64,
}

/// Computes page counters.
///
/// - `total_pages = ceil(total_count / page_size)`
/// - `prev_page = max(1, current_page - 1)`
/// - `next_page = min(total_pages, current_page + 1)`
///
/// # Panics
///
/// Panics if `page_size` is zero. Callers must pass a page size of at least
/// 1; [`PageSize`] carries that guarantee.
#[must_use]
pub const fn build_pagination(current_page: u64, total_count: u64, page_size: u64) -> Pagination {
    let total_pages = total_count.div_ceil(page_size);
    let prev_page = current_page.saturating_sub(1);
    let next_page = current_page.saturating_add(1);

    Pagination {
        current_page,
        prev_page: if prev_page < 1 { 1 } else { prev_page },
        next_page: if next_page > total_pages {
            total_pages
        } else {
            next_page
        },
        total_pages,
        total_count,
    }
}

/// Builds page-relative links under `base_url`.
///
/// - `self`: always
/// - `first`: only when `current_page > 1`
/// - `last`: only when `total_pages > 0`
/// - `prev`: only when `current_page > 1`
/// - `next`: only when `current_page < total_pages`
///
/// Omitted links are `None` and absent from the serialized form.
#[must_use]
pub fn build_pagination_links(base_url: &str, current_page: u64, total_pages: u64) -> PaginationLinks {
    let page_url = |page: u64| {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{base_url}{separator}page={page}")
    };

    PaginationLinks {
        self_link: Some(page_url(current_page)),
        first: (current_page > 1).then(|| page_url(1)),
        last: (total_pages > 0).then(|| page_url(total_pages)),
        prev: (current_page > 1).then(|| page_url(current_page - 1)),
        next: (current_page < total_pages).then(|| page_url(current_page + 1)),
    }
}

/// A page request as parsed from the query string by the caller.
///
/// Missing or zero values fall back to page 1 and the configured default
/// page size; oversized pages are clamped to the configured maximum.
///
/// # Example
///
/// ```rust
/// use jsonapi_document::{BaseUrl, DocumentConfig, PageRequest, PageSize};
///
/// let config = DocumentConfig::builder()
///     .base_url(BaseUrl::new("/api").unwrap())
///     .default_page_size(PageSize::new(20).unwrap())
///     .max_page_size(PageSize::new(50).unwrap())
///     .build()
///     .unwrap();
///
/// let request = PageRequest::new(Some(3), Some(500));
/// assert_eq!(request.number(), 3);
/// assert_eq!(request.size(&config).get(), 50);
/// assert_eq!(request.offset(&config), 100);
///
/// assert_eq!(PageRequest::default().size(&config).get(), 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The requested 1-based page number.
    #[serde(default)]
    pub number: Option<u64>,
    /// The requested page size.
    #[serde(default)]
    pub size: Option<u64>,
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(number: Option<u64>, size: Option<u64>) -> Self {
        Self { number, size }
    }

    /// Returns the effective page number (at least 1).
    #[must_use]
    pub fn number(&self) -> u64 {
        self.number.filter(|&n| n > 0).unwrap_or(1)
    }

    /// Returns the effective page size for `config`.
    #[must_use]
    pub fn size(&self, config: &DocumentConfig) -> PageSize {
        self.size
            .and_then(|size| PageSize::new(size.min(config.max_page_size().get())).ok())
            .unwrap_or_else(|| config.default_page_size())
    }

    /// Returns the number of items to skip before the requested page.
    #[must_use]
    pub fn offset(&self, config: &DocumentConfig) -> u64 {
        (self.number() - 1).saturating_mul(self.size(config).get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseUrl;
    use serde_json::json;

    #[test]
    fn test_build_pagination_middle_page() {
        assert_eq!(
            build_pagination(2, 95, 10),
            Pagination {
                current_page: 2,
                prev_page: 1,
                next_page: 3,
                total_pages: 10,
                total_count: 95,
            }
        );
    }

    #[test]
    fn test_build_pagination_single_page() {
        assert_eq!(
            build_pagination(1, 5, 10),
            Pagination {
                current_page: 1,
                prev_page: 1,
                next_page: 1,
                total_pages: 1,
                total_count: 5,
            }
        );
    }

    #[test]
    fn test_build_pagination_exact_multiple_and_last_page() {
        let pagination = build_pagination(10, 100, 10);
        assert_eq!(pagination.total_pages, 10);
        assert_eq!(pagination.prev_page, 9);
        assert_eq!(pagination.next_page, 10);
    }

    #[test]
    fn test_build_pagination_empty_collection() {
        let pagination = build_pagination(1, 0, 25);
        assert_eq!(pagination.total_pages, 0);
        assert_eq!(pagination.prev_page, 1);
        assert_eq!(pagination.next_page, 0);
    }

    #[test]
    #[should_panic]
    fn test_build_pagination_panics_on_zero_page_size() {
        let _ = build_pagination(1, 10, 0);
    }

    #[test]
    fn test_pagination_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(build_pagination(1, 5, 10)).unwrap(),
            json!({
                "current_page": 1,
                "prev_page": 1,
                "next_page": 1,
                "total_pages": 1,
                "total_count": 5
            })
        );
    }

    #[test]
    fn test_links_on_only_page() {
        let links = build_pagination_links("/x", 1, 1);
        assert_eq!(links.self_link.as_deref(), Some("/x?page=1"));
        assert_eq!(links.last.as_deref(), Some("/x?page=1"));
        assert!(links.first.is_none());
        assert!(links.prev.is_none());
        assert!(links.next.is_none());

        assert_eq!(
            serde_json::to_value(&links).unwrap(),
            json!({"self": "/x?page=1", "last": "/x?page=1"})
        );
    }

    #[test]
    fn test_links_on_middle_page() {
        let links = build_pagination_links("/x", 3, 5);
        assert_eq!(links.first.as_deref(), Some("/x?page=1"));
        assert_eq!(links.prev.as_deref(), Some("/x?page=2"));
        assert_eq!(links.next.as_deref(), Some("/x?page=4"));
        assert_eq!(links.last.as_deref(), Some("/x?page=5"));
    }

    #[test]
    fn test_links_with_no_pages() {
        let links = build_pagination_links("/x", 1, 0);
        assert_eq!(links.self_link.as_deref(), Some("/x?page=1"));
        assert!(links.last.is_none());
        assert!(links.next.is_none());
    }

    #[test]
    fn test_links_append_to_existing_query() {
        let links = build_pagination_links("/x?sort=name", 1, 2);
        assert_eq!(links.self_link.as_deref(), Some("/x?sort=name&page=1"));
        assert_eq!(links.next.as_deref(), Some("/x?sort=name&page=2"));
    }

    fn config() -> DocumentConfig {
        DocumentConfig::builder()
            .base_url(BaseUrl::new("/api").unwrap())
            .default_page_size(PageSize::new(10).unwrap())
            .max_page_size(PageSize::new(30).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_page_request_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.number(), 1);
        assert_eq!(request.size(&config()).get(), 10);
        assert_eq!(request.offset(&config()), 0);
    }

    #[test]
    fn test_page_request_ignores_zero_values() {
        let request = PageRequest::new(Some(0), Some(0));
        assert_eq!(request.number(), 1);
        assert_eq!(request.size(&config()).get(), 10);
    }

    #[test]
    fn test_page_request_clamps_to_maximum() {
        let request = PageRequest::new(Some(2), Some(1_000));
        assert_eq!(request.size(&config()).get(), 30);
        assert_eq!(request.offset(&config()), 30);
    }
}
